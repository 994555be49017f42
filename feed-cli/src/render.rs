use chrono::{DateTime, Utc};
use feed_core::{Post, User};

pub fn format_user(user: &User) -> String {
    let mut out = format!(
        "{} ({})\n{}\n{}",
        user.name, user.initials, user.title, user.email
    );
    if let Some(avatar) = &user.avatar {
        out.push_str(&format!("\navatar: {}", avatar));
    }
    out.push_str(&format!("\nid: {}", user.id));
    out
}

pub fn format_post(
    post: &Post,
    viewer: Option<&User>,
    now: DateTime<Utc>,
) -> String {
    let mut out = format!(
        "[{}] {} ({}) | {} | {}\n{}",
        post.id,
        post.author.name,
        post.author.initials,
        post.author.title,
        post.timestamp_label(now),
        post.content
    );
    if let Some(image) = &post.image {
        out.push_str(&format!("\nimage: {}", image));
    }

    out.push_str(&format!(
        "\n{} likes | {} comments",
        post.likes, post.comments
    ));
    if post.is_liked_by(viewer) {
        out.push_str(" | liked by you");
    }
    if post.is_authored_by(viewer) {
        out.push_str(" | your post");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use feed_core::{AuthStore, PostStore};

    fn viewer() -> User {
        let mut auth = AuthStore::new();
        auth.login("jane@example.com", "pw", Utc::now())
            .unwrap()
            .clone()
    }

    #[test]
    fn seeded_post_renders_stored_label_and_image() {
        let store = PostStore::seeded();
        let out = format_post(&store.posts()[0], None, Utc::now());

        assert!(out.starts_with("[1] Jane Smith (JS) | Product Manager"));
        assert!(out.contains("| 1d\n"));
        assert!(out.contains("\nimage: https://images.unsplash.com/"));
        assert!(out.ends_with("324 likes | 52 comments"));
    }

    #[test]
    fn viewer_markers() {
        let user = viewer();
        let now = Utc::now();
        let mut store = PostStore::seeded();
        store.add_post(Some(&user), "Mine", None, now);
        store.like_post(Some(&user), "2");

        let mine = format_post(&store.posts()[0], Some(&user), now);
        assert!(mine.contains("| Just now\n"));
        assert!(mine.ends_with("| your post"));

        let liked = format_post(store.get("2").unwrap(), Some(&user), now);
        assert!(liked.ends_with("88 likes | 12 comments | liked by you"));
    }

    #[test]
    fn user_card_lists_profile_fields() {
        let user = viewer();
        let out = format_user(&user);
        assert!(out.starts_with("jane (JA)\nNew User\njane@example.com"));
        assert!(!out.contains("avatar"));
    }
}
