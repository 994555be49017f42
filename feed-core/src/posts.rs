use chrono::{DateTime, Utc};

use crate::fixtures::seeded_posts;
use crate::post::{Post, JUST_NOW};
use crate::user::{AuthorSnapshot, User};

/// Ordered post feed, newest first.
///
/// Every operation is a plain transformation of the list. Persisting the
/// result is left to [`crate::app::AppState`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PostStore {
    posts: Vec<Post>,
}

impl PostStore {
    pub fn new(posts: Vec<Post>) -> Self {
        Self { posts }
    }

    pub fn seeded() -> Self {
        Self::new(seeded_posts())
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn get(&self, id: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    /// Prepend a post written by `author`.
    ///
    /// Nothing happens without an author.
    pub fn add_post(
        &mut self,
        author: Option<&User>,
        content: &str,
        image: Option<&str>,
        now: DateTime<Utc>,
    ) -> Option<&Post> {
        let Some(author) = author else {
            log::warn!("Ignoring new post: nobody is signed in");
            return None;
        };

        let post = Post {
            id: self.next_post_id(now),
            author: AuthorSnapshot::from(author),
            content: content.to_owned(),
            timestamp: JUST_NOW.to_owned(),
            image: non_empty(image),
            likes: 0,
            comments: 0,
            liked_by: Default::default(),
            created_at: Some(now),
        };
        log::debug!("Adding post {} by {}", post.id, author.id);
        self.posts.insert(0, post);
        self.posts.first()
    }

    /// Replace the content of post `id`. The image is only replaced when
    /// a non-empty one is given.
    pub fn update_post(
        &mut self,
        id: &str,
        content: &str,
        image: Option<&str>,
    ) -> bool {
        let Some(post) = self.posts.iter_mut().find(|post| post.id == id)
        else {
            log::debug!("No post {} to update", id);
            return false;
        };

        post.content = content.to_owned();
        if let Some(image) = non_empty(image) {
            post.image = Some(image);
        }
        true
    }

    pub fn delete_post(&mut self, id: &str) -> bool {
        let before = self.posts.len();
        self.posts.retain(|post| post.id != id);
        before != self.posts.len()
    }

    /// Toggle the like of `user` on post `id`.
    ///
    /// Returns the new liked state, or `None` when nobody is signed in
    /// or the post does not exist.
    pub fn like_post(&mut self, user: Option<&User>, id: &str) -> Option<bool> {
        let Some(user) = user else {
            log::warn!("Ignoring like on {}: nobody is signed in", id);
            return None;
        };

        let post = self.posts.iter_mut().find(|post| post.id == id)?;
        let liked = post.toggle_like(&user.id);
        log::debug!(
            "{} {} post {}",
            user.id,
            if liked { "liked" } else { "unliked" },
            id
        );
        Some(liked)
    }

    /// Creation millis, bumped past every numeric id already in the feed.
    ///
    /// When the newest id cannot be bumped any further, the first id
    /// from the creation millis on that is not taken yet is used.
    fn next_post_id(&self, now: DateTime<Utc>) -> String {
        let now = now.timestamp_millis();
        let newest = self
            .posts
            .iter()
            .filter_map(|post| post.id.parse::<i64>().ok())
            .max();
        let mut id = match newest.and_then(|newest| newest.checked_add(1)) {
            Some(next) if next > now => next,
            _ => now,
        };
        while self.get(&id.to_string()).is_some() {
            id = id.wrapping_add(1);
        }
        id.to_string()
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}
