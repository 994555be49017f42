use std::collections::BTreeSet;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::user::{AuthorSnapshot, User};

pub const JUST_NOW: &str = "Just now";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub author: AuthorSnapshot,
    pub content: String,
    /// Label shown next to the post, e.g. "3d".
    pub timestamp: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub likes: u64,
    pub comments: u64,
    #[serde(default)]
    pub liked_by: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Post {
    pub fn is_liked_by(&self, user: Option<&User>) -> bool {
        user.map_or(false, |user| self.liked_by.contains(&user.id))
    }

    pub fn is_authored_by(&self, user: Option<&User>) -> bool {
        user.map_or(false, |user| self.author.id == user.id)
    }

    /// Add or remove `user_id` from the liker set, moving the like
    /// counter in the same direction. Returns the new liked state.
    pub fn toggle_like(&mut self, user_id: &str) -> bool {
        if self.liked_by.remove(user_id) {
            self.likes = self.likes.saturating_sub(1);
            false
        } else {
            self.liked_by.insert(user_id.to_owned());
            self.likes += 1;
            true
        }
    }

    /// Label relative to `now` for posts that know when they were
    /// created, the stored label otherwise.
    pub fn timestamp_label(&self, now: DateTime<Utc>) -> String {
        match self.created_at {
            Some(created_at) => relative_label(now - created_at),
            None => self.timestamp.clone(),
        }
    }
}

pub fn relative_label(elapsed: Duration) -> String {
    if elapsed < Duration::minutes(1) {
        JUST_NOW.to_owned()
    } else if elapsed < Duration::hours(1) {
        format!("{}m", elapsed.num_minutes())
    } else if elapsed < Duration::days(1) {
        format!("{}h", elapsed.num_hours())
    } else if elapsed < Duration::days(7) {
        format!("{}d", elapsed.num_days())
    } else {
        format!("{}w", elapsed.num_weeks())
    }
}
