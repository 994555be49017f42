use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fallback shown when there is no name to take initials from.
pub const DEFAULT_INITIALS: &str = "U";

/// Title given to users created through login rather than signup.
pub const DEFAULT_TITLE: &str = "New User";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub initials: String,
}

impl User {
    pub(crate) fn synthesize(
        name: &str,
        email: &str,
        title: &str,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: user_id(now),
            name: name.to_owned(),
            email: email.to_owned(),
            title: title.to_owned(),
            avatar: None,
            initials: initials(name),
        }
    }
}

/// Public part of a [`User`] copied into every post they write.
///
/// The copy is taken once, when the post is created, and is not
/// refreshed when the user later edits their profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorSnapshot {
    pub id: String,
    pub name: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub initials: String,
}

impl From<&User> for AuthorSnapshot {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            title: user.title.clone(),
            avatar: user.avatar.clone(),
            initials: user.initials.clone(),
        }
    }
}

pub fn user_id(now: DateTime<Utc>) -> String {
    format!("user-{}", now.timestamp_millis())
}

/// Local part of an email address, i.e. everything before the first `@`.
pub fn email_local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or_default()
}

/// Derive up to two uppercase initials from a display name.
///
/// A single word contributes its first two characters, several words
/// contribute the first character of each non-empty word.
pub fn initials(name: &str) -> String {
    if name.is_empty() {
        return DEFAULT_INITIALS.to_owned();
    }

    let parts: Vec<&str> = name.split(' ').collect();
    if parts.len() == 1 {
        return name
            .chars()
            .take(2)
            .collect::<String>()
            .to_uppercase();
    }

    parts
        .iter()
        .filter_map(|part| part.chars().next())
        .collect::<String>()
        .to_uppercase()
        .chars()
        .take(2)
        .collect()
}
