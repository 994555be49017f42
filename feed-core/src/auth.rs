use chrono::{DateTime, Utc};

use crate::user::{email_local_part, initials, User, DEFAULT_TITLE};
use feed_error::{FeedError, Result};

/// Holds the mock "current user".
///
/// No credential is ever verified: any non-empty input signs in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthStore {
    user: Option<User>,
}

impl AuthStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume a session from a stored user record.
    pub fn restore(mut user: User) -> Self {
        if user.initials.is_empty() {
            user.initials = initials(&user.name);
        }
        Self { user: Some(user) }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn login(
        &mut self,
        email: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Result<&User> {
        if email.is_empty() || password.is_empty() {
            return Err(FeedError::InvalidCredentials);
        }

        let name = email_local_part(email);
        let user = User::synthesize(name, email, DEFAULT_TITLE, now);
        log::debug!("Signed in {} as {}", email, user.id);
        Ok(self.user.insert(user))
    }

    pub fn signup(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        title: &str,
        now: DateTime<Utc>,
    ) -> Result<&User> {
        if name.is_empty() || email.is_empty() || password.is_empty() {
            return Err(FeedError::InvalidSignup);
        }

        let user = User::synthesize(name, email, title, now);
        log::debug!("Signed up {} as {}", email, user.id);
        Ok(self.user.insert(user))
    }

    pub fn logout(&mut self) -> Option<User> {
        self.user.take()
    }

    /// Change the public profile of the current user.
    ///
    /// Initials follow the new name. Posts already written keep the
    /// author snapshot they were created with.
    pub fn update_profile(
        &mut self,
        name: &str,
        title: &str,
        avatar: Option<&str>,
    ) -> Result<&User> {
        let user = self.user.as_mut().ok_or(FeedError::NotAuthenticated)?;
        if name.is_empty() {
            return Err(FeedError::InvalidProfile(
                "name must not be empty".to_owned(),
            ));
        }

        user.name = name.to_owned();
        user.title = title.to_owned();
        user.avatar = avatar
            .filter(|avatar| !avatar.is_empty())
            .map(str::to_owned);
        user.initials = initials(name);
        Ok(user)
    }
}
