use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::auth::AuthStore;
use crate::post::Post;
use crate::posts::PostStore;
use crate::user::User;
use feed_error::Result;
use fs_storage::base_storage::BaseStorage;
use fs_storage::{POSTS_KEY, USER_KEY};

pub type Clock = fn() -> DateTime<Utc>;

/// Application state: the current user, the feed, and the storage both
/// are mirrored to after every change.
pub struct AppState<S> {
    storage: S,
    auth: AuthStore,
    posts: PostStore,
    clock: Clock,
}

impl<S> AppState<S>
where
    S: BaseStorage<String, Value>,
{
    /// Restore the session and feed from `storage`.
    ///
    /// A storage without a feed gets the seeded posts, written back
    /// immediately.
    pub fn open(storage: S) -> Result<Self> {
        let auth = match storage.as_ref().get(USER_KEY) {
            Some(value) => {
                let user: User = serde_json::from_value(value.clone())?;
                log::debug!("Restored session of {}", user.id);
                AuthStore::restore(user)
            }
            None => AuthStore::new(),
        };

        let stored_posts = storage
            .as_ref()
            .get(POSTS_KEY)
            .map(|value| serde_json::from_value::<Vec<Post>>(value.clone()))
            .transpose()?;

        let mut state = Self {
            storage,
            auth,
            posts: PostStore::default(),
            clock: Utc::now,
        };
        match stored_posts {
            Some(posts) => state.posts = PostStore::new(posts),
            None => {
                log::info!("No stored feed, seeding sample posts");
                state.posts = PostStore::seeded();
                state.persist_posts()?;
            }
        }

        Ok(state)
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn user(&self) -> Option<&User> {
        self.auth.user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }

    pub fn posts(&self) -> &[Post] {
        self.posts.posts()
    }

    pub fn post(&self, id: &str) -> Option<&Post> {
        self.posts.get(id)
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn now(&self) -> DateTime<Utc> {
        (self.clock)()
    }

    pub fn login(&mut self, email: &str, password: &str) -> Result<User> {
        let now = self.now();
        let user = self.auth.login(email, password, now)?.clone();
        self.persist_user(&user)?;
        Ok(user)
    }

    pub fn signup(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        title: &str,
    ) -> Result<User> {
        let now = self.now();
        let user = self
            .auth
            .signup(name, email, password, title, now)?
            .clone();
        self.persist_user(&user)?;
        Ok(user)
    }

    /// Forget the current user, in memory and in storage.
    pub fn logout(&mut self) -> Result<()> {
        if let Some(user) = self.auth.logout() {
            log::debug!("Signed out {}", user.id);
        }
        let key = USER_KEY.to_owned();
        if self.storage.as_ref().contains_key(&key) {
            self.storage.remove(&key)?;
        }
        Ok(())
    }

    pub fn update_profile(
        &mut self,
        name: &str,
        title: &str,
        avatar: Option<&str>,
    ) -> Result<User> {
        let user = self.auth.update_profile(name, title, avatar)?.clone();
        self.persist_user(&user)?;
        Ok(user)
    }

    /// Publish a post as the current user. `Ok(None)` when nobody is
    /// signed in, in which case nothing is written.
    pub fn add_post(
        &mut self,
        content: &str,
        image: Option<&str>,
    ) -> Result<Option<Post>> {
        let now = self.now();
        let post = self
            .posts
            .add_post(self.auth.user(), content, image, now)
            .cloned();
        if post.is_some() {
            self.persist_posts()?;
        }
        Ok(post)
    }

    pub fn update_post(
        &mut self,
        id: &str,
        content: &str,
        image: Option<&str>,
    ) -> Result<bool> {
        let updated = self.posts.update_post(id, content, image);
        if updated {
            self.persist_posts()?;
        }
        Ok(updated)
    }

    pub fn delete_post(&mut self, id: &str) -> Result<bool> {
        let deleted = self.posts.delete_post(id);
        if deleted {
            self.persist_posts()?;
        }
        Ok(deleted)
    }

    /// Toggle the current user's like on post `id`, returning the new
    /// liked state.
    pub fn like_post(&mut self, id: &str) -> Result<Option<bool>> {
        let liked = self.posts.like_post(self.auth.user(), id);
        if liked.is_some() {
            self.persist_posts()?;
        }
        Ok(liked)
    }

    fn persist_user(&mut self, user: &User) -> Result<()> {
        self.storage
            .set(USER_KEY.to_owned(), serde_json::to_value(user)?);
        self.storage.write_fs()
    }

    fn persist_posts(&mut self) -> Result<()> {
        let posts = serde_json::to_value(self.posts.posts())?;
        self.storage.set(POSTS_KEY.to_owned(), posts);
        self.storage.write_fs()
    }
}
