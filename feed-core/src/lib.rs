pub mod app;
pub mod auth;
pub mod fixtures;
pub mod post;
pub mod posts;
pub mod route;
pub mod user;

pub use app::AppState;
pub use auth::AuthStore;
pub use post::Post;
pub use posts::PostStore;
pub use route::{navigate, Navigation, Route};
pub use user::{AuthorSnapshot, User};

#[cfg(test)]
mod tests;
