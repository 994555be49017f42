use feed_error::FeedError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Couldn't retrieve home directory!")]
    HomeDirNotFound,

    #[error("Sign in required")]
    SignInRequired,

    #[error("Post not found: {0}")]
    PostNotFound(String),

    #[error("Only the author can change post {0}")]
    NotAuthor(String),

    #[error("Post content must not be empty")]
    EmptyPost,

    #[error(transparent)]
    IoError(#[from] io::Error),

    #[error(transparent)]
    FeedError(#[from] FeedError),
}
