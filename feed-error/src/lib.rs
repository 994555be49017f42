use thiserror::Error;

pub type Result<T> = std::result::Result<T, FeedError>;

#[derive(Error, Debug)]
pub enum FeedError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parsing error: {0}")]
    Parse(String),
    #[error("Storage error: {0} {1}")]
    Storage(String, String),
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Invalid signup information")]
    InvalidSignup,
    #[error("Invalid profile: {0}")]
    InvalidProfile(String),
    #[error("Not authenticated")]
    NotAuthenticated,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<serde_json::Error> for FeedError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}
