use std::path::{Path, PathBuf};

use feed_core::AppState;
use fs_storage::file_storage::FileStorage;
use fs_storage::{FEED_FOLDER, STORAGE_FILE};
use serde_json::Value;

use crate::AppError;

pub type State = AppState<FileStorage<String, Value>>;

/// Storage file given on the command line, or the default one
/// in the user data directory.
pub fn provide_storage_path(
    storage: &Option<PathBuf>,
) -> Result<PathBuf, AppError> {
    if let Some(path) = storage {
        return Ok(path.clone());
    }

    let base = dirs::data_dir()
        .or_else(home::home_dir)
        .ok_or(AppError::HomeDirNotFound)?;
    Ok(base.join(FEED_FOLDER).join(STORAGE_FILE))
}

pub fn open_state(path: &Path) -> Result<State, AppError> {
    log::debug!("Opening storage at {}", path.display());
    let storage = FileStorage::new("local storage".to_owned(), path)?;
    Ok(AppState::open(storage)?)
}
