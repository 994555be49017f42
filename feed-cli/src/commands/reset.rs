use std::fs;
use std::path::Path;

use crate::AppError;

#[derive(Clone, Debug, clap::Args)]
#[clap(name = "reset", about = "Erase the storage file")]
pub struct Reset {}

impl Reset {
    /// Works on the raw file so that unreadable storage can be reset too.
    pub fn run(&self, path: &Path) -> Result<(), AppError> {
        if path.exists() {
            fs::remove_file(path)?;
            println!("Erased {}", path.display());
        } else {
            println!("Nothing stored at {}", path.display());
        }
        Ok(())
    }
}
