use feed_error::Result;

use std::fs;
use std::path::Path;

/// Write data to a temporary file next to the destination
/// and rename it over `filename`.
///
/// Readers either see the previous content or the new one,
/// never a partially written file.
pub fn temp_and_move(
    data: &[u8],
    dest_dir: impl AsRef<Path>,
    filename: &str,
) -> Result<()> {
    if filename.is_empty() {
        return Err(anyhow::anyhow!("Empty destination filename").into());
    }
    let dest_dir = dest_dir.as_ref();
    fs::create_dir_all(dest_dir)?;

    let temp_path = dest_dir.join(format!(".{}.tmp", filename));
    fs::write(&temp_path, data)?;
    if let Err(err) = fs::rename(&temp_path, dest_dir.join(filename)) {
        let _ = fs::remove_file(&temp_path);
        return Err(err.into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn replaces_existing_file_and_leaves_no_temp_behind() {
        let dir = TempDir::new("fs-atomic-light").unwrap();
        let target = dir.path().join("data.json");
        fs::write(&target, b"old").unwrap();

        temp_and_move(b"new", dir.path(), "data.json").unwrap();

        assert_eq!(fs::read(&target).unwrap(), b"new");
        assert!(!dir.path().join(".data.json.tmp").exists());
    }

    #[test]
    fn creates_missing_destination_directory() {
        let dir = TempDir::new("fs-atomic-light").unwrap();
        let nested = dir.path().join("a").join("b");

        temp_and_move(b"{}", &nested, "store.json").unwrap();

        assert!(nested.join("store.json").exists());
    }

    #[test]
    fn rejects_empty_filename() {
        let dir = TempDir::new("fs-atomic-light").unwrap();
        assert!(temp_and_move(b"x", dir.path(), "").is_err());
    }
}
