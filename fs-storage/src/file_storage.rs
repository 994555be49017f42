use serde::{Deserialize, Serialize};
use std::fs;
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use crate::base_storage::BaseStorage;
use feed_error::{FeedError, Result};
use fs_atomic_light::temp_and_move;

/*
Note on `FileStorage` format:

The whole namespace lives in a single JSON document
`{"version": 1, "entries": {...}}`. Documents with another version
are rejected instead of being silently reinterpreted.
*/
const STORAGE_VERSION: i32 = 1;

/// Represents a file storage system that persists data to disk.
pub struct FileStorage<K, V>
where
    K: Ord,
{
    label: String,
    path: PathBuf,
    data: FileStorageData<K, V>,
}

/// A struct that represents the data stored in a [`FileStorage`] instance.
///
///
/// This is the data that is serialized and deserialized to and from disk.
#[derive(Serialize, Deserialize)]
pub struct FileStorageData<K, V>
where
    K: Ord,
{
    version: i32,
    entries: BTreeMap<K, V>,
}

impl<K, V> FileStorage<K, V>
where
    K: Ord + Clone + serde::Serialize + serde::de::DeserializeOwned,
    V: Clone + serde::Serialize + serde::de::DeserializeOwned,
{
    /// Create a new file storage with a diagnostic label and file path.
    /// Existing data at `path` is loaded, a missing file means an empty
    /// storage which is only created on the first write.
    pub fn new(label: String, path: &Path) -> Result<Self> {
        let mut storage = Self {
            label,
            path: PathBuf::from(path),
            data: FileStorageData {
                version: STORAGE_VERSION,
                entries: BTreeMap::new(),
            },
        };

        if path.exists() {
            storage.read_fs()?;
        }

        Ok(storage)
    }

    fn storage_error(&self, message: impl Into<String>) -> FeedError {
        FeedError::Storage(self.label.clone(), message.into())
    }
}

impl<K, V> BaseStorage<K, V> for FileStorage<K, V>
where
    K: Ord + Clone + serde::Serialize + serde::de::DeserializeOwned,
    V: Clone + serde::Serialize + serde::de::DeserializeOwned,
{
    /// Set a key-value pair in the storage
    fn set(&mut self, key: K, value: V) {
        self.data.entries.insert(key, value);
    }

    /// Remove a key-value pair from the storage given a key
    fn remove(&mut self, id: &K) -> Result<()> {
        if self.data.entries.remove(id).is_none() {
            return Err(self.storage_error("Key not found"));
        }
        self.write_fs()
    }

    /// Read the data from the storage file
    fn read_fs(&mut self) -> Result<BTreeMap<K, V>> {
        if !self.path.exists() {
            return Err(self.storage_error("File does not exist"));
        }

        let file = fs::File::open(&self.path)?;
        let data: FileStorageData<K, V> = serde_json::from_reader(file)
            .map_err(|err| self.storage_error(err.to_string()))?;
        if data.version != STORAGE_VERSION {
            return Err(self.storage_error(format!(
                "Storage version mismatch: expected {}, got {}",
                STORAGE_VERSION, data.version
            )));
        }

        log::debug!(
            "{} {} entries have been read",
            self.label,
            data.entries.len()
        );
        self.data.entries = data.entries;
        Ok(self.data.entries.clone())
    }

    /// Write the data to the storage file
    fn write_fs(&mut self) -> Result<()> {
        let parent_dir = self
            .path
            .parent()
            .ok_or_else(|| self.storage_error("Failed to get parent directory"))?;
        let file_name = self
            .path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| self.storage_error("Failed to get file name"))?;

        let value_data = serde_json::to_vec_pretty(&self.data)?;
        temp_and_move(&value_data, parent_dir, file_name)?;

        log::info!(
            "{} {} entries have been written",
            self.label,
            self.data.entries.len()
        );
        Ok(())
    }

    /// Erase the storage file from disk and forget every entry
    fn erase(&mut self) -> Result<()> {
        fs::remove_file(&self.path)
            .map_err(|err| self.storage_error(err.to_string()))?;
        self.data.entries.clear();
        Ok(())
    }
}

impl<K, V> AsRef<BTreeMap<K, V>> for FileStorage<K, V>
where
    K: Ord,
{
    fn as_ref(&self) -> &BTreeMap<K, V> {
        &self.data.entries
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use tempdir::TempDir;

    use crate::{base_storage::BaseStorage, file_storage::FileStorage};
    use feed_error::FeedError;

    #[test_log::test]
    fn test_file_storage_write_read() {
        let temp_dir =
            TempDir::new("tmp").expect("Failed to create temporary directory");
        let storage_path = temp_dir.path().join("test_storage.json");

        let mut file_storage =
            FileStorage::new("TestStorage".to_string(), &storage_path)
                .unwrap();

        file_storage.set("key1".to_string(), "value1".to_string());
        file_storage.set("key2".to_string(), "value2".to_string());

        assert!(file_storage.remove(&"key1".to_string()).is_ok());
        let data_read: BTreeMap<_, _> = file_storage
            .read_fs()
            .expect("Failed to read data from disk");

        assert_eq!(data_read.len(), 1);
        assert_eq!(data_read.get("key2").map(|v| v.as_str()), Some("value2"))
    }

    #[test]
    fn test_file_storage_new_loads_existing_file() {
        let temp_dir = TempDir::new("tmp").unwrap();
        let storage_path = temp_dir.path().join("nested").join("store.json");

        let mut first: FileStorage<String, i32> =
            FileStorage::new("First".to_string(), &storage_path).unwrap();
        first.set("posts".to_string(), 3);
        first.write_fs().unwrap();

        let second: FileStorage<String, i32> =
            FileStorage::new("Second".to_string(), &storage_path).unwrap();
        assert_eq!(second.as_ref().get("posts"), Some(&3));
    }

    #[test]
    fn test_file_storage_set_is_not_persisted_until_written() {
        let temp_dir = TempDir::new("tmp").unwrap();
        let storage_path = temp_dir.path().join("store.json");

        let mut file_storage: FileStorage<String, String> =
            FileStorage::new("TestStorage".to_string(), &storage_path)
                .unwrap();
        file_storage.set("key".to_string(), "value".to_string());

        assert!(!storage_path.exists());
    }

    #[test]
    fn test_file_storage_remove_missing_key() {
        let temp_dir = TempDir::new("tmp").unwrap();
        let storage_path = temp_dir.path().join("store.json");

        let mut file_storage: FileStorage<String, String> =
            FileStorage::new("TestStorage".to_string(), &storage_path)
                .unwrap();

        let err = file_storage
            .remove(&"absent".to_string())
            .unwrap_err();
        assert!(matches!(err, FeedError::Storage(label, _) if label == "TestStorage"));
    }

    #[test]
    fn test_file_storage_auto_delete() {
        let temp_dir =
            TempDir::new("tmp").expect("Failed to create temporary directory");
        let storage_path = temp_dir.path().join("test_storage.json");

        let mut file_storage =
            FileStorage::new("TestStorage".to_string(), &storage_path)
                .unwrap();

        file_storage.set("key1".to_string(), "value1".to_string());
        file_storage.set("key1".to_string(), "value2".to_string());
        assert!(file_storage.write_fs().is_ok());
        assert!(storage_path.exists());

        if let Err(err) = file_storage.erase() {
            panic!("Failed to delete file: {:?}", err);
        }
        assert!(!storage_path.exists());
    }

    #[test]
    fn test_file_storage_erase_does_not_resurrect_entries() {
        let temp_dir = TempDir::new("tmp").unwrap();
        let storage_path = temp_dir.path().join("store.json");

        let mut file_storage: FileStorage<String, String> =
            FileStorage::new("TestStorage".to_string(), &storage_path)
                .unwrap();
        file_storage.set("key".to_string(), "value".to_string());
        file_storage.write_fs().unwrap();

        file_storage.erase().unwrap();
        assert!(file_storage.as_ref().is_empty());

        file_storage.write_fs().unwrap();
        let reopened: FileStorage<String, String> =
            FileStorage::new("TestStorage".to_string(), &storage_path)
                .unwrap();
        assert!(reopened.as_ref().is_empty());
    }

    #[test]
    fn test_file_storage_rejects_other_versions() {
        let temp_dir = TempDir::new("tmp").unwrap();
        let storage_path = temp_dir.path().join("store.json");
        std::fs::write(&storage_path, r#"{"version": 7, "entries": {}}"#)
            .unwrap();

        let result: Result<FileStorage<String, String>, _> =
            FileStorage::new("TestStorage".to_string(), &storage_path);
        assert!(matches!(result, Err(FeedError::Storage(_, _))));
    }

    #[test]
    fn test_file_storage_rejects_garbage() {
        let temp_dir = TempDir::new("tmp").unwrap();
        let storage_path = temp_dir.path().join("store.json");
        std::fs::write(&storage_path, "not json at all").unwrap();

        let result: Result<FileStorage<String, String>, _> =
            FileStorage::new("TestStorage".to_string(), &storage_path);
        assert!(result.is_err());
    }
}
