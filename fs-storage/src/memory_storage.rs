use std::collections::BTreeMap;

use crate::base_storage::BaseStorage;
use feed_error::{FeedError, Result};

/// Storage keeping its "persisted" copy in memory.
///
/// Mirrors the [`crate::file_storage::FileStorage`] contract without
/// touching the filesystem: `set` only changes the working mapping,
/// `write_fs` snapshots it.
pub struct MemoryStorage<K, V> {
    label: String,
    data: BTreeMap<K, V>,
    persisted: Option<BTreeMap<K, V>>,
    writes: usize,
}

impl<K, V> MemoryStorage<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    pub fn new(label: String) -> Self {
        Self {
            label,
            data: BTreeMap::new(),
            persisted: None,
            writes: 0,
        }
    }

    /// Snapshot of what has been written so far, `None` if nothing was
    /// ever written or the storage was erased.
    pub fn persisted(&self) -> Option<&BTreeMap<K, V>> {
        self.persisted.as_ref()
    }

    /// Number of successful `write_fs` calls.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl<K, V> BaseStorage<K, V> for MemoryStorage<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    fn set(&mut self, id: K, value: V) {
        self.data.insert(id, value);
    }

    fn remove(&mut self, id: &K) -> Result<()> {
        if self.data.remove(id).is_none() {
            return Err(FeedError::Storage(
                self.label.clone(),
                "Key not found".to_owned(),
            ));
        }
        self.write_fs()
    }

    fn read_fs(&mut self) -> Result<BTreeMap<K, V>> {
        let persisted = self.persisted.as_ref().ok_or_else(|| {
            FeedError::Storage(
                self.label.clone(),
                "Nothing has been persisted".to_owned(),
            )
        })?;
        self.data = persisted.clone();
        Ok(self.data.clone())
    }

    fn write_fs(&mut self) -> Result<()> {
        self.persisted = Some(self.data.clone());
        self.writes += 1;
        log::debug!(
            "{} {} entries have been written",
            self.label,
            self.data.len()
        );
        Ok(())
    }

    fn erase(&mut self) -> Result<()> {
        self.data.clear();
        self.persisted = None;
        Ok(())
    }
}

impl<K, V> AsRef<BTreeMap<K, V>> for MemoryStorage<K, V> {
    fn as_ref(&self) -> &BTreeMap<K, V> {
        &self.data
    }
}
