use feed_error::Result;
use std::collections::BTreeMap;

pub trait BaseStorage<K, V>: AsRef<BTreeMap<K, V>> {
    /// Create or update an entry in the internal mapping.
    fn set(&mut self, id: K, value: V);

    /// Remove an entry from the internal mapping
    /// and persist the result.
    fn remove(&mut self, id: &K) -> Result<()>;

    /// Scan and load the key-value mapping
    /// from pre-configured location, replacing the internal one.
    fn read_fs(&mut self) -> Result<BTreeMap<K, V>>;

    /// Persist the internal key-value mapping
    /// to pre-configured location.
    fn write_fs(&mut self) -> Result<()>;

    /// Remove all persisted data
    /// by pre-configured location,
    /// together with the in-memory entries.
    fn erase(&mut self) -> Result<()>;
}
