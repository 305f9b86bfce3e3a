//! Key-value blob storage
//!
//! The persistence primitive underneath the session store: string keys
//! mapped to opaque string blobs.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::Result;

/// String-keyed blob storage
pub trait BlobStore {
    /// Read a blob, `None` when the key is absent
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a blob, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete a blob; absent keys are not an error
    fn remove(&self, key: &str) -> Result<()>;
}

/// In-process blob store (for testing)
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: Mutex<HashMap<String, String>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn blobs(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.blobs.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.blobs().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.blobs().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.blobs().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let store = MemoryBlobStore::new();
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "one").unwrap();
        store.set("k", "two").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("two"));

        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }
}
