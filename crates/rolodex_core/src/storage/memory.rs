//! In-memory document storage for tests and ephemeral use.

use super::{Storage, StorageResult};
use std::collections::HashMap;

/// HashMap-backed document storage. Contents vanish on drop.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    documents: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.documents.get(key).cloned())
    }

    fn write(&mut self, key: &str, document: &str) -> StorageResult<()> {
        self.documents.insert(key.to_string(), document.to_string());
        Ok(())
    }
}
