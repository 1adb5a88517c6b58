use std::collections::HashMap;

use parking_lot::RwLock;

use crate::api::PrefsStore;
use crate::errors::PrefsResult;

/// Ephemeral store for tests and previews; nothing survives the process.
#[derive(Default)]
pub struct MemoryPrefsStore {
    inner: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryPrefsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn get(&self, key: &str) -> PrefsResult<Option<Vec<u8>>> {
        Ok(self.inner.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &[u8]) -> PrefsResult<()> {
        self.inner.write().insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn remove(&self, key: &str) -> PrefsResult<()> {
        self.inner.write().remove(key);
        Ok(())
    }
}
