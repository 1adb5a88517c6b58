use crate::errors::PrefsResult;

/// Flat key-value persistence for the small per-user records the app keeps
/// locally (favorite flags, account glue). One logical value per key; `set`
/// overwrites atomically.
pub trait PrefsStore: Send + Sync {
    fn get(&self, key: &str) -> PrefsResult<Option<Vec<u8>>>;
    fn set(&self, key: &str, value: &[u8]) -> PrefsResult<()>;
    fn remove(&self, key: &str) -> PrefsResult<()>;
}
