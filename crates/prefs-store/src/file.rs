use std::fs;
use std::io::{ErrorKind, Write};
use std::path::PathBuf;

use crate::api::PrefsStore;
use crate::errors::{PrefsError, PrefsResult};

/// One file per key under a root directory. Writes go through a temp file
/// and a rename so a crash never leaves a half-written value behind.
pub struct FilePrefsStore {
    root: PathBuf,
}

impl FilePrefsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn entry_path(&self, key: &str) -> PrefsResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(PrefsError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(key))
    }
}

impl PrefsStore for FilePrefsStore {
    fn get(&self, key: &str) -> PrefsResult<Option<Vec<u8>>> {
        let path = self.entry_path(key)?;
        match fs::read(path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &[u8]) -> PrefsResult<()> {
        let path = self.entry_path(key)?;
        fs::create_dir_all(&self.root)?;
        let temp = path.with_extension("tmp");
        let mut file = fs::File::create(&temp)?;
        file.write_all(value)?;
        file.sync_all()?;
        fs::rename(temp, path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> PrefsResult<()> {
        let path = self.entry_path(key)?;
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
