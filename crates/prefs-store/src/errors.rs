use thiserror::Error;

#[derive(Debug, Error)]
pub enum PrefsError {
    #[error("prefs io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid prefs key: {0:?}")]
    InvalidKey(String),
}

pub type PrefsResult<T> = Result<T, PrefsError>;
