pub mod api;
pub mod errors;
pub mod file;
pub mod mem;

pub use api::PrefsStore;
pub use errors::{PrefsError, PrefsResult};
pub use file::FilePrefsStore;
pub use mem::MemoryPrefsStore;
