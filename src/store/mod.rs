use crate::error::Result;

pub mod in_memory;
pub mod local_fs;

pub use in_memory::InMemoryStore;
pub use local_fs::LocalFs;

/// Byte-level access to the documents a conversion reads and writes.
pub trait DocumentStore {
    /// Read the whole document at `path`.
    fn read(&self, path: &str) -> Result<Vec<u8>>;

    /// Write a complete document to `path`.
    /// Readers must never observe a partially written document.
    fn write(&self, path: &str, bytes: &[u8]) -> Result<()>;
}
