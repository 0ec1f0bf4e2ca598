use std::{cell::RefCell, collections::HashMap, io};

use crate::{
    error::{Result, VsaError},
    store::DocumentStore,
};

/// In-memory document storage for testing
///
/// Not persistent. Single-threaded, like the pipeline it backs.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    documents: RefCell<HashMap<String, Vec<u8>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a document.
    pub fn insert(&self, path: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.documents.borrow_mut().insert(path.into(), bytes.into());
    }

    /// Returns a copy of the document at `path`, if any.
    pub fn get(&self, path: &str) -> Option<Vec<u8>> {
        self.documents.borrow().get(path).cloned()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.documents.borrow().contains_key(path)
    }
}

impl DocumentStore for InMemoryStore {
    fn read(&self, path: &str) -> Result<Vec<u8>> {
        log::trace!("read {path}.");

        self.get(path).ok_or_else(|| {
            VsaError::io(path, io::Error::new(io::ErrorKind::NotFound, "no such document"))
        })
    }

    fn write(&self, path: &str, bytes: &[u8]) -> Result<()> {
        log::trace!("write {path}. size: {}", bytes.len());

        self.insert(path, bytes);

        Ok(())
    }
}
