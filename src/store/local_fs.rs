use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use log::{debug, trace};
use tempfile::NamedTempFile;

use crate::{
    error::{Result, VsaError},
    store::DocumentStore,
};

/// Documents on the local filesystem.
///
/// Relative paths are resolved against `root` when one is set, otherwise
/// against the process working directory.
#[derive(Debug, Clone, Default)]
pub struct LocalFs {
    root: Option<PathBuf>,
}

impl LocalFs {
    pub fn new() -> Self {
        Self { root: None }
    }

    pub fn with_root(root: PathBuf) -> Self {
        Self { root: Some(root) }
    }

    fn resolve(&self, path: &str) -> PathBuf {
        match &self.root {
            Some(root) => root.join(path),
            None => PathBuf::from(path),
        }
    }
}

impl DocumentStore for LocalFs {
    fn read(&self, path: &str) -> Result<Vec<u8>> {
        trace!("read {path}.");

        fs::read(self.resolve(path)).map_err(|e| VsaError::io(path, e))
    }

    fn write(&self, path: &str, bytes: &[u8]) -> Result<()> {
        let target = self.resolve(path);
        trace!("write {path}. size: {}", bytes.len());

        // Stage next to the target so the final rename stays on one filesystem.
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => Path::new(".").to_path_buf(),
        };

        let mut staged = NamedTempFile::new_in(&dir).map_err(|e| VsaError::io(path, e))?;
        staged
            .write_all(bytes)
            .and_then(|_| staged.as_file().sync_all())
            .map_err(|e| VsaError::io(path, e))?;
        staged
            .persist(&target)
            .map_err(|e| VsaError::io(path, e.error))?;

        debug!("wrote {} bytes to {}", bytes.len(), target.display());

        Ok(())
    }
}
