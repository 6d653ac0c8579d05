use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::ports::FilesystemPort;

/// In-memory filesystem for testing.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    files: Arc<Mutex<HashMap<PathBuf, String>>>,
    read_only: bool,
}

impl MemoryFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every write with `PermissionDenied`.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn with_file(self, path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        self.files.lock().unwrap().insert(path.into(), content.into());
        self
    }

    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }
}

impl FilesystemPort for MemoryFilesystem {
    fn read_text(&self, path: &Path) -> io::Result<String> {
        self.contents(path)
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "file not found"))
    }

    fn write_text(&self, path: &Path, content: &str) -> io::Result<()> {
        if self.read_only {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only filesystem"));
        }
        self.files.lock().unwrap().insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
