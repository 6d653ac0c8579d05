use std::fs;
use std::io;
use std::path::Path;

use crate::ports::FilesystemPort;

/// Filesystem adapter over `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl FilesystemPort for LocalFilesystem {
    fn read_text(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write_text(&self, path: &Path, content: &str) -> io::Result<()> {
        fs::write(path, content)
    }
}
