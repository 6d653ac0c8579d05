use std::io;
use std::path::Path;

/// Port for whole-file text reads and writes.
pub trait FilesystemPort {
    /// Read an entire file as UTF-8 text.
    fn read_text(&self, path: &Path) -> io::Result<String>;

    /// Create or truncate `path` and write `content` to it.
    fn write_text(&self, path: &Path, content: &str) -> io::Result<()>;
}
