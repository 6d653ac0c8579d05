//! In-memory adapters for unit tests.

mod map_environment;
mod memory_filesystem;

pub use map_environment::MapEnvironment;
pub use memory_filesystem::MemoryFilesystem;
