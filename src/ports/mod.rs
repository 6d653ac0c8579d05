mod environment;
mod filesystem;

pub use environment::EnvironmentPort;
pub use filesystem::FilesystemPort;
