mod local_filesystem;
mod process_environment;

pub use local_filesystem::LocalFilesystem;
pub use process_environment::ProcessEnvironment;
