use crate::ports::{EnvironmentPort, FilesystemPort};

/// Adapters a replace run reads variables and files through.
///
/// Production code wires the process environment and the local disk; unit
/// tests swap in map- and memory-backed adapters.
pub struct AppContext<E: EnvironmentPort, F: FilesystemPort> {
    environment: E,
    filesystem: F,
}

impl<E: EnvironmentPort, F: FilesystemPort> AppContext<E, F> {
    pub fn new(environment: E, filesystem: F) -> Self {
        Self { environment, filesystem }
    }

    /// Lookup source for `environment`-kind replacers.
    pub fn environment(&self) -> &E {
        &self.environment
    }

    /// Reads replacer and input files, writes the output file.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }
}
