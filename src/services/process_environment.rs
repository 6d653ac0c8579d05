use std::env;

use crate::ports::EnvironmentPort;

/// Environment adapter backed by the current process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl EnvironmentPort for ProcessEnvironment {
    fn lookup(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }
}
