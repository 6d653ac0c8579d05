use std::fmt;

/// Non-fatal conditions raised while loading a replacer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadWarning {
    /// A requested environment variable is unset; its entry is omitted.
    MissingEnvironmentVariable(String),
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadWarning::MissingEnvironmentVariable(name) => {
                write!(f, "Environment variable '{}' not found", name)
            }
        }
    }
}
