use std::fmt;
use std::str::FromStr;

use super::{AppError, ReplacerFormat};

/// Where replacement data comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SourceKind {
    /// Payload is the replacer document itself.
    #[default]
    String,
    /// Payload is a path; the format is inferred from its extension.
    File,
    /// Payload is a comma-separated list of environment variable names.
    Environment,
}

impl SourceKind {
    pub const ALL: [SourceKind; 3] =
        [SourceKind::String, SourceKind::File, SourceKind::Environment];

    pub fn name(&self) -> &'static str {
        match self {
            SourceKind::String => "string",
            SourceKind::File => "file",
            SourceKind::Environment => "environment",
        }
    }
}

impl FromStr for SourceKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SourceKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| AppError::InvalidSourceKind(s.to_string()))
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A replacer source as supplied by the caller.
///
/// `format` is only consulted for [`SourceKind::String`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDescriptor {
    pub kind: SourceKind,
    pub payload: String,
    pub format: ReplacerFormat,
}

impl SourceDescriptor {
    pub fn new(kind: SourceKind, payload: impl Into<String>, format: ReplacerFormat) -> Self {
        Self { kind, payload: payload.into(), format }
    }

    pub fn inline(payload: impl Into<String>, format: ReplacerFormat) -> Self {
        Self::new(SourceKind::String, payload, format)
    }

    pub fn file(path: impl Into<String>) -> Self {
        Self::new(SourceKind::File, path, ReplacerFormat::default())
    }

    pub fn environment(names: impl Into<String>) -> Self {
        Self::new(SourceKind::Environment, names, ReplacerFormat::default())
    }

    /// Environment variable names listed in the payload, trimmed.
    pub fn variable_names(&self) -> impl Iterator<Item = &str> {
        self.payload.split(',').map(str::trim)
    }
}
