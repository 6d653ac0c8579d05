use std::io;
use std::path::PathBuf;

use thiserror::Error;

use super::ReplacerFormat;

/// Library-wide error type for tag-replacer operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Replacer file extension is not one of the supported formats.
    #[error("Unsupported file format '{extension}'. Please use JSON, CSV, or YAML.")]
    UnsupportedFormat { extension: String },

    /// Format selector for an inline replacer is not recognized.
    #[error("Invalid format type '{0}'. Use 'json', 'yaml', or 'csv'.")]
    InvalidFormat(String),

    /// Replacer source kind is not recognized.
    #[error("Invalid replacer type '{0}'. Use 'string', 'file', or 'environment'.")]
    InvalidSourceKind(String),

    /// Replacer payload could not be decoded.
    #[error("Failed to parse {format} replacer: {details}")]
    ParseFailure { format: ReplacerFormat, details: String },

    /// Replacer file could not be read.
    #[error("Error reading replacer from file '{}': {}", .path.display(), .source)]
    ReplacerRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Input file could not be read.
    #[error("Error reading input file '{}': {}", .path.display(), .source)]
    InputRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Output file could not be written.
    #[error("Error writing to output file '{}': {}", .path.display(), .source)]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl AppError {
    pub(crate) fn parse_failure<E: std::fmt::Display>(format: ReplacerFormat, err: E) -> Self {
        AppError::ParseFailure { format, details: err.to_string() }
    }

    /// Provide an `io::ErrorKind`-like view for callers that branch on error class.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::UnsupportedFormat { .. }
            | AppError::InvalidFormat(_)
            | AppError::InvalidSourceKind(_) => io::ErrorKind::InvalidInput,
            AppError::ParseFailure { .. } => io::ErrorKind::InvalidData,
            AppError::ReplacerRead { source, .. }
            | AppError::InputRead { source, .. }
            | AppError::OutputWrite { source, .. } => source.kind(),
        }
    }
}
