use std::fmt;
use std::path::Path;
use std::str::FromStr;

use super::AppError;

/// Serialization formats a replacer payload can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReplacerFormat {
    #[default]
    Json,
    Yaml,
    Csv,
}

impl ReplacerFormat {
    /// All supported formats.
    pub const ALL: [ReplacerFormat; 3] =
        [ReplacerFormat::Json, ReplacerFormat::Yaml, ReplacerFormat::Csv];

    /// Selector name accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            ReplacerFormat::Json => "json",
            ReplacerFormat::Yaml => "yaml",
            ReplacerFormat::Csv => "csv",
        }
    }

    /// Infer the format of a replacer file from its extension.
    ///
    /// Matching is case-insensitive and accepts both `.yaml` and `.yml`.
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "json" => Ok(ReplacerFormat::Json),
            "yaml" | "yml" => Ok(ReplacerFormat::Yaml),
            "csv" => Ok(ReplacerFormat::Csv),
            "" => Err(AppError::UnsupportedFormat { extension }),
            _ => Err(AppError::UnsupportedFormat { extension: format!(".{extension}") }),
        }
    }
}

impl FromStr for ReplacerFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReplacerFormat::ALL
            .into_iter()
            .find(|format| format.name() == s)
            .ok_or_else(|| AppError::InvalidFormat(s.to_string()))
    }
}

impl fmt::Display for ReplacerFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplacerFormat::Json => write!(f, "JSON"),
            ReplacerFormat::Yaml => write!(f, "YAML"),
            ReplacerFormat::Csv => write!(f, "CSV"),
        }
    }
}
