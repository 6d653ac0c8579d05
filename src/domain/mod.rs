pub mod error;
pub mod format;
pub mod parse;
pub mod replacement;
pub mod source;
pub mod substitute;
pub mod tags;
pub mod warning;

pub use error::AppError;
pub use format::ReplacerFormat;
pub use parse::{parse_csv, parse_json, parse_replacer, parse_yaml};
pub use replacement::{ReplacementEntry, ReplacementSet};
pub use source::{SourceDescriptor, SourceKind};
pub use substitute::substitute;
pub use tags::{DEFAULT_END_TAG, DEFAULT_START_TAG, TagDelimiters};
pub use warning::LoadWarning;
