//! tag-replacer: literal placeholder substitution driven by JSON, YAML, CSV, or environment data.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use app::{AppContext, commands};
use services::{LocalFilesystem, ProcessEnvironment};

pub use app::commands::load::LoadedReplacer;
pub use app::commands::replace::{ReplaceOptions, ReplaceOutcome};
pub use domain::{
    AppError, LoadWarning, ReplacementEntry, ReplacementSet, ReplacerFormat, SourceDescriptor,
    SourceKind, TagDelimiters, substitute,
};

fn context() -> AppContext<ProcessEnvironment, LocalFilesystem> {
    AppContext::new(ProcessEnvironment, LocalFilesystem)
}

/// Load a replacement set from an inline payload, a file, or environment variables.
///
/// `format` only applies to [`SourceKind::String`]; file sources infer it from
/// the extension. Missing environment variables are reported as warnings and
/// their entries omitted.
pub fn load_replacer(
    replacer: &str,
    kind: SourceKind,
    format: ReplacerFormat,
) -> Result<LoadedReplacer, AppError> {
    commands::load::execute(&context(), &SourceDescriptor::new(kind, replacer, format))
}

/// Replace tags in `options.input` and write the result to `options.output`.
///
/// Nothing is written when loading the replacer or reading the input fails.
pub fn replace_tags(options: &ReplaceOptions) -> Result<ReplaceOutcome, AppError> {
    commands::replace::execute(&context(), options)
}
