//! The replace pipeline: load replacer, read input, substitute, write output.

use std::path::PathBuf;

use tracing::debug;

use super::load;
use crate::app::AppContext;
use crate::domain::{AppError, LoadWarning, SourceDescriptor, TagDelimiters, substitute};
use crate::ports::{EnvironmentPort, FilesystemPort};

/// Options for a single replace run.
#[derive(Debug, Clone)]
pub struct ReplaceOptions {
    pub source: SourceDescriptor,
    pub input: PathBuf,
    pub output: PathBuf,
    pub tags: TagDelimiters,
}

/// Result of a successful replace run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceOutcome {
    /// Number of replacement entries applied.
    pub entries: usize,
    pub warnings: Vec<LoadWarning>,
    pub output: PathBuf,
}

/// Run the pipeline. The output file is only written once every earlier stage succeeded.
pub fn execute<E, F>(
    ctx: &AppContext<E, F>,
    options: &ReplaceOptions,
) -> Result<ReplaceOutcome, AppError>
where
    E: EnvironmentPort,
    F: FilesystemPort,
{
    let loaded = load::execute(ctx, &options.source)?;

    let content = ctx
        .filesystem()
        .read_text(&options.input)
        .map_err(|source| AppError::InputRead { path: options.input.clone(), source })?;

    let replaced = substitute(&content, loaded.set.entries(), &options.tags);

    ctx.filesystem()
        .write_text(&options.output, &replaced)
        .map_err(|source| AppError::OutputWrite { path: options.output.clone(), source })?;
    debug!("Wrote {} byte(s) to {}", replaced.len(), options.output.display());

    Ok(ReplaceOutcome {
        entries: loaded.set.len(),
        warnings: loaded.warnings,
        output: options.output.clone(),
    })
}
