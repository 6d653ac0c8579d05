//! Replacer loading: turn a source descriptor into a normalized replacement set.

use std::path::Path;

use tracing::{debug, warn};

use crate::app::AppContext;
use crate::domain::{
    AppError, LoadWarning, ReplacementEntry, ReplacementSet, ReplacerFormat, SourceDescriptor,
    SourceKind, parse_replacer,
};
use crate::ports::{EnvironmentPort, FilesystemPort};

/// A loaded replacement set and the non-fatal issues met while building it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadedReplacer {
    pub set: ReplacementSet,
    pub warnings: Vec<LoadWarning>,
}

impl From<ReplacementSet> for LoadedReplacer {
    fn from(set: ReplacementSet) -> Self {
        Self { set, warnings: Vec::new() }
    }
}

/// Load the replacement set described by `source`.
pub fn execute<E, F>(
    ctx: &AppContext<E, F>,
    source: &SourceDescriptor,
) -> Result<LoadedReplacer, AppError>
where
    E: EnvironmentPort,
    F: FilesystemPort,
{
    let loaded: LoadedReplacer = match source.kind {
        SourceKind::String => parse_replacer(&source.payload, source.format)?.into(),
        SourceKind::File => load_file(ctx.filesystem(), Path::new(&source.payload))?.into(),
        SourceKind::Environment => load_environment(ctx.environment(), source),
    };

    for warning in &loaded.warnings {
        warn!("{}", warning);
    }
    debug!("Loaded {} replacement(s) from {} source", loaded.set.len(), source.kind);

    Ok(loaded)
}

fn load_file<F: FilesystemPort>(filesystem: &F, path: &Path) -> Result<ReplacementSet, AppError> {
    let format = ReplacerFormat::from_path(path)?;
    let content = filesystem
        .read_text(path)
        .map_err(|source| AppError::ReplacerRead { path: path.to_path_buf(), source })?;

    parse_replacer(&content, format)
}

fn load_environment<E: EnvironmentPort>(
    environment: &E,
    source: &SourceDescriptor,
) -> LoadedReplacer {
    let mut loaded = LoadedReplacer::default();

    for name in source.variable_names() {
        match environment.lookup(name) {
            Some(value) => loaded.set.push(ReplacementEntry::new(name, value)),
            None => {
                loaded.warnings.push(LoadWarning::MissingEnvironmentVariable(name.to_string()))
            }
        }
    }

    loaded
}
