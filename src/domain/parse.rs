//! Pure decoders turning replacer payloads into a [`ReplacementSet`].

use std::io::Read;

use super::{AppError, ReplacementEntry, ReplacementSet, ReplacerFormat};

const KEY_COLUMN: &str = "key";
const VALUE_COLUMN: &str = "value";
const NOT_A_DOCUMENT: &str = "expected a top-level object with a `replace` list";

/// Decode `content` in the given format.
pub fn parse_replacer(content: &str, format: ReplacerFormat) -> Result<ReplacementSet, AppError> {
    match format {
        ReplacerFormat::Json => parse_json(content),
        ReplacerFormat::Yaml => parse_yaml(content),
        ReplacerFormat::Csv => parse_csv(content.as_bytes()),
    }
}

/// Parse a `{"replace": [{"key": .., "value": ..}, ..]}` JSON document.
///
/// The top level must be an object.
pub fn parse_json(content: &str) -> Result<ReplacementSet, AppError> {
    let failure = |e: serde_json::Error| AppError::parse_failure(ReplacerFormat::Json, e);

    match serde_json::from_str(content).map_err(failure)? {
        value @ serde_json::Value::Object(_) => serde_json::from_value(value).map_err(failure),
        _ => Err(AppError::parse_failure(ReplacerFormat::Json, NOT_A_DOCUMENT)),
    }
}

/// Parse a YAML document with the same shape as the JSON payload.
///
/// An empty document carries no data and is rejected like any other
/// non-mapping top level.
pub fn parse_yaml(content: &str) -> Result<ReplacementSet, AppError> {
    let failure = |e: serde_yaml::Error| AppError::parse_failure(ReplacerFormat::Yaml, e);

    match serde_yaml::from_str(content).map_err(failure)? {
        value @ serde_yaml::Value::Mapping(_) => serde_yaml::from_value(value).map_err(failure),
        serde_yaml::Value::Null => {
            Err(AppError::parse_failure(ReplacerFormat::Yaml, "document is empty"))
        }
        _ => Err(AppError::parse_failure(ReplacerFormat::Yaml, NOT_A_DOCUMENT)),
    }
}

/// Parse header-driven CSV with `key` and `value` columns.
///
/// Header names are case-sensitive. A missing column or a short row leaves
/// the corresponding field absent instead of failing the load.
pub fn parse_csv<R: Read>(reader: R) -> Result<ReplacementSet, AppError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = reader.headers().map_err(|e| AppError::parse_failure(ReplacerFormat::Csv, e))?;
    let key_idx = headers.iter().position(|h| h == KEY_COLUMN);
    let value_idx = headers.iter().position(|h| h == VALUE_COLUMN);

    let mut set = ReplacementSet::new();
    for record in reader.records() {
        let record = record.map_err(|e| AppError::parse_failure(ReplacerFormat::Csv, e))?;
        let field = |idx: Option<usize>| idx.and_then(|i| record.get(i)).map(str::to_string);
        set.push(ReplacementEntry { key: field(key_idx), value: field(value_idx) });
    }

    Ok(set)
}
