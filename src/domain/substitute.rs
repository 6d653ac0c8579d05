use tracing::{Level, debug};

use super::{ReplacementEntry, TagDelimiters};

/// Replace every `start + key + end` literal in `text` with the entry's value.
///
/// Entries run as sequential passes in list order over the running result, so
/// text produced by one pass is visible to later passes. Matching is plain
/// substring comparison; keys and delimiters are never interpreted as patterns.
pub fn substitute(text: &str, entries: &[ReplacementEntry], tags: &TagDelimiters) -> String {
    entries.iter().fold(text.to_string(), |content, entry| {
        let placeholder = tags.placeholder(entry.key());
        if placeholder.is_empty() {
            return content;
        }

        if tracing::enabled!(Level::DEBUG) {
            let occurrences = content.matches(placeholder.as_str()).count();
            debug!("{} occurrence(s) of {}", occurrences, placeholder);
        }

        content.replace(placeholder.as_str(), entry.value())
    })
}
