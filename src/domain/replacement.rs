use std::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

/// A single key/value pair driving one substitution pass.
///
/// Either field may be absent when it comes from a CSV row that lacks the
/// column; absent fields read as the empty string. Document formats only
/// accept strings or null here: numbers, booleans, and nested values are
/// rejected rather than coerced to text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReplacementEntry {
    #[serde(default, deserialize_with = "text_field")]
    pub key: Option<String>,
    #[serde(default, deserialize_with = "text_field")]
    pub value: Option<String>,
}

fn text_field<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    struct TextVisitor;

    impl<'de> Visitor<'de> for TextVisitor {
        type Value = Option<String>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string or null")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
            Ok(Some(v))
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
            d.deserialize_any(self)
        }
    }

    // `deserialize_any` so self-describing formats report the real scalar type.
    deserializer.deserialize_any(TextVisitor)
}

impl ReplacementEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self { key: Some(key.into()), value: Some(value.into()) }
    }

    pub fn key(&self) -> &str {
        self.key.as_deref().unwrap_or_default()
    }

    pub fn value(&self) -> &str {
        self.value.as_deref().unwrap_or_default()
    }
}

/// Ordered list of replacement entries.
///
/// Duplicate keys are kept; each entry runs its own pass in list order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReplacementSet {
    #[serde(default)]
    replace: Vec<ReplacementEntry>,
}

impl ReplacementSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from `(key, value)` pairs, preserving order.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self { replace: pairs.into_iter().map(|(k, v)| ReplacementEntry::new(k, v)).collect() }
    }

    pub fn push(&mut self, entry: ReplacementEntry) {
        self.replace.push(entry);
    }

    pub fn entries(&self) -> &[ReplacementEntry] {
        &self.replace
    }

    pub fn len(&self) -> usize {
        self.replace.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replace.is_empty()
    }
}
