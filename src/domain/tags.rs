pub const DEFAULT_START_TAG: &str = "{{";
pub const DEFAULT_END_TAG: &str = "}}";

/// Literal delimiters surrounding a placeholder key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDelimiters {
    pub start: String,
    pub end: String,
}

impl TagDelimiters {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self { start: start.into(), end: end.into() }
    }

    /// The exact literal that marks `key` in the input text.
    pub fn placeholder(&self, key: &str) -> String {
        format!("{}{}{}", self.start, key, self.end)
    }
}

impl Default for TagDelimiters {
    fn default() -> Self {
        Self::new(DEFAULT_START_TAG, DEFAULT_END_TAG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_placeholder_uses_double_braces() {
        assert_eq!(TagDelimiters::default().placeholder("name"), "{{name}}");
    }

    #[test]
    fn custom_delimiters_are_literal() {
        assert_eq!(TagDelimiters::new("${", "}").placeholder("HOME"), "${HOME}");
    }
}
