//! Renderer-facing configuration.

use crate::error::ScardError;
use crate::styles::{StyleSpan, StyleTag};
use serde::Deserialize;
use std::path::Path;

/// Class names a renderer uses for each [`StyleTag`].
///
/// These are only identifiers; the UI/theme layer maps them to actual colors. Missing keys in a
/// YAML file fall back to the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StyleClasses {
    /// Class for lines carrying a diagnostic.
    pub error: String,
    /// Class for comments.
    pub comment: String,
    /// Class for field names.
    pub keyword: String,
    /// Class for string literals.
    pub string: String,
    /// Class for number literals.
    pub number: String,
}

impl Default for StyleClasses {
    fn default() -> Self {
        Self {
            error: StyleTag::Error.as_str().to_string(),
            comment: StyleTag::Comment.as_str().to_string(),
            keyword: StyleTag::Keyword.as_str().to_string(),
            string: StyleTag::String.as_str().to_string(),
            number: StyleTag::Number.as_str().to_string(),
        }
    }
}

impl StyleClasses {
    /// Parse from YAML text, e.g. `error: squiggly`.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ScardError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load from a YAML file.
    pub fn from_yaml_path(path: impl AsRef<Path>) -> Result<Self, ScardError> {
        let yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&yaml)
    }

    /// Class name for `tag`.
    pub fn class_for(&self, tag: StyleTag) -> &str {
        match tag {
            StyleTag::Error => &self.error,
            StyleTag::Comment => &self.comment,
            StyleTag::Keyword => &self.keyword,
            StyleTag::String => &self.string,
            StyleTag::Number => &self.number,
        }
    }

    /// Class names of a span, in tag order.
    pub fn classes_for(&self, span: &StyleSpan) -> Vec<&str> {
        span.tags.iter().map(|tag| self.class_for(*tag)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let classes = StyleClasses::from_yaml_str("error: squiggly\nnumber: literal-number\n").unwrap();
        assert_eq!(classes.class_for(StyleTag::Error), "squiggly");
        assert_eq!(classes.class_for(StyleTag::Number), "literal-number");
        assert_eq!(classes.class_for(StyleTag::Keyword), "keyword");
    }

    #[test]
    fn test_invalid_yaml_is_config_error() {
        let err = StyleClasses::from_yaml_str("error: [unclosed").unwrap_err();
        assert!(matches!(err, ScardError::Config(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = StyleClasses::from_yaml_path("/nonexistent/scard-classes.yaml").unwrap_err();
        assert!(matches!(err, ScardError::Io(_)));
    }
}
