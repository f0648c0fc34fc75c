//! Diagnostics data model.
//!
//! A [`Diagnostic`] is plain data produced by [`validate`](crate::validate). Line diagnostics
//! point at a 0-based document line; whole-document diagnostics have no line.

use serde::Serialize;
use thiserror::Error;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Severity {
    /// The document is invalid.
    Error,
    /// Tolerated, but probably a mistake (e.g. an unknown key).
    Warning,
}

/// Every problem the validator can report.
///
/// The `Display` text is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum Issue {
    #[error("malformed line, expected 'key = value'")]
    /// The line has no `=`.
    MalformedLine,

    #[error("key cannot be empty")]
    /// Nothing on the left of `=`.
    EmptyKey,

    #[error("value for '{key}' cannot be empty")]
    /// Nothing on the right of `=`.
    EmptyValue {
        /// Offending key.
        key: String,
    },

    #[error("unknown key '{key}'")]
    /// The key is not in the field registry.
    UnknownKey {
        /// Offending key.
        key: String,
    },

    #[error("value for '{key}' must be enclosed in double quotes")]
    /// A string field is not wrapped in `"`.
    ValueNotQuoted {
        /// Field name.
        key: String,
    },

    #[error("quoted value for '{key}' cannot be empty")]
    /// A string field is `""`.
    EmptyQuotedValue {
        /// Field name.
        key: String,
    },

    #[error("invalid {key} value '{value}', allowed: {}", .allowed.join(", "))]
    /// An enum field holds a value outside its allowed set.
    InvalidEnumValue {
        /// Field name.
        key: String,
        /// Unquoted value as written.
        value: String,
        /// Allowed members, in declaration order.
        allowed: Vec<String>,
    },

    #[error("{key} value must be quoted (e.g. \"COMMON\")")]
    /// An enum field is not wrapped in `"`.
    EnumNotQuoted {
        /// Field name.
        key: String,
    },

    #[error("value for '{key}' must end with '{suffix}' (e.g. 1.2{suffix})")]
    /// A float field lacks its suffix.
    MissingSuffix {
        /// Field name.
        key: String,
        /// Required suffix.
        suffix: char,
    },

    #[error("value for '{key}' ('{literal}') is not a valid floating-point number")]
    /// The part before the suffix is not a float.
    InvalidFloat {
        /// Field name.
        key: String,
        /// Text that failed to parse (suffix stripped).
        literal: String,
    },

    #[error("value for '{key}' ('{value}') is not a valid integer")]
    /// An integer field does not parse.
    InvalidInteger {
        /// Field name.
        key: String,
        /// Raw value.
        value: String,
    },

    #[error("missing mandatory field '{name}'")]
    /// A required field never appears in the document.
    MissingMandatoryField {
        /// Field name.
        name: String,
    },
}

impl Issue {
    /// Default severity for this kind of issue.
    pub fn severity(&self) -> Severity {
        match self {
            Issue::UnknownKey { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }
}

/// A single validation result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// 0-based line, or `None` for whole-document diagnostics.
    pub line: Option<usize>,
    /// Severity.
    pub severity: Severity,
    /// What went wrong.
    pub issue: Issue,
}

impl Diagnostic {
    /// Create a diagnostic tied to `line`.
    pub fn at_line(line: usize, issue: Issue) -> Self {
        Self {
            line: Some(line),
            severity: issue.severity(),
            issue,
        }
    }

    /// Create a whole-document diagnostic.
    pub fn document(issue: Issue) -> Self {
        Self {
            line: None,
            severity: issue.severity(),
            issue,
        }
    }

    /// Line number with `-1` standing for "whole document".
    pub fn line_number(&self) -> i64 {
        self.line.map_or(-1, |line| line as i64)
    }

    /// Human-readable message.
    pub fn message(&self) -> String {
        self.issue.to_string()
    }
}
