//! Semantic validation of a whole `.scard` document.
//!
//! Validation never fails: every problem becomes a [`Diagnostic`]. Line-format problems stop the
//! checks for that line only, value-shape checks are independent of each other, and
//! document-level checks run once after the last line.

use crate::diagnostics::{Diagnostic, Issue};
use crate::document;
use crate::registry::{self, FieldKind, MANDATORY_FIELD};
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

// Plain decimal literal; `inf`/`nan` spellings are rejected.
static FLOAT_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
        .expect("valid float regex")
});

/// Validate `text` and return its diagnostics.
///
/// Line diagnostics come first, in line order; whole-document diagnostics are appended.
pub fn validate(text: &str) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    let mut defined: HashSet<&'static str> = HashSet::new();
    let mut line_count = 0usize;

    for (index, line) in document::lines(text).enumerate() {
        line_count += 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let Some((key, value)) = trimmed.split_once('=') else {
            diagnostics.push(Diagnostic::at_line(index, Issue::MalformedLine));
            continue;
        };
        let key = key.trim();
        let value = value.trim();

        if key.is_empty() {
            diagnostics.push(Diagnostic::at_line(index, Issue::EmptyKey));
            continue;
        }
        if value.is_empty() {
            diagnostics.push(Diagnostic::at_line(
                index,
                Issue::EmptyValue {
                    key: key.to_string(),
                },
            ));
            continue;
        }

        let Some(spec) = registry::field(key) else {
            diagnostics.push(Diagnostic::at_line(
                index,
                Issue::UnknownKey {
                    key: key.to_string(),
                },
            ));
            continue;
        };
        defined.insert(spec.name);

        diagnostics.extend(
            check_value(spec.name, spec.kind, value)
                .into_iter()
                .map(|issue| Diagnostic::at_line(index, issue)),
        );
    }

    if !defined.contains(MANDATORY_FIELD) {
        diagnostics.push(Diagnostic::document(Issue::MissingMandatoryField {
            name: MANDATORY_FIELD.to_string(),
        }));
    }

    tracing::debug!(
        lines = line_count,
        diagnostics = diagnostics.len(),
        "validated scard document"
    );
    diagnostics
}

/// Apply a field's value rule to an already trimmed, non-empty value.
fn check_value(key: &str, kind: FieldKind, value: &str) -> Vec<Issue> {
    let mut issues = Vec::new();

    match kind {
        FieldKind::QuotedString => {
            if !is_quoted(value) {
                issues.push(Issue::ValueNotQuoted {
                    key: key.to_string(),
                });
            }
            if strip_quotes(value).is_empty() {
                issues.push(Issue::EmptyQuotedValue {
                    key: key.to_string(),
                });
            }
        }
        FieldKind::EnumQuotedString { allowed } => {
            let quoted = is_quoted(value);
            let content = if quoted {
                &value[1..value.len() - 1]
            } else {
                value
            };
            if !allowed.iter().any(|member| member.eq_ignore_ascii_case(content)) {
                issues.push(Issue::InvalidEnumValue {
                    key: key.to_string(),
                    value: content.to_string(),
                    allowed: allowed.iter().map(|member| member.to_string()).collect(),
                });
            }
            if !quoted {
                issues.push(Issue::EnumNotQuoted {
                    key: key.to_string(),
                });
            }
        }
        FieldKind::FloatWithSuffix { suffix } => match value.strip_suffix(suffix) {
            None => issues.push(Issue::MissingSuffix {
                key: key.to_string(),
                suffix,
            }),
            Some(literal) => {
                if !FLOAT_LITERAL.is_match(literal) || literal.parse::<f32>().is_err() {
                    issues.push(Issue::InvalidFloat {
                        key: key.to_string(),
                        literal: literal.to_string(),
                    });
                }
            }
        },
        FieldKind::Integer => {
            if value.parse::<i32>().is_err() {
                issues.push(Issue::InvalidInteger {
                    key: key.to_string(),
                    value: value.to_string(),
                });
            }
        }
    }

    issues
}

/// `"..."` with both delimiters present (a lone `"` does not count).
fn is_quoted(value: &str) -> bool {
    value.len() >= 2 && value.starts_with('"') && value.ends_with('"')
}

/// Content between the delimiters, stripping whichever of them are present.
fn strip_quotes(value: &str) -> &str {
    let value = value.strip_prefix('"').unwrap_or(value);
    value.strip_suffix('"').unwrap_or(value)
}
