//! Context-aware completion for the line under the caret.
//!
//! Two stateless operations:
//! - [`get_suggestions`]: which field names or `rarity` members fit at the caret.
//! - [`resolve_insertion`]: how an accepted suggestion is spliced into the line.
//!
//! Columns are `char` offsets within the line. The rarity context anchors its replacement on the
//! last `"` before the caret (or on the `=` of the assignment when no quote was typed yet); the
//! field-name context anchors on the last space, tab or `=` before the caret.

use crate::document;
use crate::registry::{self, RARITY_VALUES};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

const WORD_SEPARATORS: [char; 3] = [' ', '=', '\t'];

// `rarity = "partial` with the quote still open.
static RARITY_VALUE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)^\s*rarity\s*=\s*"[^"]*$"#).expect("valid rarity regex"));

static RARITY_ASSIGNMENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^\s*rarity\s*=").expect("valid rarity regex"));

/// What the caret is positioned on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum CompletionContext {
    /// Inside an open `rarity = "...` literal; `partial` is the text typed after the quote.
    RarityValue {
        /// Text between the last `"` and the caret.
        partial: String,
    },
    /// Typing a word; `word` is the text since the last space, tab or `=`.
    FieldName {
        /// Non-blank word prefix.
        word: String,
    },
    /// Blank line prefix, or right after `=`.
    AnyField,
    /// Nothing to offer (including a caret past the end of the line).
    Unknown,
}

/// How [`resolve_insertion_as`] splices a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InsertionKind {
    /// Quote-anchored replacement of a `rarity` value.
    RarityValue,
    /// Separator-anchored replacement of the current word.
    FieldName,
}

/// A single in-line replacement produced by accepting a suggestion.
///
/// All offsets are `char` columns within the line; `replace_start..replace_end` is half-open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InsertionPlan {
    /// First replaced column.
    pub replace_start: usize,
    /// End of the replaced range (always the caret).
    pub replace_end: usize,
    /// Replacement text.
    pub text: String,
    /// Caret column after the splice.
    pub new_caret: usize,
}

impl InsertionPlan {
    /// Apply the plan to `line`. Returns `None` if the plan's range does not fit in `line`.
    pub fn apply(&self, line: &str) -> Option<String> {
        let start = document::byte_index(line, self.replace_start)?;
        let end = document::byte_index(line, self.replace_end)?;
        if start > end {
            return None;
        }

        let mut out = String::with_capacity(line.len() + self.text.len());
        out.push_str(&line[..start]);
        out.push_str(&self.text);
        out.push_str(&line[end..]);
        Some(out)
    }
}

/// Classify the caret position in `line`.
pub fn completion_context(line: &str, caret: usize) -> CompletionContext {
    let Some(caret_byte) = document::byte_index(line, caret) else {
        return CompletionContext::Unknown;
    };
    let before = &line[..caret_byte];

    let context = if let Some(partial) = rarity_partial(before) {
        CompletionContext::RarityValue {
            partial: partial.to_string(),
        }
    } else {
        let word = &before[word_start(before)..];
        if !word.trim().is_empty() {
            CompletionContext::FieldName {
                word: word.to_string(),
            }
        } else if before.trim().is_empty() || before.trim_end().ends_with('=') {
            CompletionContext::AnyField
        } else {
            CompletionContext::Unknown
        }
    };

    tracing::trace!(?context, caret, "completion context");
    context
}

/// Suggestions for the caret position, in registry (or enum declaration) order.
pub fn get_suggestions(line: &str, caret: usize) -> Vec<&'static str> {
    match completion_context(line, caret) {
        CompletionContext::RarityValue { partial } => RARITY_VALUES
            .iter()
            .copied()
            .filter(|member| starts_with_ignore_case(member, &partial))
            .collect(),
        CompletionContext::FieldName { word } => registry::field_names()
            .filter(|name| starts_with_ignore_case(name, &word))
            .collect(),
        CompletionContext::AnyField => registry::field_names().collect(),
        CompletionContext::Unknown => Vec::new(),
    }
}

/// Work out how accepting `suggestion` at `caret` rewrites `line`.
///
/// The rarity rule applies when the caret sits in an open `rarity = "...` literal, or when
/// `suggestion` is a rarity member and the text before the caret is a `rarity =` assignment.
/// Returns `None` if `caret` is past the end of the line.
pub fn resolve_insertion(line: &str, caret: usize, suggestion: &str) -> Option<InsertionPlan> {
    let caret_byte = document::byte_index(line, caret)?;
    let before = &line[..caret_byte];

    let in_rarity_value = rarity_partial(before).is_some()
        || (RARITY_VALUES.iter().any(|member| *member == suggestion)
            && RARITY_ASSIGNMENT_PATTERN.is_match(before));
    let kind = if in_rarity_value {
        InsertionKind::RarityValue
    } else {
        InsertionKind::FieldName
    };

    resolve_insertion_as(line, caret, suggestion, kind)
}

/// Like [`resolve_insertion`], with the splicing rule chosen by the caller.
pub fn resolve_insertion_as(
    line: &str,
    caret: usize,
    suggestion: &str,
    kind: InsertionKind,
) -> Option<InsertionPlan> {
    let caret_byte = document::byte_index(line, caret)?;
    let before = &line[..caret_byte];

    let (start_byte, text) = match kind {
        InsertionKind::RarityValue => {
            let start = match before.rfind('"') {
                Some(quote) => quote + 1,
                None => rarity_value_start(before),
            };
            // Don't double the closing quote when one already follows the caret.
            let text = if line[caret_byte..].starts_with('"') {
                format!("\"{suggestion}")
            } else {
                format!("\"{suggestion}\"")
            };
            (start, text)
        }
        InsertionKind::FieldName => (word_start(before), suggestion.to_string()),
    };

    let replace_start = document::char_len(&before[..start_byte]);
    let new_caret = replace_start + document::char_len(&text);
    Some(InsertionPlan {
        replace_start,
        replace_end: caret,
        text,
        new_caret,
    })
}

/// Text typed after the opening quote of a `rarity` value, if `before` ends inside one.
fn rarity_partial(before: &str) -> Option<&str> {
    if !RARITY_VALUE_PATTERN.is_match(before.trim_end()) {
        return None;
    }
    let quote = before.rfind('"')?;
    Some(&before[quote + 1..])
}

/// First non-whitespace byte after the `=` of the `rarity` assignment (bounded by the caret).
fn rarity_value_start(before: &str) -> usize {
    let equals_end = RARITY_ASSIGNMENT_PATTERN
        .find(before)
        .map(|m| m.end())
        .or_else(|| before.rfind('=').map(|i| i + 1))
        .unwrap_or(0);
    let rest = &before[equals_end..];
    equals_end + (rest.len() - rest.trim_start().len())
}

/// Byte offset one past the last word separator, or `0`.
fn word_start(before: &str) -> usize {
    before.rfind(WORD_SEPARATORS).map_or(0, |i| i + 1)
}

fn starts_with_ignore_case(candidate: &str, prefix: &str) -> bool {
    candidate.to_lowercase().starts_with(&prefix.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_classification() {
        assert_eq!(
            completion_context(r#"rarity = "CO"#, 12),
            CompletionContext::RarityValue {
                partial: "CO".to_string()
            }
        );
        assert_eq!(
            completion_context("  npc", 5),
            CompletionContext::FieldName {
                word: "npc".to_string()
            }
        );
        assert_eq!(completion_context("   ", 3), CompletionContext::AnyField);
        assert_eq!(completion_context("npcName = ", 10), CompletionContext::AnyField);
        assert_eq!(completion_context("id ", 3), CompletionContext::Unknown);
        assert_eq!(completion_context("id", 7), CompletionContext::Unknown);
    }

    #[test]
    fn test_rarity_field_name_is_case_insensitive() {
        assert_eq!(get_suggestions(r#"RARITY = "e"#, 11), vec!["EPIC"]);
    }

    #[test]
    fn test_word_start_uses_last_separator() {
        assert_eq!(word_start("a b=c\td"), 6);
        assert_eq!(word_start("abc"), 0);
    }

    #[test]
    fn test_rarity_value_start_skips_whitespace_after_equals() {
        assert_eq!(rarity_value_start("rarity =   CO"), 11);
        assert_eq!(rarity_value_start("rarity="), 7);
    }

    #[test]
    fn test_apply_rejects_out_of_range_plan() {
        let plan = InsertionPlan {
            replace_start: 0,
            replace_end: 10,
            text: "x".to_string(),
            new_caret: 1,
        };
        assert_eq!(plan.apply("abc"), None);
    }
}
