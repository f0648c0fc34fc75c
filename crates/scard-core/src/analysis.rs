//! One-shot analysis bundles and status text for editor hosts.
//!
//! Engines re-analyze the full text on every call and keep no state. A host that runs analysis
//! off the UI thread keeps the [`Analysis`] together with the text it was computed for and
//! drops it if the buffer changed in the meantime ([`Analysis::is_current`]).

use crate::diagnostics::Diagnostic;
use crate::styles::{self, StyleSpan};
use crate::validator;
use serde::Serialize;

/// Diagnostics and styles computed for one snapshot of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// The text the results were computed for.
    pub text: String,
    /// Output of [`validate`](crate::validate).
    pub diagnostics: Vec<Diagnostic>,
    /// Output of [`compute_styles`](crate::compute_styles).
    pub styles: Vec<StyleSpan>,
}

impl Analysis {
    /// Returns `true` if the results still describe `current_text`.
    pub fn is_current(&self, current_text: &str) -> bool {
        self.text == current_text
    }

    /// Returns `true` if no diagnostics were produced.
    pub fn is_valid(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Status summary of the diagnostics (see [`status_line`]).
    pub fn status_line(&self) -> String {
        status_line(&self.diagnostics)
    }
}

/// Validate `text` and compute its styles in one pass.
pub fn analyze(text: &str) -> Analysis {
    let diagnostics = validator::validate(text);
    let styles = styles::compute_styles(text, &diagnostics);
    Analysis {
        text: text.to_string(),
        diagnostics,
        styles,
    }
}

/// Summarize diagnostics for a status bar.
///
/// `"valid file"` when there are none, otherwise `"errors: "` followed by each diagnostic
/// (`"line N: message"`, 1-based, or the bare message for document diagnostics) joined by `"; "`.
pub fn status_line(diagnostics: &[Diagnostic]) -> String {
    if diagnostics.is_empty() {
        return "valid file".to_string();
    }

    let messages = diagnostics
        .iter()
        .map(|d| match d.line {
            Some(line) => format!("line {}: {}", line + 1, d.message()),
            None => d.message(),
        })
        .collect::<Vec<_>>()
        .join("; ");
    format!("errors: {messages}")
}

/// Caret position plus a status summary, e.g. `"line 3, col 7 | valid file"` (1-based).
pub fn caret_status(line: usize, column: usize, summary: &str) -> String {
    format!("line {}, col {} | {summary}", line + 1, column + 1)
}
