//! Style composition: lexer tokens plus error-marked lines, flattened into contiguous spans.
//!
//! The result covers the whole text. Line separators are emitted as one-char spans that carry
//! the error marking of the line they terminate. Adjacent spans with the same tag set are
//! merged and zero-length spans are dropped, so an empty text produces no spans at all.

use crate::diagnostics::Diagnostic;
use crate::document;
use crate::lexer::{self, TokenKind};
use serde::Serialize;
use std::collections::{BTreeSet, HashSet};

/// A style tag a renderer maps to a visual class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum StyleTag {
    /// The line carries at least one diagnostic.
    Error,
    /// Lexical comment.
    Comment,
    /// Lexical keyword (field name).
    Keyword,
    /// Lexical string literal.
    String,
    /// Lexical number literal.
    Number,
}

impl From<TokenKind> for StyleTag {
    fn from(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Comment => StyleTag::Comment,
            TokenKind::Keyword => StyleTag::Keyword,
            TokenKind::String => StyleTag::String,
            TokenKind::Number => StyleTag::Number,
        }
    }
}

impl StyleTag {
    /// Default class name (`error`, `comment`, `keyword`, `string`, `number`).
    pub fn as_str(self) -> &'static str {
        match self {
            StyleTag::Error => "error",
            StyleTag::Comment => "comment",
            StyleTag::Keyword => "keyword",
            StyleTag::String => "string",
            StyleTag::Number => "number",
        }
    }
}

/// A run of `length` chars sharing the same tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyleSpan {
    /// Run length in `char`s (never zero).
    pub length: usize,
    /// Tags applying to the run; empty means default styling.
    pub tags: BTreeSet<StyleTag>,
}

#[derive(Default)]
struct SpanBuilder {
    spans: Vec<StyleSpan>,
}

impl SpanBuilder {
    fn push(&mut self, length: usize, tags: &BTreeSet<StyleTag>) {
        if length == 0 {
            return;
        }
        if let Some(last) = self.spans.last_mut()
            && last.tags == *tags
        {
            last.length += length;
            return;
        }
        self.spans.push(StyleSpan {
            length,
            tags: tags.clone(),
        });
    }

    fn finish(self) -> Vec<StyleSpan> {
        self.spans
    }
}

/// Compute the style spans of `text`, marking every line that has a diagnostic as `error`.
///
/// Whole-document diagnostics do not mark any line.
///
/// # Panics
///
/// Panics if the produced spans do not cover exactly `text`'s char length. That is an internal
/// defect, never a property of the input.
pub fn compute_styles(text: &str, diagnostics: &[Diagnostic]) -> Vec<StyleSpan> {
    let error_lines: HashSet<usize> = diagnostics.iter().filter_map(|d| d.line).collect();

    let mut builder = SpanBuilder::default();
    let mut lines = document::lines(text).enumerate().peekable();

    while let Some((index, line)) = lines.next() {
        let mut base = BTreeSet::new();
        if error_lines.contains(&index) {
            base.insert(StyleTag::Error);
        }

        let mut cursor = 0usize;
        for token in lexer::tokenize(line) {
            builder.push(token.start - cursor, &base);

            let mut tags = base.clone();
            tags.insert(token.kind.into());
            builder.push(token.len(), &tags);
            cursor = token.end;
        }
        builder.push(document::char_len(line) - cursor, &base);

        if lines.peek().is_some() {
            builder.push(1, &base);
        }
    }

    let spans = builder.finish();
    assert_eq!(
        spans_len(&spans),
        document::char_len(text),
        "style spans must cover the analyzed text exactly"
    );

    tracing::trace!(spans = spans.len(), "computed scard styles");
    spans
}

/// Total length covered by `spans`.
pub fn spans_len(spans: &[StyleSpan]) -> usize {
    spans.iter().map(|span| span.length).sum()
}
