//! Single-line tokenizer for `.scard` text.
//!
//! One alternation regex is run over the line; the order of its branches gives the precedence
//! `comment > keyword > string > number` (the `regex` crate resolves alternations leftmost-first).
//! Anything the pattern does not match is left untokenized. Word boundaries are ASCII-only, so
//! `é10` still yields the number `10`.

use crate::registry;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Lexical category of a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum TokenKind {
    /// `#` up to the end of the line.
    Comment,
    /// A registered field name, matched as a whole word.
    Keyword,
    /// A `"`-delimited literal closed on the same line.
    String,
    /// An integer or decimal literal, optionally followed by `f`.
    Number,
}

/// A classified sub-range of one line.
///
/// `start..end` is half-open and counted in `char`s from the start of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token {
    /// Category.
    pub kind: TokenKind,
    /// Start column (inclusive).
    pub start: usize,
    /// End column (exclusive).
    pub end: usize,
}

impl Token {
    /// Length in `char`s.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` for a zero-width token (never produced by [`tokenize`]).
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let keywords = registry::field_names()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|");
    let pattern = format!(
        r#"(?P<comment>#.*)|(?P<keyword>(?-u:\b)(?:{keywords})(?-u:\b))|(?P<string>"[^"]*")|(?P<number>(?-u:\b)[0-9]+(?:\.[0-9]+)?f?(?-u:\b))"#
    );
    Regex::new(&pattern).expect("valid token regex")
});

/// Scan `line` and return its tokens ordered by `start`, non-overlapping.
///
/// `line` is expected not to contain `'\n'`; a trailing `'\r'` is simply left untokenized.
pub fn tokenize(line: &str) -> Vec<Token> {
    let mut tokens = Vec::new();

    // Byte offsets from the regex are converted to char columns incrementally.
    let mut byte_cursor = 0usize;
    let mut char_cursor = 0usize;
    let mut to_column = |byte: usize| {
        char_cursor += line[byte_cursor..byte].chars().count();
        byte_cursor = byte;
        char_cursor
    };

    for caps in TOKEN_PATTERN.captures_iter(line) {
        let kind = if caps.name("comment").is_some() {
            TokenKind::Comment
        } else if caps.name("keyword").is_some() {
            TokenKind::Keyword
        } else if caps.name("string").is_some() {
            TokenKind::String
        } else {
            TokenKind::Number
        };

        let Some(m) = caps.get(0) else {
            continue;
        };
        if m.start() == m.end() {
            continue;
        }

        let start = to_column(m.start());
        let end = to_column(m.end());
        tokens.push(Token { kind, start, end });
    }

    tokens
}
