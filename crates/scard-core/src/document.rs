//! Line access helpers shared by the engines.
//!
//! Documents are split on `'\n'` only. A `'\r'` before the newline stays part of the line, so
//! per-line lengths plus one separator per line break always add up to the document length.

/// Iterate the lines of `text` (0-based, an empty text has one empty line).
pub fn lines(text: &str) -> std::str::Split<'_, char> {
    text.split('\n')
}

/// Length of `text` in `char`s, the unit used for every offset in this crate.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte index of char column `column` in `line`, or `None` past the end of the line.
pub fn byte_index(line: &str, column: usize) -> Option<usize> {
    if column == 0 {
        return Some(0);
    }
    match line.char_indices().nth(column) {
        Some((byte, _)) => Some(byte),
        None if char_len(line) == column => Some(line.len()),
        None => None,
    }
}
