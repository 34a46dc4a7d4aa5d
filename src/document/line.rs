//! Line geometry reported by a host document.

/// Location of one line in a document, in character offsets.
///
/// `length` excludes the line delimiter, so `end()` is the offset of the
/// delimiter itself (or the end of the document for the last line).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineInfo {
    pub offset: usize,
    pub length: usize,
}

impl LineInfo {
    pub fn new(offset: usize, length: usize) -> Self {
        Self { offset, length }
    }

    /// Offset just past the last character of the line, before its delimiter
    pub fn end(&self) -> usize {
        self.offset + self.length
    }
}

/// Number of chars taken by a line delimiter at the end of `chars`.
///
/// Recognizes `\r\n` as a single delimiter plus the single-char breaks ropey
/// counts by default.
pub(crate) fn trailing_break_len(chars: &[char]) -> usize {
    match chars {
        [.., '\r', '\n'] => 2,
        [.., last] if is_line_break(*last) => 1,
        _ => 0,
    }
}

pub(crate) fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\u{000B}' | '\u{000C}' | '\u{0085}' | '\u{2028}' | '\u{2029}'
    )
}
