//! Host document traits and implementations.
//!
//! Provides `TextBuffer` (read-only) and `TextBufferMut` (read-write) traits
//! that abstract over the document an edit batch is computed against and
//! applied to. All offsets are character offsets.

use ropey::Rope;
use std::borrow::Cow;
use std::ops::Range;

use super::line::{is_line_break, trailing_break_len, LineInfo};
use crate::edits::{EditError, EditResult};

/// Read-only, line-indexed view of a document.
/// Abstracts over Rope (large files) and String (small inputs).
pub trait TextBuffer {
    /// Number of lines (always >= 1)
    fn line_count(&self) -> usize;

    /// Offset and length (excluding the delimiter) of a line
    fn line_info(&self, line: usize) -> EditResult<LineInfo>;

    /// Line containing the character offset. `len_chars()` is a valid offset.
    fn line_of_offset(&self, offset: usize) -> EditResult<usize>;

    /// Total length in characters
    fn len_chars(&self) -> usize;

    /// Check if buffer is empty
    fn is_empty(&self) -> bool {
        self.len_chars() == 0
    }

    /// Length of a specific line in characters (excluding newline), 0 if out of range
    fn line_length(&self, line: usize) -> usize {
        self.line_info(line).map(|info| info.length).unwrap_or(0)
    }

    /// Get line content (without trailing newline)
    fn line(&self, line: usize) -> Option<Cow<'_, str>> {
        let info = self.line_info(line).ok()?;
        Some(Cow::Owned(self.slice(info.offset..info.end())))
    }

    /// Convert (line, column) to char offset, clamped to the document
    fn position_to_offset(&self, line: usize, column: usize) -> usize {
        match self.line_info(line) {
            Ok(info) => info.offset + column.min(info.length),
            Err(_) => self.len_chars(),
        }
    }

    /// Convert char offset to (line, column), clamped to the document
    fn offset_to_position(&self, offset: usize) -> (usize, usize) {
        let clamped = offset.min(self.len_chars());
        let line = self.line_of_offset(clamped).unwrap_or(0);
        let line_start = self.line_info(line).map(|info| info.offset).unwrap_or(0);
        (line, clamped - line_start)
    }

    /// Get slice of text as String (by character indices)
    fn slice(&self, range: Range<usize>) -> String;

    /// Get full content as String (may be expensive for large buffers)
    fn content(&self) -> String;
}

/// Mutable document operations. Extends TextBuffer.
pub trait TextBufferMut: TextBuffer {
    /// Insert text at character offset. Callers check bounds.
    fn insert(&mut self, offset: usize, text: &str);

    /// Remove text in character range. Callers check bounds.
    fn remove(&mut self, range: Range<usize>);

    /// Replace `length` chars at `offset` with `text`.
    ///
    /// This is the single primitive edits compile down to: an insertion is
    /// `replace(offset, 0, text)` and a deletion is `replace(start, end - start, "")`.
    /// Fails with [`EditError::InvalidOffset`] when the range does not fit the
    /// current document; the document is left untouched in that case.
    fn replace(&mut self, offset: usize, length: usize, text: &str) -> EditResult<()> {
        let len = self.len_chars();
        match offset.checked_add(length) {
            Some(end) if end <= len => {
                if length > 0 {
                    self.remove(offset..end);
                }
                if !text.is_empty() {
                    self.insert(offset, text);
                }
                Ok(())
            }
            _ => Err(EditError::InvalidOffset {
                offset,
                length,
                len,
            }),
        }
    }
}

fn check_line(line: usize, line_count: usize) -> EditResult<()> {
    if line < line_count {
        Ok(())
    } else {
        Err(EditError::InvalidLine { line, line_count })
    }
}

fn check_offset(offset: usize, len: usize) -> EditResult<()> {
    if offset <= len {
        Ok(())
    } else {
        Err(EditError::InvalidOffset {
            offset,
            length: 0,
            len,
        })
    }
}

// =============================================================================
// StringBuffer - for small documents and snapshots
// =============================================================================

/// TextBuffer implementation wrapping String. Used for small documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringBuffer {
    text: String,
}

impl StringBuffer {
    pub fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Create a StringBuffer from a string slice
    pub fn from_text(s: &str) -> Self {
        Self {
            text: s.to_string(),
        }
    }

    /// Access the underlying string
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Convert char offset to byte offset
    fn char_to_byte(&self, char_offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_offset)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    /// Char offsets at which each line starts. `\r\n` counts as one break.
    fn line_starts(&self) -> Vec<usize> {
        let mut starts = vec![0];
        let mut chars = self.text.chars().enumerate().peekable();
        while let Some((i, ch)) = chars.next() {
            if ch == '\r' && matches!(chars.peek(), Some((_, '\n'))) {
                chars.next();
                starts.push(i + 2);
            } else if is_line_break(ch) {
                starts.push(i + 1);
            }
        }
        starts
    }
}

impl From<&str> for StringBuffer {
    fn from(s: &str) -> Self {
        Self::from_text(s)
    }
}

impl TextBuffer for StringBuffer {
    fn line_count(&self) -> usize {
        self.line_starts().len()
    }

    fn line_info(&self, line: usize) -> EditResult<LineInfo> {
        let starts = self.line_starts();
        check_line(line, starts.len())?;
        let start = starts[line];
        let next = starts.get(line + 1).copied().unwrap_or(self.len_chars());
        let chars: Vec<char> = self.text.chars().skip(start).take(next - start).collect();
        Ok(LineInfo::new(start, chars.len() - trailing_break_len(&chars)))
    }

    fn line_of_offset(&self, offset: usize) -> EditResult<usize> {
        check_offset(offset, self.len_chars())?;
        let starts = self.line_starts();
        Ok(starts.partition_point(|&start| start <= offset) - 1)
    }

    fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    fn slice(&self, range: Range<usize>) -> String {
        let start = range.start.min(self.len_chars());
        let end = range.end.min(self.len_chars());
        self.text
            .chars()
            .skip(start)
            .take(end.saturating_sub(start))
            .collect()
    }

    fn content(&self) -> String {
        self.text.clone()
    }
}

impl TextBufferMut for StringBuffer {
    fn insert(&mut self, offset: usize, text: &str) {
        let byte_offset = self.char_to_byte(offset);
        self.text.insert_str(byte_offset, text);
    }

    fn remove(&mut self, range: Range<usize>) {
        let start_byte = self.char_to_byte(range.start);
        let end_byte = self.char_to_byte(range.end);
        self.text.replace_range(start_byte..end_byte, "");
    }
}

// =============================================================================
// RopeBuffer - for multi-line document editing
// =============================================================================

/// TextBuffer implementation wrapping ropey::Rope.
/// Used for documents loaded from disk with efficient operations on large files.
#[derive(Debug, Clone)]
pub struct RopeBuffer {
    rope: Rope,
}

impl RopeBuffer {
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a RopeBuffer from a string slice
    pub fn from_text(s: &str) -> Self {
        Self {
            rope: Rope::from_str(s),
        }
    }

    /// Access the underlying Rope for rope-specific operations
    pub fn rope(&self) -> &Rope {
        &self.rope
    }
}

impl Default for RopeBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for RopeBuffer {
    fn from(s: &str) -> Self {
        Self::from_text(s)
    }
}

impl From<Rope> for RopeBuffer {
    fn from(rope: Rope) -> Self {
        Self { rope }
    }
}

impl TextBuffer for RopeBuffer {
    fn line_count(&self) -> usize {
        self.rope.len_lines().max(1)
    }

    fn line_info(&self, line: usize) -> EditResult<LineInfo> {
        check_line(line, self.line_count())?;
        let line_start = self.rope.line_to_char(line);
        let line_slice = self.rope.line(line);
        let len = line_slice.len_chars();
        // Only the last two chars can belong to the delimiter
        let tail: Vec<char> = line_slice.chars_at(len.saturating_sub(2)).collect();
        Ok(LineInfo::new(line_start, len - trailing_break_len(&tail)))
    }

    fn line_of_offset(&self, offset: usize) -> EditResult<usize> {
        check_offset(offset, self.rope.len_chars())?;
        Ok(self.rope.char_to_line(offset))
    }

    fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    fn slice(&self, range: Range<usize>) -> String {
        let start = range.start.min(self.len_chars());
        let end = range.end.min(self.len_chars());
        if start >= end {
            return String::new();
        }
        self.rope.slice(start..end).to_string()
    }

    fn content(&self) -> String {
        self.rope.to_string()
    }
}

impl TextBufferMut for RopeBuffer {
    fn insert(&mut self, offset: usize, text: &str) {
        let clamped = offset.min(self.len_chars());
        self.rope.insert(clamped, text);
    }

    fn remove(&mut self, range: Range<usize>) {
        let start = range.start.min(self.len_chars());
        let end = range.end.min(self.len_chars());
        if start < end {
            self.rope.remove(start..end);
        }
    }
}
