//! A single recorded edit.

use std::fmt;

use super::error::{EditError, EditResult};

/// One edit, expressed in offsets of the original (unmodified) document.
///
/// Recorded offsets are never rewritten. Mapping them into the document as it
/// looks mid-application is the job of [`OffsetTransform`](super::OffsetTransform).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Insert `text` at `offset`. Empty text only moves the cursor.
    Insertion { offset: usize, text: String },
    /// Delete `start..end`. `start == end` is kept for ordering but removes nothing.
    Deletion { start: usize, end: usize },
}

impl Edit {
    pub fn insertion(offset: usize, text: impl Into<String>) -> Self {
        Edit::Insertion {
            offset,
            text: text.into(),
        }
    }

    /// Create a deletion, rejecting `start > end`
    pub fn deletion(start: usize, end: usize) -> EditResult<Self> {
        if start > end {
            return Err(EditError::InvalidRange { start, end });
        }
        Ok(Edit::Deletion { start, end })
    }

    /// True when the edit can never change document content
    pub fn is_noop(&self) -> bool {
        match self {
            Edit::Insertion { text, .. } => text.is_empty(),
            Edit::Deletion { start, end } => start == end,
        }
    }

    /// First original offset the edit touches
    pub fn start(&self) -> usize {
        match self {
            Edit::Insertion { offset, .. } => *offset,
            Edit::Deletion { start, .. } => *start,
        }
    }
}

impl fmt::Display for Edit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edit::Insertion { offset, text } => write!(f, "ins({}@{})", text, offset),
            Edit::Deletion { start, end } => write!(f, "del({}->{})", start, end),
        }
    }
}
