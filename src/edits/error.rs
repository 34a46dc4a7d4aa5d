//! Error types for edit recording and application.

use thiserror::Error;

/// Errors produced while recording or applying document edits.
///
/// `InvalidRange` is raised synchronously when an edit is recorded and the
/// edit never enters the buffer. `InvalidOffset` and `InvalidLine` come from the
/// host document and are propagated to the caller unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("invalid range: start {start} is after end {end}")]
    InvalidRange { start: usize, end: usize },

    #[error("invalid offset: {offset}+{length} is outside a document of {len} chars")]
    InvalidOffset {
        offset: usize,
        length: usize,
        len: usize,
    },

    #[error("invalid line: {line} (document has {line_count} lines)")]
    InvalidLine { line: usize, line_count: usize },
}

/// Convenience alias used throughout the engine.
pub type EditResult<T> = Result<T, EditError>;
