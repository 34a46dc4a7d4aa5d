//! Recording and applying a batch of edits.

use std::fmt;

use super::edit::Edit;
use super::error::{EditError, EditResult};
use super::state::{ApplicationState, EditSink, Live, Preview};
use crate::document::{TextBuffer, TextBufferMut};

/// An ordered batch of edits expressed against one document snapshot.
///
/// Every offset passed to the recording methods refers to the original,
/// unmodified document, so a producer working from an AST or an analysis of
/// the snapshot never has to recompute positions after each small change.
///
/// Order is meaningful. Edits are applied in the order they were recorded,
/// edits that overlap get a defined result, and every edit moves the cursor to
/// its own end. Record the edit the cursor should follow last.
///
/// ```
/// use docedit::{EditBuffer, StringBuffer, TextBuffer};
///
/// let mut doc = StringBuffer::from_text("let x = foo;");
/// let mut edits = EditBuffer::new();
/// edits.replace(8, 11, "bar(1)").unwrap();
/// edits.insert(0, "pub ");
///
/// let selection = edits.apply(&mut doc).unwrap();
/// assert_eq!(doc.content(), "pub let x = bar(1);");
/// assert_eq!(selection, Some(4));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    edits: Vec<Edit>,
}

impl EditBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an insertion of `text` at `offset`
    pub fn insert(&mut self, offset: usize, text: impl Into<String>) {
        self.edits.push(Edit::insertion(offset, text));
    }

    /// Record a deletion of `start..end`.
    ///
    /// Fails with [`EditError::InvalidRange`](super::EditError::InvalidRange)
    /// when `start > end`; nothing is recorded in that case.
    pub fn delete(&mut self, start: usize, end: usize) -> EditResult<()> {
        self.edits.push(Edit::deletion(start, end)?);
        Ok(())
    }

    /// Record a deletion of `text`, which the caller knows starts at `offset`.
    ///
    /// A range whose end does not fit in `usize` is rejected as
    /// [`EditError::InvalidRange`](super::EditError::InvalidRange) ending at
    /// `usize::MAX`.
    pub fn delete_text(&mut self, offset: usize, text: &str) -> EditResult<()> {
        let end = offset
            .checked_add(text.chars().count())
            .ok_or(EditError::InvalidRange {
                start: offset,
                end: usize::MAX,
            })?;
        self.delete(offset, end)
    }

    /// Replace `start..end` with `new_text`. The cursor ends after `new_text`.
    pub fn replace(
        &mut self,
        start: usize,
        end: usize,
        new_text: impl Into<String>,
    ) -> EditResult<()> {
        self.delete(start, end)?;
        self.insert(start, new_text);
        Ok(())
    }

    /// Place the cursor at `offset` without changing content.
    ///
    /// Any edit recorded afterwards moves the cursor again.
    pub fn move_cursor_to(&mut self, offset: usize) {
        self.insert(offset, "");
    }

    /// Delete the line containing `offset` of the original document.
    /// See [`EditBuffer::delete_line_backward`].
    pub fn delete_line_backward_at_offset<D>(&mut self, doc: &D, offset: usize) -> EditResult<()>
    where
        D: TextBuffer + ?Sized,
    {
        let line = doc.line_of_offset(offset)?;
        self.delete_line_backward(doc, line)
    }

    /// Delete line `line` of the original document `doc` along with one
    /// adjacent newline.
    ///
    /// When both are available the preceding newline is removed, which leaves
    /// the cursor at the end of the previous line. The first line takes its
    /// following newline instead. A document's only line loses its content and
    /// nothing else.
    pub fn delete_line_backward<D>(&mut self, doc: &D, line: usize) -> EditResult<()>
    where
        D: TextBuffer + ?Sized,
    {
        let target = doc.line_info(line)?;
        let (start, end) = if line > 0 {
            let previous = doc.line_info(line - 1)?;
            (previous.end(), target.end())
        } else if line + 1 < doc.line_count() {
            let next = doc.line_info(line + 1)?;
            (target.offset, next.offset)
        } else {
            (target.offset, target.end())
        };
        self.delete(start, end)
    }

    /// Apply every edit to `doc` in recording order.
    ///
    /// Returns the resulting cursor offset, or `None` when the buffer is empty.
    /// An offset that does not fit the live document aborts the batch with
    /// [`EditError::InvalidOffset`](super::EditError::InvalidOffset); edits
    /// applied before it stay applied.
    pub fn apply<D>(&self, doc: &mut D) -> EditResult<Option<usize>>
    where
        D: TextBufferMut + ?Sized,
    {
        self.fold(Live(doc))
    }

    /// Cursor offset [`EditBuffer::apply`] would produce, without a document.
    pub fn compute_resulting_selection(&self) -> Option<usize> {
        match self.fold(Preview) {
            Ok(selection) => selection,
            Err(never) => match never {},
        }
    }

    fn fold<S: EditSink>(&self, sink: S) -> Result<Option<usize>, S::Error> {
        let mut state = ApplicationState::new(sink);
        for edit in &self.edits {
            state.apply(edit)?;
            tracing::trace!(%edit, selection = ?state.selection(), "edit applied");
        }
        tracing::debug!(
            edits = self.edits.len(),
            steps = state.transform().steps().len(),
            selection = ?state.selection(),
            live = S::LIVE,
            "edit buffer folded"
        );
        Ok(state.selection())
    }

    /// Recorded edits, in application order
    pub fn edits(&self) -> &[Edit] {
        &self.edits
    }

    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }
}

impl fmt::Display for EditBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "DocumentEdits(")?;
        for edit in &self.edits {
            writeln!(f, "   {}", edit)?;
        }
        write!(f, ")")
    }
}

impl From<EditBuffer> for Vec<Edit> {
    fn from(buffer: EditBuffer) -> Self {
        buffer.edits
    }
}
