//! Transient state for one apply or preview pass over an edit buffer.

use std::convert::Infallible;

use super::edit::Edit;
use super::error::EditError;
use super::transform::OffsetTransform;
use crate::document::TextBufferMut;

/// Receiver of the document mutations produced while folding edits.
///
/// Offsets handed to the sink are already mapped into the current document.
pub(crate) trait EditSink {
    type Error;

    /// Whether mutations reach a real document (for logging)
    const LIVE: bool;

    fn replace(&mut self, offset: usize, length: usize, text: &str) -> Result<(), Self::Error>;
}

/// Sink for preview passes: nothing is mutated and nothing can fail.
pub(crate) struct Preview;

impl EditSink for Preview {
    type Error = Infallible;
    const LIVE: bool = false;

    fn replace(&mut self, _offset: usize, _length: usize, _text: &str) -> Result<(), Infallible> {
        Ok(())
    }
}

/// Sink forwarding mutations to a live document.
pub(crate) struct Live<'a, D: ?Sized>(pub &'a mut D);

impl<D: TextBufferMut + ?Sized> EditSink for Live<'_, D> {
    type Error = EditError;
    const LIVE: bool = true;

    fn replace(&mut self, offset: usize, length: usize, text: &str) -> Result<(), EditError> {
        self.0.replace(offset, length, text)
    }
}

/// Offset transform, cursor candidate, and sink for one pass.
pub(crate) struct ApplicationState<S> {
    transform: OffsetTransform,
    /// `None` until an edit has placed the cursor
    selection: Option<usize>,
    sink: S,
}

impl<S: EditSink> ApplicationState<S> {
    pub fn new(sink: S) -> Self {
        Self {
            transform: OffsetTransform::identity(),
            selection: None,
            sink,
        }
    }

    pub fn apply(&mut self, edit: &Edit) -> Result<(), S::Error> {
        match edit {
            Edit::Insertion { offset, text } => self.insert(*offset, text),
            Edit::Deletion { start, end } => self.delete(*start, *end),
        }
    }

    fn insert(&mut self, offset: usize, text: &str) -> Result<(), S::Error> {
        let t_start = self.transform.transform(offset);
        let len = text.chars().count();
        if len > 0 {
            self.sink.replace(t_start, 0, text)?;
            self.transform.after_insert(t_start, len);
        }
        self.selection = Some(t_start.saturating_add(len));
        Ok(())
    }

    fn delete(&mut self, start: usize, end: usize) -> Result<(), S::Error> {
        let t_start = self.transform.transform(start);
        if end > start {
            let t_end = self.transform.transform(end);
            // A range already swallowed by earlier deletions maps to nothing
            if t_end > t_start {
                self.sink.replace(t_start, t_end - t_start, "")?;
                self.transform.after_delete(t_start, t_end);
            }
        }
        self.selection = Some(t_start);
        Ok(())
    }

    pub fn selection(&self) -> Option<usize> {
        self.selection
    }

    pub fn transform(&self) -> &OffsetTransform {
        &self.transform
    }
}
