//! The seam completion proposals and quick fixes are applied through.

use super::buffer::EditBuffer;
use super::error::EditResult;
use crate::document::TextBufferMut;

/// Caret placement reported to the host editor after a proposal is applied.
///
/// Edit batches only ever place a caret, so `length` is zero for every
/// selection they produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub offset: usize,
    pub length: usize,
}

impl Selection {
    pub fn caret(offset: usize) -> Self {
        Self { offset, length: 0 }
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }
}

/// Something that can modify a document and say where the caret goes.
///
/// Hosts call [`selection`](ProposalApplier::selection) before deciding to
/// commit, then [`apply`](ProposalApplier::apply) against the live document.
pub trait ProposalApplier {
    fn apply(&self, doc: &mut dyn TextBufferMut) -> EditResult<()>;

    /// Caret after `apply`, or `None` when the applier does not move it
    fn selection(&self) -> Option<Selection>;
}

impl ProposalApplier for EditBuffer {
    fn apply(&self, doc: &mut dyn TextBufferMut) -> EditResult<()> {
        EditBuffer::apply(self, doc).map(|_| ())
    }

    fn selection(&self) -> Option<Selection> {
        self.compute_resulting_selection().map(Selection::caret)
    }
}
