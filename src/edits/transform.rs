//! Mapping from original-document offsets to offsets in the partially
//! edited document.
//!
//! The transform is a list of steps, one per content-changing edit, folded
//! left to right on every lookup. Resolving one offset is O(n) in the number
//! of applied edits, so applying a batch is O(n^2). Batches produced by
//! completion proposals and quick fixes are a few dozen edits at most.

/// Effect of one applied edit on offsets in the current document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformStep {
    /// `len` chars were inserted at `at`. Offsets at or after `at` move forward,
    /// saturating at `usize::MAX`.
    Shift { at: usize, len: usize },
    /// `from..to` was removed. Offsets inside the range collapse onto `from`.
    Collapse { from: usize, to: usize },
}

impl TransformStep {
    pub fn apply(self, offset: usize) -> usize {
        match self {
            TransformStep::Shift { at, len } => {
                if offset < at {
                    offset
                } else {
                    offset.saturating_add(len)
                }
            }
            TransformStep::Collapse { from, to } => {
                if offset <= from {
                    offset
                } else if offset >= to {
                    offset - (to - from)
                } else {
                    from
                }
            }
        }
    }
}

/// Accumulated original-to-current offset mapping. Starts as the identity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OffsetTransform {
    steps: Vec<TransformStep>,
}

impl OffsetTransform {
    pub fn identity() -> Self {
        Self::default()
    }

    /// Map an original offset into the current document
    pub fn transform(&self, original: usize) -> usize {
        self.steps
            .iter()
            .fold(original, |offset, step| step.apply(offset))
    }

    /// Record an insertion of `len` chars at current offset `at`
    pub fn after_insert(&mut self, at: usize, len: usize) {
        if len > 0 {
            self.steps.push(TransformStep::Shift { at, len });
        }
    }

    /// Record removal of current range `from..to`
    pub fn after_delete(&mut self, from: usize, to: usize) {
        if to > from {
            self.steps.push(TransformStep::Collapse { from, to });
        }
    }

    pub fn is_identity(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn steps(&self) -> &[TransformStep] {
        &self.steps
    }
}
