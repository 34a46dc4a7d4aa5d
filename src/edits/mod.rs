//! Composition of document edits.
//!
//! An [`EditBuffer`] records insertions and deletions whose offsets all refer
//! to one unmodified snapshot of a document, then applies them in recording
//! order as a single batch. A running [`OffsetTransform`] maps each recorded
//! offset into the document as it looks after the edits before it.
//!
//! # Architecture
//!
//! - [`Edit`]: one recorded insertion or deletion
//! - [`OffsetTransform`]: original-to-current offset mapping, one step per edit
//! - [`EditBuffer`]: recording API, `apply` against a live document and a
//!   document-free preview of the resulting cursor
//! - [`ProposalApplier`]: the trait hosts apply proposals through
//! - [`EditScript`]: serializable form of a batch
//!
//! # Overlapping edits
//!
//! Edits are not required to be disjoint. Each edit sees the document as left
//! by the edits recorded before it, so reordering two edits that touch the same
//! region changes the result:
//!
//! ```
//! use docedit::{EditBuffer, StringBuffer, TextBuffer};
//!
//! let mut first = EditBuffer::new();
//! first.insert(5, "A");
//! first.delete(3, 7).unwrap();
//!
//! let mut doc = StringBuffer::from_text("0123456789");
//! assert_eq!(first.apply(&mut doc).unwrap(), Some(3));
//! assert_eq!(doc.content(), "012789");
//!
//! let mut second = EditBuffer::new();
//! second.delete(3, 7).unwrap();
//! second.insert(5, "A");
//!
//! let mut doc = StringBuffer::from_text("0123456789");
//! assert_eq!(second.apply(&mut doc).unwrap(), Some(4));
//! assert_eq!(doc.content(), "012A789");
//! ```

mod applier;
mod buffer;
mod edit;
mod error;
mod script;
mod state;
mod transform;

pub use applier::{ProposalApplier, Selection};
pub use buffer::EditBuffer;
pub use edit::Edit;
pub use error::{EditError, EditResult};
pub use script::{EditScript, ScriptError, ScriptOp};
pub use transform::{OffsetTransform, TransformStep};
