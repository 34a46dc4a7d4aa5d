//! docedit - composable document edits
//!
//! This crate records batches of insertions and deletions expressed against
//! one snapshot of a document and applies them in a single pass, reporting
//! where the caret should land afterwards.

pub mod cli;
pub mod config;
pub mod config_paths;
pub mod document;
pub mod edits;
pub mod tracing;

// Re-export commonly used types
pub use config::DocEditConfig;
pub use document::{LineInfo, RopeBuffer, StringBuffer, TextBuffer, TextBufferMut};
pub use edits::{
    Edit, EditBuffer, EditError, EditResult, EditScript, OffsetTransform, ProposalApplier,
    ScriptError, ScriptOp, Selection,
};
