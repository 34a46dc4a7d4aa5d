//! Host document abstraction.
//!
//! The edit engine never owns a document. It reads line geometry from a
//! [`TextBuffer`] snapshot while edits are recorded and mutates a
//! [`TextBufferMut`] through its single `replace` primitive when a batch is
//! applied.
//!
//! - [`StringBuffer`]: String-backed document for small inputs and tests
//! - [`RopeBuffer`]: `ropey::Rope`-backed document for files

mod buffer;
mod line;

pub use buffer::{RopeBuffer, StringBuffer, TextBuffer, TextBufferMut};
pub use line::LineInfo;
