//! Serializable edit scripts.
//!
//! An edit script is the on-disk form of an edit batch: a list of recording
//! operations that is compiled into an [`EditBuffer`] against a snapshot of
//! the document the offsets were computed for.
//!
//! ```yaml
//! edits:
//!   - op: replace
//!     start: 6
//!     end: 8
//!     text: foo-service
//!   - op: move_cursor_to
//!     offset: 0
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::buffer::EditBuffer;
use super::error::{EditError, EditResult};
use crate::document::TextBuffer;

/// One recording operation, in original-document offsets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum ScriptOp {
    Insert { offset: usize, text: String },
    Delete { start: usize, end: usize },
    DeleteText { offset: usize, text: String },
    Replace { start: usize, end: usize, text: String },
    MoveCursorTo { offset: usize },
    DeleteLineBackward { line: usize },
    DeleteLineBackwardAtOffset { offset: usize },
}

impl ScriptOp {
    pub fn name(&self) -> &'static str {
        match self {
            ScriptOp::Insert { .. } => "insert",
            ScriptOp::Delete { .. } => "delete",
            ScriptOp::DeleteText { .. } => "delete_text",
            ScriptOp::Replace { .. } => "replace",
            ScriptOp::MoveCursorTo { .. } => "move_cursor_to",
            ScriptOp::DeleteLineBackward { .. } => "delete_line_backward",
            ScriptOp::DeleteLineBackwardAtOffset { .. } => "delete_line_backward_at_offset",
        }
    }

    /// Record this operation into `edits`
    fn record<D>(&self, edits: &mut EditBuffer, snapshot: &D) -> EditResult<()>
    where
        D: TextBuffer + ?Sized,
    {
        match self {
            ScriptOp::Insert { offset, text } => {
                edits.insert(*offset, text.as_str());
                Ok(())
            }
            ScriptOp::Delete { start, end } => edits.delete(*start, *end),
            ScriptOp::DeleteText { offset, text } => edits.delete_text(*offset, text),
            ScriptOp::Replace { start, end, text } => edits.replace(*start, *end, text.as_str()),
            ScriptOp::MoveCursorTo { offset } => {
                edits.move_cursor_to(*offset);
                Ok(())
            }
            ScriptOp::DeleteLineBackward { line } => edits.delete_line_backward(snapshot, *line),
            ScriptOp::DeleteLineBackwardAtOffset { offset } => {
                edits.delete_line_backward_at_offset(snapshot, *offset)
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("failed to read edit script: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse YAML edit script: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to parse JSON edit script: {0}")]
    Json(#[from] serde_json::Error),

    #[error("edit #{index} ({op}) rejected: {source}")]
    Rejected {
        index: usize,
        op: &'static str,
        #[source]
        source: EditError,
    },
}

/// Ordered list of operations making up one edit batch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditScript {
    #[serde(default)]
    pub edits: Vec<ScriptOp>,
}

impl EditScript {
    pub fn from_yaml_str(s: &str) -> Result<Self, ScriptError> {
        Ok(serde_yaml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self, ScriptError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load a script from disk. `.json` files are read as JSON, anything else as YAML.
    pub fn load(path: &Path) -> Result<Self, ScriptError> {
        let content = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        let script = if is_json {
            Self::from_json_str(&content)?
        } else {
            Self::from_yaml_str(&content)?
        };
        tracing::debug!(
            "Loaded edit script with {} ops from {}",
            script.edits.len(),
            path.display()
        );
        Ok(script)
    }

    pub fn to_yaml(&self) -> Result<String, ScriptError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Record every operation against `snapshot`, the document the script's
    /// offsets were computed for. Stops at the first rejected operation.
    pub fn compile<D>(&self, snapshot: &D) -> Result<EditBuffer, ScriptError>
    where
        D: TextBuffer + ?Sized,
    {
        let mut edits = EditBuffer::new();
        for (index, op) in self.edits.iter().enumerate() {
            op.record(&mut edits, snapshot)
                .map_err(|source| ScriptError::Rejected {
                    index,
                    op: op.name(),
                    source,
                })?;
        }
        Ok(edits)
    }
}

impl FromIterator<ScriptOp> for EditScript {
    fn from_iter<I: IntoIterator<Item = ScriptOp>>(iter: I) -> Self {
        Self {
            edits: iter.into_iter().collect(),
        }
    }
}
