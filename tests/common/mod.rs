//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use docedit::{EditBuffer, RopeBuffer, StringBuffer, TextBuffer};

/// Apply `edits` to a fresh StringBuffer holding `text`
pub fn apply_string(text: &str, edits: &EditBuffer) -> (String, Option<usize>) {
    let mut doc = StringBuffer::from_text(text);
    let selection = edits.apply(&mut doc).expect("edits should fit the document");
    (doc.content(), selection)
}

/// Apply `edits` to a fresh RopeBuffer holding `text`
pub fn apply_rope(text: &str, edits: &EditBuffer) -> (String, Option<usize>) {
    let mut doc = RopeBuffer::from_text(text);
    let selection = edits.apply(&mut doc).expect("edits should fit the document");
    (doc.content(), selection)
}

/// Build a buffer by running `build` against an empty EditBuffer
pub fn edits(build: impl FnOnce(&mut EditBuffer)) -> EditBuffer {
    let mut buffer = EditBuffer::new();
    build(&mut buffer);
    buffer
}

/// Assert that preview and a real apply agree on the caret, on both backends
pub fn assert_preview_matches_apply(text: &str, edits: &EditBuffer) {
    let preview = edits.compute_resulting_selection();
    let (_, string_selection) = apply_string(text, edits);
    let (_, rope_selection) = apply_rope(text, edits);
    assert_eq!(preview, string_selection, "preview vs StringBuffer for {}", edits);
    assert_eq!(preview, rope_selection, "preview vs RopeBuffer for {}", edits);
}
