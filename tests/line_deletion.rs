//! Line deletion tests - delete_line_backward on both document backends

mod common;

use common::assert_preview_matches_apply;
use docedit::{EditBuffer, EditError, RopeBuffer, StringBuffer, TextBuffer, TextBufferMut};

/// Delete `line` of `text` and return (text, caret, line count) after applying
fn delete_line<D>(text: &str, line: usize) -> (String, Option<usize>, usize)
where
    D: TextBufferMut + for<'a> From<&'a str>,
{
    let mut doc = D::from(text);
    let mut edits = EditBuffer::new();
    edits.delete_line_backward(&doc, line).unwrap();
    assert_preview_matches_apply(text, &edits);
    let selection = edits.apply(&mut doc).unwrap();
    (doc.content(), selection, doc.line_count())
}

fn both_backends(text: &str, line: usize) -> (String, Option<usize>, usize) {
    let string = delete_line::<StringBuffer>(text, line);
    let rope = delete_line::<RopeBuffer>(text, line);
    assert_eq!(string, rope, "backends disagree deleting line {} of {:?}", line, text);
    string
}

const THREE_LINES: &str = "one\ntwo\nthree";

#[test]
fn test_delete_only_line() {
    let (text, selection, lines) = both_backends("only line", 0);
    assert_eq!(text, "");
    assert_eq!(selection, Some(0));
    assert_eq!(lines, 1);
}

#[test]
fn test_delete_middle_line_takes_preceding_newline() {
    let (text, selection, lines) = both_backends(THREE_LINES, 1);
    assert_eq!(text, "one\nthree");
    // Caret at the end of the preceding line
    assert_eq!(selection, Some(3));
    assert_eq!(lines, 2);
}

#[test]
fn test_delete_first_line_takes_following_newline() {
    let (text, selection, lines) = both_backends(THREE_LINES, 0);
    assert_eq!(text, "two\nthree");
    assert_eq!(selection, Some(0));
    assert_eq!(lines, 2);
}

#[test]
fn test_delete_last_line() {
    let (text, selection, lines) = both_backends(THREE_LINES, 2);
    assert_eq!(text, "one\ntwo");
    assert_eq!(selection, Some(7));
    assert_eq!(lines, 2);
}

#[test]
fn test_delete_trailing_empty_line() {
    let (text, selection, lines) = both_backends("a\nb\n", 2);
    assert_eq!(text, "a\nb");
    assert_eq!(selection, Some(3));
    assert_eq!(lines, 2);
}

#[test]
fn test_delete_empty_middle_line() {
    let (text, _, lines) = both_backends("a\n\nb", 1);
    assert_eq!(text, "a\nb");
    assert_eq!(lines, 2);
}

#[test]
fn test_delete_line_with_crlf() {
    let (text, selection, lines) = both_backends("one\r\ntwo\r\nthree", 1);
    assert_eq!(text, "one\r\nthree");
    assert_eq!(selection, Some(3));
    assert_eq!(lines, 2);
}

#[test]
fn test_delete_line_at_offset() {
    let doc = StringBuffer::from_text(THREE_LINES);
    for offset in 4..=7 {
        let mut by_offset = EditBuffer::new();
        by_offset.delete_line_backward_at_offset(&doc, offset).unwrap();

        let mut by_line = EditBuffer::new();
        by_line.delete_line_backward(&doc, 1).unwrap();
        assert_eq!(by_offset, by_line, "offset {}", offset);
    }
}

#[test]
fn test_delete_several_lines_in_one_batch() {
    let snapshot = RopeBuffer::from_text("l0\nl1\nl2\nl3\nl4");
    let mut edits = EditBuffer::new();
    // Line numbers refer to the snapshot, not to the partially edited document
    edits.delete_line_backward(&snapshot, 1).unwrap();
    edits.delete_line_backward(&snapshot, 3).unwrap();

    let mut doc = snapshot.clone();
    let selection = edits.apply(&mut doc).unwrap();
    assert_eq!(doc.content(), "l0\nl2\nl4");
    assert_eq!(selection, Some(5));
}

#[test]
fn test_delete_line_then_insert_elsewhere() {
    let snapshot = StringBuffer::from_text("name: app\nmemory: 1G\ninstances: 2\n");
    let mut edits = EditBuffer::new();
    edits.delete_line_backward(&snapshot, 1).unwrap();
    edits.insert(snapshot.len_chars(), "memory: 2G\n");

    let mut doc = snapshot.clone();
    let selection = edits.apply(&mut doc).unwrap();
    assert_eq!(doc.content(), "name: app\ninstances: 2\nmemory: 2G\n");
    assert_eq!(selection, Some(doc.len_chars()));
}

#[test]
fn test_invalid_line_is_not_recorded() {
    let doc = StringBuffer::from_text(THREE_LINES);
    let mut edits = EditBuffer::new();
    assert_eq!(
        edits.delete_line_backward(&doc, 3),
        Err(EditError::InvalidLine {
            line: 3,
            line_count: 3
        })
    );
    assert!(matches!(
        edits.delete_line_backward_at_offset(&doc, 99),
        Err(EditError::InvalidOffset { offset: 99, .. })
    ));
    assert!(edits.is_empty());
}
