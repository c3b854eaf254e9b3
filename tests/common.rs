//! Integration tests for lispy-common and lispy-diagnostic.

use lispy_common::{BytePos, LineCol, Span};
use lispy_diagnostic::{render, Diagnostic, DiagnosticKind, ErrorCode, Label};

#[test]
fn test_span_merge() {
    let a = Span::from_usize(10, 20);
    let b = Span::from_usize(15, 30);
    let merged = a.merge(b);
    assert_eq!(merged.start.0, 10);
    assert_eq!(merged.end.0, 30);
}

#[test]
fn test_span_len() {
    let span = Span::from_usize(5, 15);
    assert_eq!(span.len(), 10);
}

#[test]
fn test_span_is_empty() {
    let empty = Span::from_usize(5, 5);
    let non_empty = Span::from_usize(5, 10);
    assert!(empty.is_empty());
    assert!(!non_empty.is_empty());
}

#[test]
fn test_span_range() {
    let span = Span::from_usize(5, 15);
    assert_eq!(span.range(), 5..15);
}

#[test]
fn test_byte_span() {
    let span = Span::byte(10);
    assert_eq!(span.range(), 10..11);
    assert_eq!(span.snippet("(head {1 2)"), Some(")"));
}

#[test]
fn test_line_col_of_second_line() {
    let source = "(def {x} 1)\n  (+ x \"oops";
    assert_eq!(LineCol::locate(source, BytePos(18)), LineCol { line: 2, col: 7 });
}

// ============================================================================
// Diagnostics
// ============================================================================

#[test]
fn test_error_code_strings() {
    assert_eq!(ErrorCode::UnexpectedCharacter.as_str(), "E0001");
    assert_eq!(ErrorCode::UnclosedDelimiter.to_string(), "E0101");
    assert_eq!(ErrorCode::UnboundSymbol.as_str(), "E0202");
}

#[test]
fn test_diagnostic_location() {
    let source = "+ 1 2\n(head {1 2)";
    let diag = Diagnostic::error(DiagnosticKind::Parser, Span::from_usize(12, 13), "unclosed delimiter `{`")
        .with_code(ErrorCode::UnclosedDelimiter);
    assert_eq!(diag.position(), 12);
    assert_eq!(diag.location(source), LineCol { line: 2, col: 7 });
    assert_eq!(diag.kind, DiagnosticKind::Parser);
}

#[test]
fn test_render_contains_code_message_and_help() {
    let source = "(+ 1 2";
    let diag = Diagnostic::error(DiagnosticKind::Parser, Span::from_usize(0, 1), "unclosed delimiter `(`")
        .with_code(ErrorCode::UnclosedDelimiter)
        .with_label(Label::new(Span::from_usize(0, 1), "opened here"));
    let text = render(source, "<test>", &diag);
    assert!(text.contains("E0101"), "{}", text);
    assert!(text.contains("unclosed delimiter `(`"), "{}", text);
    assert!(text.contains("opened here"), "{}", text);
    assert!(text.contains("add the matching closing delimiter"), "{}", text);
}
