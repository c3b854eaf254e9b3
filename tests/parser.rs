//! Integration tests for lispy-parser crate.

use lispy_diagnostic::ErrorCode;
use lispy_parser::parse;
use lispy_syntax::ExprKind;

fn parse_ok(source: &str) -> lispy_syntax::SourceFile {
    let (file, diagnostics) = parse(source);
    assert!(
        diagnostics.is_empty(),
        "unexpected diagnostics for {:?}: {:?}",
        source,
        diagnostics
    );
    file
}

fn render(source: &str) -> Vec<String> {
    parse_ok(source).exprs.iter().map(|e| e.to_string()).collect()
}

fn first_error(source: &str) -> (ErrorCode, usize) {
    let (_, diagnostics) = parse(source);
    let diag = diagnostics.first().expect("expected a diagnostic");
    (diag.code.expect("diagnostic without code"), diag.position())
}

// ============================================================================
// Structure
// ============================================================================

#[test]
fn test_top_level_forms() {
    assert_eq!(render("+ 1 2 6"), vec!["+", "1", "2", "6"]);
}

#[test]
fn test_nested_expressions() {
    assert_eq!(
        render("(eval (head {(+ 1 2) (+ 10 20)}))"),
        vec!["(eval (head {(+ 1 2) (+ 10 20)}))"]
    );
}

#[test]
fn test_whitespace_is_normalized() {
    assert_eq!(
        render("{1   2  3   {5 6}}"),
        vec!["{1 2 3 {5 6}}"]
    );
}

#[test]
fn test_strings_and_comments() {
    assert_eq!(
        render("print \"hi\" ; greet\n{\"a\" \"b\"}"),
        vec!["print", "\"hi\"", "{\"a\" \"b\"}"]
    );
}

#[test]
fn test_multiline_function_definition() {
    let file = parse_ok(
        "fun {len l} {
            if (== l {})
            {0}
            {+ 1 (len (tail l))}
        }",
    );
    assert_eq!(file.len(), 3);
    let ExprKind::QExpr(body) = &file.exprs[2].kind else {
        panic!("expected a Q-expression body");
    };
    assert_eq!(body.len(), 4);
}

#[test]
fn test_empty_source() {
    assert!(parse_ok("").is_empty());
    assert!(parse_ok("; nothing here").is_empty());
}

// ============================================================================
// Errors
// ============================================================================

#[test]
fn test_unclosed_paren() {
    assert_eq!(first_error("(+ 1 2"), (ErrorCode::UnclosedDelimiter, 0));
}

#[test]
fn test_unclosed_brace_inside_paren() {
    assert_eq!(first_error("(head {1 2)"), (ErrorCode::UnclosedDelimiter, 6));
}

#[test]
fn test_stray_closer() {
    assert_eq!(first_error("+ 1 2)"), (ErrorCode::UnexpectedClosingDelimiter, 5));
}

#[test]
fn test_mismatched_closer() {
    let (_, diagnostics) = parse("{1 2)");
    let codes: Vec<_> = diagnostics.iter().map(|d| (d.code, d.position())).collect();
    assert_eq!(
        codes,
        vec![
            (Some(ErrorCode::UnclosedDelimiter), 0),
            (Some(ErrorCode::MismatchedDelimiter), 4),
        ]
    );
}

#[test]
fn test_diagnostics_sorted_by_position() {
    let (_, diagnostics) = parse("(list \"open");
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics[0].code, Some(ErrorCode::UnclosedDelimiter));
    assert_eq!(diagnostics[1].code, Some(ErrorCode::UnterminatedString));
}

#[test]
fn test_all_problems_reported() {
    let (file, diagnostics) = parse(") (+ 1 2) }");
    assert_eq!(diagnostics.len(), 2);
    assert_eq!(file.exprs.len(), 1);
}
