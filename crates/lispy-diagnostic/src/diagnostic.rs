//! Syntax diagnostics.
//!
//! Every diagnostic Lispy reports is an error that stops evaluation. The
//! constructors at the bottom build the five syntax problems the lexer and
//! parser can find, so wording and codes stay in one place.

use lispy_common::{LineCol, Span};
use crate::ErrorCode;

/// Which stage found the problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    Lexer,
    Parser,
}

/// A labeled span within a diagnostic.
#[derive(Debug, Clone)]
pub struct Label {
    pub span: Span,
    pub message: String,
}

impl Label {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }
}

/// A syntax error with its location, labels and optional help.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub code: Option<ErrorCode>,
    pub message: String,
    pub span: Span,
    pub labels: Vec<Label>,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn error(kind: DiagnosticKind, span: Span, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: None,
            message: message.into(),
            span,
            labels: vec![],
            help: None,
        }
    }

    /// Attach an error code; its suggestion becomes the help text unless one
    /// was already given.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        if self.help.is_none() {
            self.help = code.suggestion().map(str::to_string);
        }
        self
    }

    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Byte offset where the problem starts.
    pub fn position(&self) -> usize {
        usize::from(self.span.start)
    }

    /// Line and column of the problem inside `source`.
    pub fn location(&self, source: &str) -> LineCol {
        LineCol::locate(source, self.span.start)
    }

    // ========== Lexer ==========

    /// A `"` with no closing quote before the end of input. `start` is the
    /// offset of the opening quote.
    pub fn unterminated_string(span: Span, start: usize) -> Self {
        Self::error(DiagnosticKind::Lexer, span, "unterminated string literal")
            .with_code(ErrorCode::UnterminatedString)
            .with_label(Label::new(Span::byte(start), "string starts here"))
    }

    pub fn unexpected_character(ch: char, span: Span) -> Self {
        Self::error(DiagnosticKind::Lexer, span, format!("unexpected character: '{}'", ch))
            .with_code(ErrorCode::UnexpectedCharacter)
            .with_label(Label::new(span, "unexpected character here"))
    }

    // ========== Parser ==========

    /// An opener that reached the end of its enclosing form unclosed.
    /// Reported at the opener.
    pub fn unclosed_delimiter(open: Span, opening: &str, closing: &str) -> Self {
        Self::error(
            DiagnosticKind::Parser,
            open,
            format!("unclosed delimiter `{}`", opening),
        )
        .with_code(ErrorCode::UnclosedDelimiter)
        .with_label(Label::new(open, "opened here"))
        .with_help(format!("add `{}` to close it", closing))
    }

    pub fn unexpected_closer(span: Span, closing: &str) -> Self {
        Self::error(
            DiagnosticKind::Parser,
            span,
            format!("unexpected closing delimiter `{}`", closing),
        )
        .with_code(ErrorCode::UnexpectedClosingDelimiter)
        .with_label(Label::new(span, "nothing to close here"))
    }

    pub fn mismatched_delimiter(span: Span, open: Span, expected: &str, found: &str) -> Self {
        Self::error(
            DiagnosticKind::Parser,
            span,
            format!(
                "mismatched closing delimiter: expected `{}`, found `{}`",
                expected, found
            ),
        )
        .with_code(ErrorCode::MismatchedDelimiter)
        .with_label(Label::new(span, "mismatched closer"))
        .with_label(Label::new(open, "opened here"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unclosed_points_at_opener() {
        let diag = Diagnostic::unclosed_delimiter(Span::from_usize(6, 7), "{", "}");
        assert_eq!(diag.position(), 6);
        assert_eq!(diag.code, Some(ErrorCode::UnclosedDelimiter));
        assert_eq!(diag.help.as_deref(), Some("add `}` to close it"));
    }

    #[test]
    fn mismatched_labels_both_ends() {
        let diag =
            Diagnostic::mismatched_delimiter(Span::from_usize(4, 5), Span::from_usize(0, 1), "}", ")");
        assert_eq!(diag.labels.len(), 2);
        assert_eq!(diag.labels[1].span, Span::from_usize(0, 1));
        assert!(diag.message.contains("expected `}`, found `)`"));
    }

    #[test]
    fn unterminated_string_labels_quote() {
        let diag = Diagnostic::unterminated_string(Span::from_usize(2, 8), 2);
        assert_eq!(diag.kind, DiagnosticKind::Lexer);
        assert_eq!(diag.labels[0].span, Span::from_usize(2, 3));
    }
}
