//! The Lispy parser.

use lispy_common::Span;
use lispy_diagnostic::Diagnostic;
use lispy_lexer::{Token, TokenKind};
use lispy_syntax::{Expr, ExprKind, SourceFile};

use crate::recovery::{DelimiterKind, DelimiterStack};

/// The Lispy parser.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    diagnostics: Vec<Diagnostic>,
    /// Delimiter stack for tracking balanced delimiters
    delimiter_stack: DelimiterStack,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            diagnostics: Vec::new(),
            delimiter_stack: DelimiterStack::new(),
        }
    }

    pub fn diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    /// Parse a complete source text into its top-level forms.
    pub fn parse_file(&mut self) -> SourceFile {
        let start = self.current_span();
        let mut exprs = Vec::new();

        while !self.at_end() {
            if let Some(kind) = DelimiterKind::from_close(self.current_kind()) {
                self.error_unexpected_closer(kind);
                self.advance();
                continue;
            }
            if let Some(expr) = self.parse_expr() {
                exprs.push(expr);
            }
        }

        let end = self.current_span();
        SourceFile {
            exprs,
            span: start.merge(end),
        }
    }

    /// Parse one form. Returns `None` for tokens the lexer already
    /// reported as errors.
    fn parse_expr(&mut self) -> Option<Expr> {
        if let Some(delim) = DelimiterKind::from_open(self.current_kind()) {
            return Some(self.parse_seq(delim));
        }

        let span = self.current_span();
        let kind = match self.current_kind().clone() {
            TokenKind::Number(n) => {
                self.advance();
                ExprKind::Number(n)
            }
            TokenKind::String(s) => {
                self.advance();
                ExprKind::Text(s)
            }
            TokenKind::Symbol(s) => {
                self.advance();
                ExprKind::Symbol(s)
            }
            TokenKind::Error => {
                self.advance();
                return None;
            }
            // Openers are handled above; callers handle closers and end of
            // input before getting here
            TokenKind::LParen
            | TokenKind::LBrace
            | TokenKind::RParen
            | TokenKind::RBrace
            | TokenKind::Eof => {
                self.advance();
                return None;
            }
        };
        Some(Expr::new(kind, span))
    }

    /// Parse `( expr* )` or `{ expr* }`; the current token is the opener.
    fn parse_seq(&mut self, delim: DelimiterKind) -> Expr {
        let open = self.current_span();
        self.advance();
        self.delimiter_stack.push(delim, open);

        let mut items = Vec::new();
        let end = loop {
            if self.at_end() {
                self.error_unclosed(delim, open);
                break self.previous_span();
            }

            if let Some(closer) = DelimiterKind::from_close(self.current_kind()) {
                if closer == delim {
                    let span = self.current_span();
                    self.advance();
                    break span;
                }
                if self.delimiter_stack.inside_outer(closer) {
                    // The closer belongs to an enclosing form: this one was
                    // never closed. Leave the token for the outer form.
                    self.error_unclosed(delim, open);
                    break self.previous_span();
                }
                self.error_mismatched(delim, open);
                self.advance();
                continue;
            }

            if let Some(expr) = self.parse_expr() {
                items.push(expr);
            }
        };

        self.delimiter_stack.pop();

        let kind = match delim {
            DelimiterKind::Paren => ExprKind::SExpr(items),
            DelimiterKind::Brace => ExprKind::QExpr(items),
        };
        Expr::new(kind, open.merge(end))
    }

    // ========== Token Access ==========

    fn current(&self) -> &Token {
        // The lexer always ends the stream with Eof, and `advance` never
        // moves past it.
        &self.tokens[self.pos.min(self.tokens.len().saturating_sub(1))]
    }

    fn current_kind(&self) -> &TokenKind {
        if self.tokens.is_empty() {
            return &TokenKind::Eof;
        }
        &self.current().kind
    }

    fn current_span(&self) -> Span {
        if self.tokens.is_empty() {
            return Span::DUMMY;
        }
        self.current().span
    }

    fn previous_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens[self.pos - 1].span
        } else {
            Span::DUMMY
        }
    }

    fn at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    fn advance(&mut self) {
        if !self.at_end() {
            self.pos += 1;
        }
    }

    // ========== Errors ==========

    fn error_unclosed(&mut self, delim: DelimiterKind, open: Span) {
        self.diagnostics.push(Diagnostic::unclosed_delimiter(
            open,
            delim.opening_str(),
            delim.closing_str(),
        ));
    }

    fn error_unexpected_closer(&mut self, kind: DelimiterKind) {
        let span = self.current_span();
        self.diagnostics.push(Diagnostic::unexpected_closer(span, kind.closing_str()));
    }

    fn error_mismatched(&mut self, delim: DelimiterKind, open: Span) {
        let span = self.current_span();
        let found = match DelimiterKind::from_close(self.current_kind()) {
            Some(kind) => kind.closing_str(),
            None => "?",
        };
        self.diagnostics.push(Diagnostic::mismatched_delimiter(
            span,
            open,
            delim.closing_str(),
            found,
        ));
    }
}
