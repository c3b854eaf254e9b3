//! Parser for Lispy.
//!
//! This crate provides a recursive descent parser that converts
//! tokens into a syntax tree of S-expressions and Q-expressions.
//!
//! ## Error Recovery
//!
//! Unbalanced delimiters do not stop the parser: it tracks open
//! delimiters on a stack, reports every problem with its position, and
//! keeps going so a single pass reports all of them.

mod parser;
mod recovery;

pub use parser::Parser;
pub use recovery::{DelimiterKind, DelimiterStack};

use lispy_diagnostic::Diagnostic;
use lispy_lexer::Lexer;
use lispy_syntax::SourceFile;

/// Parse source code into a syntax tree.
pub fn parse(source: &str) -> (SourceFile, Vec<Diagnostic>) {
    let lexer = Lexer::new(source);
    let (tokens, mut diagnostics) = lexer.tokenize();

    let mut parser = Parser::new(tokens);
    let file = parser.parse_file();

    diagnostics.extend(parser.diagnostics());
    diagnostics.sort_by_key(|d| d.span.start);
    (file, diagnostics)
}
