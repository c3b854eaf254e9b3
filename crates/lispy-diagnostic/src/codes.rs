//! Error codes for Lispy diagnostics.

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Lexer errors (E0001 - E0099)
    UnexpectedCharacter,
    UnterminatedString,

    // Parser errors (E0100 - E0199)
    UnclosedDelimiter,
    UnexpectedClosingDelimiter,
    MismatchedDelimiter,

    // Eval errors (E0200 - E0299)
    TypeMismatch,
    WrongArity,
    UnboundSymbol,
    NotAFunction,
    DivisionByZero,
    MalformedVariadic,
    TooManyArguments,
    UserError,
    LoadFailed,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            // Lexer
            ErrorCode::UnexpectedCharacter => "E0001",
            ErrorCode::UnterminatedString => "E0002",

            // Parser
            ErrorCode::UnclosedDelimiter => "E0101",
            ErrorCode::UnexpectedClosingDelimiter => "E0102",
            ErrorCode::MismatchedDelimiter => "E0103",

            // Eval
            ErrorCode::TypeMismatch => "E0200",
            ErrorCode::WrongArity => "E0201",
            ErrorCode::UnboundSymbol => "E0202",
            ErrorCode::NotAFunction => "E0203",
            ErrorCode::DivisionByZero => "E0204",
            ErrorCode::MalformedVariadic => "E0205",
            ErrorCode::TooManyArguments => "E0206",
            ErrorCode::UserError => "E0207",
            ErrorCode::LoadFailed => "E0208",
        }
    }

    /// Get a suggested fix for the error, if available.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            ErrorCode::UnterminatedString => Some("add a closing quote `\"` to terminate the string"),
            ErrorCode::UnclosedDelimiter => Some("add the matching closing delimiter"),
            ErrorCode::UnexpectedClosingDelimiter => Some("remove the stray delimiter"),
            ErrorCode::MismatchedDelimiter => Some("`(` closes with `)` and `{` closes with `}`"),
            ErrorCode::UnboundSymbol => Some("define it first with `def` or check the spelling"),
            ErrorCode::MalformedVariadic => Some("write the parameter list as `{x & rest}`"),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
