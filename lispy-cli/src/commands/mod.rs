//! CLI command implementations.

pub mod eval;
pub mod repl;
pub mod run;

use lispy_diagnostic::emit;
use lispy_eval::{lower_file, EvalError, Value};
use lispy_parser::parse;

/// Parse `source`, rendering every diagnostic. Returns the top-level forms
/// as one S-expression, or the message of the first problem.
pub fn parse_or_report(source: &str, filename: &str) -> Result<Value, String> {
    let (file, diagnostics) = parse(source);

    for diag in &diagnostics {
        emit(source, filename, diag);
    }

    match diagnostics.first() {
        Some(first) => Err(first.message.clone()),
        None => Ok(lower_file(&file)),
    }
}

/// Format an evaluation error with its code.
pub fn describe(err: &EvalError) -> String {
    format!("[{}] {}", err.code(), err)
}
