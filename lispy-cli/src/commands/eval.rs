//! The `lispy eval` command.

use lispy_eval::eval;

use crate::commands::{describe, parse_or_report};
use crate::config::Config;
use crate::output;

/// Evaluate `expr` as one expression, the way a REPL line is, and print
/// the result.
pub fn run(expr: &str, config: &Config) -> Result<(), String> {
    let program = parse_or_report(expr, "<eval>")?;

    if config.verbose {
        output::info(&format!("expression: {}", program));
    }

    let env = config.root_environment()?;
    let value = eval(&program, &env).map_err(|e| describe(&e))?;
    println!("{}", value);
    Ok(())
}
