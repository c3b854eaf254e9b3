//! The `lispy run` command.

use std::fs;
use std::path::Path;

use lispy_eval::{execute_program, Value};

use crate::commands::{describe, parse_or_report};
use crate::config::Config;
use crate::output;

pub fn run(file: &Path, config: &Config) -> Result<(), String> {
    let source = fs::read_to_string(file)
        .map_err(|e| format!("cannot read file '{}': {}", file.display(), e))?;

    // Report every syntax problem before running anything
    let program = parse_or_report(&source, &file.display().to_string())?;

    let env = config.root_environment()?;

    if config.verbose {
        if let Value::SExpr(forms) = &program {
            output::info(&format!("running {} top-level forms", forms.len()));
        }
    }

    execute_program(&program, &env).map_err(|e| describe(&e))?;
    Ok(())
}
