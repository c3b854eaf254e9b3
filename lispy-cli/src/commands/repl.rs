//! The `lispy repl` command.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use lispy_eval::{eval, Environment};
use tracing::debug;

use crate::commands::parse_or_report;
use crate::config::Config;
use crate::output;

pub fn run(config: &Config) -> Result<(), String> {
    println!("Lispy Version {}", env!("CARGO_PKG_VERSION"));
    println!("Type :help for help, :quit to exit");
    println!();

    let mut rl = DefaultEditor::new().map_err(|e| e.to_string())?;
    if let Some(history) = &config.history {
        // A missing history file is normal on first start
        let _ = rl.load_history(history);
    }

    // One root environment for the whole session
    let env = config.root_environment()?;

    loop {
        let readline = rl.readline("lispy> ");
        match readline {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                let _ = rl.add_history_entry(line);

                // Handle REPL commands
                if line.starts_with(':') {
                    match line {
                        ":quit" | ":q" => break,
                        ":help" | ":h" => print_help(),
                        ":env" => print_env(&env),
                        _ => output::warning(&format!("unknown command: {}", line)),
                    }
                    continue;
                }

                println!("{}", eval_line(line, &env));
            }
            Err(ReadlineError::Interrupted) => {
                println!("^C");
                continue;
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("Error: {}", err);
                break;
            }
        }
    }

    if let Some(history) = &config.history {
        if let Err(e) = rl.save_history(history) {
            output::warning(&format!("cannot save history to '{}': {}", history.display(), e));
        }
    }

    Ok(())
}

/// Evaluate one line as a single expression and render the outcome.
/// Syntax problems are also reported as diagnostics on stderr.
fn eval_line(line: &str, env: &Environment) -> String {
    let program = match parse_or_report(line, "<repl>") {
        Ok(program) => program,
        Err(message) => return format!("Error: {}", message),
    };

    match eval(&program, env) {
        Ok(value) => {
            debug!(result = %value, "repl");
            value.to_string()
        }
        Err(e) => format!("Error: {}", e),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  :help, :h    Show this help");
    println!("  :quit, :q    Exit the REPL");
    println!("  :env         Show current bindings");
}

fn print_env(env: &Environment) {
    for name in env.names() {
        println!("  {}", name);
    }
}
