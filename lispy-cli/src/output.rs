//! Output formatting utilities.
//! 输出格式化工具。
//!
//! Status messages go to stderr so that stdout only carries program output
//! and REPL results. Color is dropped when stderr is not a terminal or
//! `NO_COLOR` is set.

use std::io::IsTerminal;

#[derive(Clone, Copy)]
enum Level {
    Error,
    Warning,
    Info,
}

impl Level {
    fn label(self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Info => "info",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Level::Error => "31",
            Level::Warning => "33",
            Level::Info => "34",
        }
    }
}

fn use_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stderr().is_terminal()
}

fn status(level: Level, msg: &str) {
    if use_color() {
        eprintln!("\x1b[{}m{}:\x1b[0m {}", level.color(), level.label(), msg);
    } else {
        eprintln!("{}: {}", level.label(), msg);
    }
}

/// Print a warning message in yellow.
/// 以黄色打印警告消息。
pub fn warning(msg: &str) {
    status(Level::Warning, msg);
}

/// Print an error message in red.
pub fn error(msg: &str) {
    status(Level::Error, msg);
}

/// Print an info message in blue.
pub fn info(msg: &str) {
    status(Level::Info, msg);
}
