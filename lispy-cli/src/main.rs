//! Lispy CLI - The Lispy language command line interface.
//! Lispy CLI - Lispy 语言的命令行界面。

mod commands;
mod config;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;

/// Main CLI structure.
/// 主 CLI 结构体。
#[derive(Parser)]
#[command(name = "lispy")]
#[command(author, version, about = "Lispy - a small Lisp with Q-expressions", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output. / 启用详细输出。
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress output. / 抑制输出。
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Start without the bundled prelude. / 不加载内置 prelude。
    #[arg(long, global = true)]
    no_prelude: bool,

    /// Load this file instead of the bundled prelude. / 用此文件替代内置 prelude。
    #[arg(long, global = true, value_name = "FILE")]
    prelude: Option<PathBuf>,
}

/// Available CLI commands.
/// 可用的 CLI 命令。
#[derive(Subcommand)]
enum Commands {
    /// Start an interactive REPL (the default). / 启动交互式 REPL（默认）。
    Repl,

    /// Run a Lispy script. / 运行 Lispy 脚本。
    Run {
        /// The file to run. / 要运行的文件。
        file: PathBuf,
    },

    /// Evaluate an expression. / 求值表达式。
    Eval {
        /// The expression to evaluate. / 要求值的表达式。
        expr: String,
    },
}

/// Install the log subscriber. `LISPY_LOG` wins over `RUST_LOG`; without
/// either, `--verbose` selects `debug` and the default is `warn`.
fn init_tracing(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_env("LISPY_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

/// Main entry point.
/// 主入口点。
fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::from_env(cli.verbose, cli.quiet, cli.no_prelude, cli.prelude);

    let result = match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => commands::repl::run(&config),
        Commands::Run { file } => commands::run::run(&file, &config),
        Commands::Eval { expr } => commands::eval::run(&expr, &config),
    };

    if let Err(e) = result {
        if !config.quiet {
            output::error(&e);
        }
        std::process::exit(1);
    }
}
