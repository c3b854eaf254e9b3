//! CLI configuration.
//! CLI 配置。
//!
//! Flags come from clap; `LISPY_PRELUDE` and `LISPY_HISTORY` fill in what
//! the flags leave open.

use std::fs;
use std::path::PathBuf;

use lispy_eval::Environment;
use tracing::debug;

/// Environment variable naming a prelude file to load instead of the bundled one.
pub const PRELUDE_VAR: &str = "LISPY_PRELUDE";

/// Environment variable naming the REPL history file.
pub const HISTORY_VAR: &str = "LISPY_HISTORY";

/// Which prelude a session starts with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreludeSource {
    Bundled,
    File(PathBuf),
    Disabled,
}

/// Settings shared by every command.
#[derive(Debug, Clone)]
pub struct Config {
    pub verbose: bool,
    pub quiet: bool,
    pub prelude: PreludeSource,
    pub history: Option<PathBuf>,
}

impl Config {
    /// Build the configuration from flags and the process environment.
    pub fn from_env(verbose: bool, quiet: bool, no_prelude: bool, prelude: Option<PathBuf>) -> Self {
        Self::resolve(verbose, quiet, no_prelude, prelude, |key| std::env::var(key).ok())
    }

    /// Build the configuration with an explicit variable lookup.
    ///
    /// `--no-prelude` beats `--prelude`, which beats `LISPY_PRELUDE`.
    pub fn resolve(
        verbose: bool,
        quiet: bool,
        no_prelude: bool,
        prelude: Option<PathBuf>,
        var: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let prelude = if no_prelude {
            PreludeSource::Disabled
        } else if let Some(path) = prelude {
            PreludeSource::File(path)
        } else if let Some(path) = var(PRELUDE_VAR).filter(|p| !p.is_empty()) {
            PreludeSource::File(PathBuf::from(path))
        } else {
            PreludeSource::Bundled
        };

        let history = var(HISTORY_VAR).filter(|p| !p.is_empty()).map(PathBuf::from);

        Self {
            verbose,
            quiet,
            prelude,
            history,
        }
    }

    /// Create the root environment and run the configured prelude in it.
    /// A prelude that fails to load is fatal for the session.
    pub fn root_environment(&self) -> Result<Environment, String> {
        let env = Environment::with_builtins();

        match &self.prelude {
            PreludeSource::Bundled => lispy_std::load_prelude(&env)
                .map_err(|e| format!("could not load prelude: {}", e))?,
            PreludeSource::File(path) => {
                let source = fs::read_to_string(path)
                    .map_err(|e| format!("cannot read prelude '{}': {}", path.display(), e))?;
                lispy_std::load_prelude_source(&source, &env)
                    .map_err(|e| format!("could not load prelude '{}': {}", path.display(), e))?;
            }
            PreludeSource::Disabled => debug!("prelude disabled"),
        }

        Ok(env)
    }
}
