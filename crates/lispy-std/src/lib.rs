//! Standard library for Lispy.
//! Lispy 标准库。
//!
//! The library is a Lispy script, the prelude, bundled into the binary and
//! executed against the root environment at startup. It builds `fun`,
//! `let`, `do` and the list functions out of the builtins.
//! 标准库是一个 Lispy 脚本，启动时在根环境中执行。

use lispy_eval::{execute, Environment, EvalError};
use tracing::debug;

/// Source of the bundled prelude.
pub const PRELUDE: &str = include_str!("prelude.lspy");

/// Run the bundled prelude in `env`.
pub fn load_prelude(env: &Environment) -> Result<(), EvalError> {
    load_prelude_source(PRELUDE, env)
}

/// Run a prelude script in `env`, given its source.
pub fn load_prelude_source(source: &str, env: &Environment) -> Result<(), EvalError> {
    execute(source, env)?;
    debug!(bindings = env.names().len(), "prelude loaded");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prelude_loads_into_fresh_root() {
        let env = Environment::with_builtins();
        load_prelude(&env).unwrap();
        for name in ["nil", "fun", "let", "do", "map", "filter", "fib", "otherwise"] {
            assert!(env.get(name).is_some(), "`{}` missing from prelude", name);
        }
    }

    #[test]
    fn prelude_errors_are_wrapped() {
        let env = Environment::with_builtins();
        let err = load_prelude_source("(def {a} 1)\n(undefined 2)", &env).unwrap_err();
        assert!(matches!(err, EvalError::InExpression { .. }));
    }
}
