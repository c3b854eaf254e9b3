//! Interpreter/evaluator for Lispy.
//!
//! This crate lowers the parsed syntax tree into runtime [`Value`]s and
//! evaluates them against a chain of [`Environment`]s. Function calls are
//! dynamically scoped: a lambda body sees the caller's bindings.

mod builtin;
mod env;
mod eval;
mod host;
mod lambda;
pub mod number;
pub mod value;

use std::rc::Rc;

pub use builtin::builtins;
pub use env::Environment;
pub use eval::{apply, eval, execute, execute_program, lower_file, parse, EvalError};
pub use host::{Host, StdHost};
pub use lambda::VARIADIC_MARKER;
pub use value::{Builtin, BuiltinFn, Lambda, Value};

/// Create a root environment holding every builtin.
pub fn new_root_environment(host: Rc<dyn Host>) -> Environment {
    let env = Environment::new(host);
    for (name, value) in builtins() {
        env.define(name, value);
    }
    env
}
