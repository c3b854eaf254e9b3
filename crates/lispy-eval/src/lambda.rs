//! Lambda invocation: argument binding, variadics and partial application.

use std::rc::Rc;

use tracing::debug;

use crate::eval::{eval_qexpr, EvalError};
use crate::value::Lambda;
use crate::{Environment, Value};

/// Marker that collects the remaining arguments into one list.
pub const VARIADIC_MARKER: &str = "&";

/// Invoke `lambda` with `args`, called from `caller`.
///
/// The invocation scope is a copy of the lambda's bindings whose parent is
/// the caller's environment, so free symbols resolve at the call site.
/// Supplying fewer arguments than parameters returns a new lambda holding
/// the bindings made so far.
pub fn invoke(lambda: &Lambda, args: Vec<Value>, caller: &Environment) -> Result<Value, EvalError> {
    let scope = lambda.env.reparented(caller);
    let argc = args.len();

    let mut remaining: &[Rc<str>] = &lambda.params;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let Some((param, rest)) = remaining.split_first() else {
            return Err(EvalError::TooManyArguments {
                got: argc,
                expected: lambda.params.len(),
            });
        };

        if &**param == VARIADIC_MARKER {
            let [name] = rest else {
                return Err(EvalError::MalformedVariadic);
            };
            let mut collected = vec![arg];
            collected.extend(args.by_ref());
            scope.define(name.clone(), Value::qexpr(collected));
            remaining = &[];
            break;
        }

        scope.define(param.clone(), arg);
        remaining = rest;
    }

    if remaining.is_empty() {
        return eval_qexpr(&lambda.body, &scope);
    }

    debug!(remaining = remaining.len(), "partial application");
    Ok(Value::Lambda(Rc::new(Lambda {
        params: remaining.to_vec(),
        body: lambda.body.clone(),
        env: scope.detached(),
    })))
}
