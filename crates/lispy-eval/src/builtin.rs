//! Built-in functions.

use std::rc::Rc;

use bigdecimal::BigDecimal;
use num_traits::Zero;
use tracing::debug;

use crate::eval::{eval_qexpr, execute, EvalError};
use crate::number;
use crate::value::{Builtin, BuiltinFn, Lambda};
use crate::{Environment, Value};

/// Get all built-in functions.
pub fn builtins() -> Vec<(&'static str, Value)> {
    let table: [(&'static str, BuiltinFn); 22] = [
        // === Arithmetic ===
        ("+", add),
        ("-", sub),
        ("*", mul),
        ("/", div),
        // === Lists ===
        ("head", head),
        ("tail", tail),
        ("list", |args, _| Ok(Value::qexpr(args))),
        ("eval", eval),
        ("join", join),
        // === Binding ===
        ("def", def),
        ("=", put),
        ("\\", lambda),
        // === Comparison ===
        (">", |args, _| compare(">", args, |a, b| a > b)),
        (">=", |args, _| compare(">=", args, |a, b| a >= b)),
        ("<", |args, _| compare("<", args, |a, b| a < b)),
        ("<=", |args, _| compare("<=", args, |a, b| a <= b)),
        ("==", |args, _| {
            let [a, b] = exactly::<2>("==", args)?;
            Ok(Value::bool(a == b))
        }),
        ("!=", |args, _| {
            let [a, b] = exactly::<2>("!=", args)?;
            Ok(Value::bool(a != b))
        }),
        // === Control ===
        ("if", if_),
        ("error", error),
        // === I/O ===
        ("print", print),
        ("load", load),
    ];

    table
        .into_iter()
        .map(|(name, func)| (name, Value::Builtin(Builtin { name, func })))
        .collect()
}

// ========== Argument checks ==========

/// Take exactly `N` arguments.
fn exactly<const N: usize>(name: &str, args: Vec<Value>) -> Result<[Value; N], EvalError> {
    let got = args.len();
    args.try_into().map_err(|_| {
        EvalError::Arity(format!(
            "`{}` takes exactly {} argument{} but was given {}",
            name,
            N,
            if N == 1 { "" } else { "s" },
            got
        ))
    })
}

fn expect_number<'a>(name: &str, value: &'a Value) -> Result<&'a BigDecimal, EvalError> {
    value.as_number().ok_or_else(|| {
        EvalError::Type(format!(
            "arguments to `{}` can only be numbers, but got {} `{}`",
            name,
            value.type_name(),
            value
        ))
    })
}

fn expect_qexpr<'a>(name: &str, value: &'a Value) -> Result<&'a Rc<Vec<Value>>, EvalError> {
    value.as_qexpr().ok_or_else(|| {
        EvalError::Type(format!(
            "`{}` expects a Q-Expression, but got {} `{}`",
            name,
            value.type_name(),
            value
        ))
    })
}

fn expect_text<'a>(name: &str, value: &'a Value) -> Result<&'a str, EvalError> {
    value.as_text().ok_or_else(|| {
        EvalError::Type(format!(
            "`{}` expects a Text, but got {} `{}`",
            name,
            value.type_name(),
            value
        ))
    })
}

/// The single Q-expression argument of `head`, `tail` and `eval`.
/// Any other argument shape is a type error.
fn single_qexpr(name: &str, args: &[Value]) -> Result<Rc<Vec<Value>>, EvalError> {
    match args {
        [Value::QExpr(items)] => Ok(items.clone()),
        [other] => Err(EvalError::Type(format!(
            "`{}` expects a Q-Expression, but got {} `{}`",
            name,
            other.type_name(),
            other
        ))),
        _ => Err(EvalError::Type(format!(
            "`{}` expects exactly one Q-Expression, but was given {} arguments",
            name,
            args.len()
        ))),
    }
}

// ========== Arithmetic ==========

/// All arguments as numbers; at least one is required.
fn numbers<'a>(name: &str, args: &'a [Value]) -> Result<Vec<&'a BigDecimal>, EvalError> {
    if args.is_empty() {
        return Err(EvalError::Arity(format!("`{}` needs at least one argument", name)));
    }
    args.iter().map(|arg| expect_number(name, arg)).collect()
}

fn fold(
    name: &str,
    args: &[Value],
    unary: Option<BigDecimal>,
    op: impl Fn(&BigDecimal, &BigDecimal) -> Result<BigDecimal, EvalError>,
) -> Result<Value, EvalError> {
    let nums = numbers(name, args)?;

    // `- x` is `0 - x` and `/ x` is `1 / x`
    if let (Some(identity), [only]) = (unary, nums.as_slice()) {
        return op(&identity, only).map(Value::Number);
    }

    let mut acc = nums[0].clone();
    for n in &nums[1..] {
        acc = op(&acc, n)?;
    }
    Ok(Value::Number(acc))
}

fn add(args: Vec<Value>, _env: &Environment) -> Result<Value, EvalError> {
    fold("+", &args, None, |a, b| Ok(a + b))
}

fn sub(args: Vec<Value>, _env: &Environment) -> Result<Value, EvalError> {
    fold("-", &args, Some(BigDecimal::zero()), |a, b| Ok(a - b))
}

fn mul(args: Vec<Value>, _env: &Environment) -> Result<Value, EvalError> {
    fold("*", &args, None, |a, b| Ok(a * b))
}

fn div(args: Vec<Value>, _env: &Environment) -> Result<Value, EvalError> {
    fold("/", &args, Some(BigDecimal::from(1)), |a, b| {
        number::divide(a, b).ok_or(EvalError::DivisionByZero)
    })
}

// ========== Lists ==========

fn head(args: Vec<Value>, _env: &Environment) -> Result<Value, EvalError> {
    let items = single_qexpr("head", &args)?;
    Ok(Value::qexpr(items.iter().take(1).cloned().collect()))
}

fn tail(args: Vec<Value>, _env: &Environment) -> Result<Value, EvalError> {
    let items = single_qexpr("tail", &args)?;
    Ok(Value::qexpr(items.iter().skip(1).cloned().collect()))
}

fn eval(args: Vec<Value>, env: &Environment) -> Result<Value, EvalError> {
    let items = single_qexpr("eval", &args)?;
    eval_qexpr(&items, env)
}

fn join(args: Vec<Value>, _env: &Environment) -> Result<Value, EvalError> {
    let mut joined = Vec::new();
    for arg in &args {
        joined.extend(expect_qexpr("join", arg)?.iter().cloned());
    }
    Ok(Value::qexpr(joined))
}

// ========== Binding ==========

/// Bind a Q-expression of symbols to the remaining arguments in `target`.
fn bind(name: &str, args: Vec<Value>, target: &Environment) -> Result<Value, EvalError> {
    let mut args = args.into_iter();
    let Some(first) = args.next() else {
        return Err(EvalError::Arity(format!("`{}` needs a list of names", name)));
    };

    let names = expect_qexpr(name, &first)?
        .iter()
        .map(|v| {
            v.as_symbol().cloned().ok_or_else(|| {
                EvalError::Type(format!("`{}` cannot define non-symbol `{}`", name, v))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let values: Vec<Value> = args.collect();
    if names.len() != values.len() {
        return Err(EvalError::Arity(format!(
            "`{}` got {} name{} but {} value{}",
            name,
            names.len(),
            if names.len() == 1 { "" } else { "s" },
            values.len(),
            if values.len() == 1 { "" } else { "s" },
        )));
    }

    for (sym, value) in names.into_iter().zip(values) {
        target.define(sym, value);
    }
    Ok(Value::unit())
}

fn def(args: Vec<Value>, env: &Environment) -> Result<Value, EvalError> {
    bind("def", args, env.root())
}

fn put(args: Vec<Value>, env: &Environment) -> Result<Value, EvalError> {
    bind("=", args, env)
}

fn lambda(args: Vec<Value>, env: &Environment) -> Result<Value, EvalError> {
    let [params, body] = exactly::<2>("\\", args)?;
    let params = expect_qexpr("\\", &params)?
        .iter()
        .map(|p| {
            p.as_symbol().cloned().ok_or_else(|| {
                EvalError::Type(format!("parameters to `\\` must be symbols, but got `{}`", p))
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    let body = expect_qexpr("\\", &body)?.clone();

    Ok(Value::Lambda(Rc::new(Lambda {
        params,
        body,
        env: env.child(),
    })))
}

// ========== Comparison ==========

fn compare(
    name: &str,
    args: Vec<Value>,
    op: fn(&BigDecimal, &BigDecimal) -> bool,
) -> Result<Value, EvalError> {
    let [a, b] = exactly::<2>(name, args)?;
    Ok(Value::bool(op(expect_number(name, &a)?, expect_number(name, &b)?)))
}

// ========== Control ==========

fn if_(args: Vec<Value>, env: &Environment) -> Result<Value, EvalError> {
    let [cond, then, otherwise] = exactly::<3>("if", args)?;
    let cond = cond.as_number().ok_or_else(|| {
        EvalError::Type(format!(
            "first argument to `if` has to be a Number, but got {} `{}`",
            cond.type_name(),
            cond
        ))
    })?;
    let then = expect_qexpr("if", &then)?;
    let otherwise = expect_qexpr("if", &otherwise)?;

    if cond.is_zero() {
        eval_qexpr(otherwise, env)
    } else {
        eval_qexpr(then, env)
    }
}

fn error(args: Vec<Value>, _env: &Environment) -> Result<Value, EvalError> {
    let [message] = exactly::<1>("error", args)?;
    Err(EvalError::User(expect_text("error", &message)?.to_string()))
}

// ========== I/O ==========

fn print(args: Vec<Value>, env: &Environment) -> Result<Value, EvalError> {
    let line = args
        .iter()
        .map(Value::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    env.host().print(&line);
    Ok(Value::unit())
}

fn load(args: Vec<Value>, env: &Environment) -> Result<Value, EvalError> {
    let [path] = exactly::<1>("load", args)?;
    let path = expect_text("load", &path)?;

    debug!(path, "load");
    let source = env.host().read_source(path).map_err(|source| EvalError::Io {
        path: path.to_string(),
        source,
    })?;
    execute(&source, env)?;
    Ok(Value::unit())
}
