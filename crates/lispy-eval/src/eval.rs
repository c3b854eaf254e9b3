//! Expression evaluation.

use std::io;
use std::rc::Rc;

use lispy_diagnostic::{Diagnostic, ErrorCode};
use lispy_syntax::{Expr, ExprKind, SourceFile};
use thiserror::Error;
use tracing::{debug, trace};

use crate::lambda;
use crate::{Environment, Value};

/// Evaluation errors.
#[derive(Debug, Error)]
pub enum EvalError {
    #[error("{message} at offset {position}")]
    Syntax {
        message: String,
        position: usize,
        code: ErrorCode,
    },

    #[error("type error: {0}")]
    Type(String),

    #[error("arity error: {0}")]
    Arity(String),

    #[error("unbound symbol '{0}'")]
    UnboundSymbol(String),

    #[error("'{0}' is not a function")]
    NotAFunction(String),

    #[error("division by zero")]
    DivisionByZero,

    #[error("malformed parameter list: symbol '&' not followed by a single symbol")]
    MalformedVariadic,

    #[error("function got too many arguments: got {got}, expected {expected}")]
    TooManyArguments { got: usize, expected: usize },

    #[error("{0}")]
    User(String),

    #[error("error in expression '{expr}': {source}")]
    InExpression {
        expr: String,
        source: Box<EvalError>,
    },

    #[error("cannot read '{path}': {source}")]
    Io { path: String, source: io::Error },
}

impl EvalError {
    /// The diagnostic code for this error. Wrapped errors report the code
    /// of the innermost failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            EvalError::Syntax { code, .. } => *code,
            EvalError::Type(_) => ErrorCode::TypeMismatch,
            EvalError::Arity(_) => ErrorCode::WrongArity,
            EvalError::UnboundSymbol(_) => ErrorCode::UnboundSymbol,
            EvalError::NotAFunction(_) => ErrorCode::NotAFunction,
            EvalError::DivisionByZero => ErrorCode::DivisionByZero,
            EvalError::MalformedVariadic => ErrorCode::MalformedVariadic,
            EvalError::TooManyArguments { .. } => ErrorCode::TooManyArguments,
            EvalError::User(_) => ErrorCode::UserError,
            EvalError::InExpression { source, .. } => source.code(),
            EvalError::Io { .. } => ErrorCode::LoadFailed,
        }
    }

    fn from_diagnostic(diagnostic: &Diagnostic) -> Self {
        EvalError::Syntax {
            message: diagnostic.message.clone(),
            position: diagnostic.position(),
            code: diagnostic.code.unwrap_or(ErrorCode::UnexpectedCharacter),
        }
    }
}

/// Parse source text into a single S-expression holding the top-level
/// forms. The first syntax problem becomes an error.
pub fn parse(source: &str) -> Result<Value, EvalError> {
    let (file, diagnostics) = lispy_parser::parse(source);
    if let Some(first) = diagnostics.first() {
        return Err(EvalError::from_diagnostic(first));
    }
    Ok(lower_file(&file))
}

/// Lower a parsed file into the S-expression of its top-level forms.
pub fn lower_file(file: &SourceFile) -> Value {
    Value::sexpr(file.exprs.iter().map(Value::from).collect())
}

impl From<&Expr> for Value {
    fn from(expr: &Expr) -> Self {
        match &expr.kind {
            ExprKind::Number(n) => Value::Number(n.clone()),
            ExprKind::Text(s) => Value::text(s),
            ExprKind::Symbol(s) => Value::symbol(s),
            ExprKind::SExpr(items) => Value::sexpr(items.iter().map(Value::from).collect()),
            ExprKind::QExpr(items) => Value::qexpr(items.iter().map(Value::from).collect()),
        }
    }
}

/// Evaluate a value in an environment.
pub fn eval(value: &Value, env: &Environment) -> Result<Value, EvalError> {
    match value {
        Value::Symbol(name) => env
            .get(name)
            .ok_or_else(|| EvalError::UnboundSymbol(name.to_string())),
        Value::SExpr(items) => eval_sexpr(items, env),
        Value::Number(_)
        | Value::Text(_)
        | Value::QExpr(_)
        | Value::Builtin(_)
        | Value::Lambda(_) => Ok(value.clone()),
    }
}

fn eval_sexpr(items: &Rc<Vec<Value>>, env: &Environment) -> Result<Value, EvalError> {
    if items.is_empty() {
        return Ok(Value::SExpr(items.clone()));
    }

    let mut values = items
        .iter()
        .map(|item| eval(item, env))
        .collect::<Result<Vec<_>, _>>()?;

    if values.len() == 1 {
        return Ok(values.remove(0));
    }

    let func = values.remove(0);
    apply(func, values, env)
}

/// Invoke a function value with already evaluated arguments.
pub fn apply(func: Value, args: Vec<Value>, env: &Environment) -> Result<Value, EvalError> {
    match func {
        Value::Builtin(builtin) => {
            trace!(builtin = builtin.name, argc = args.len(), "apply");
            (builtin.func)(args, env)
        }
        Value::Lambda(lambda) => {
            trace!(lambda = %lambda, argc = args.len(), "apply");
            lambda::invoke(&lambda, args, env)
        }
        other => Err(EvalError::NotAFunction(other.to_string())),
    }
}

/// Evaluate a Q-expression's contents as an S-expression.
pub fn eval_qexpr(items: &Rc<Vec<Value>>, env: &Environment) -> Result<Value, EvalError> {
    eval_sexpr(items, env)
}

/// Parse `source` and evaluate each top-level form in order.
///
/// Returns the value of the last form, or `()` when there are none.
/// Evaluation failures are wrapped with the rendered form that raised them.
pub fn execute(source: &str, env: &Environment) -> Result<Value, EvalError> {
    execute_program(&parse(source)?, env)
}

/// Evaluate each top-level form of an already parsed program in order.
///
/// `program` is the S-expression returned by [`parse`] or [`lower_file`].
pub fn execute_program(program: &Value, env: &Environment) -> Result<Value, EvalError> {
    let Value::SExpr(forms) = program else {
        return eval(program, env);
    };
    debug!(forms = forms.len(), "execute");

    let mut result = Value::unit();
    for form in forms.iter() {
        result = eval(form, env).map_err(|err| EvalError::InExpression {
            expr: form.to_string(),
            source: Box::new(err),
        })?;
    }
    Ok(result)
}
