//! Runtime values.

use std::fmt;
use std::rc::Rc;

use bigdecimal::BigDecimal;

use crate::number;
use crate::{Environment, EvalError};

/// A runtime value.
#[derive(Clone)]
pub enum Value {
    /// Arbitrary-precision decimal
    Number(BigDecimal),
    /// String value, raw content between the quotes
    Text(Rc<str>),
    /// Name looked up in the environment
    Symbol(Rc<str>),
    /// Call form `( ... )`; the empty one is unit
    SExpr(Rc<Vec<Value>>),
    /// Data form `{ ... }`, never evaluated implicitly
    QExpr(Rc<Vec<Value>>),
    /// Built-in function
    Builtin(Builtin),
    /// User-defined function
    Lambda(Rc<Lambda>),
}

/// Signature shared by every builtin: evaluated arguments plus the
/// calling environment.
pub type BuiltinFn = fn(Vec<Value>, &Environment) -> Result<Value, EvalError>;

/// A built-in function.
#[derive(Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    pub func: BuiltinFn,
}

/// A user-defined function.
///
/// `env` holds the bindings accumulated so far. On invocation they are
/// copied into a scope whose parent is the caller's environment.
#[derive(Clone)]
pub struct Lambda {
    pub params: Vec<Rc<str>>,
    pub body: Rc<Vec<Value>>,
    pub env: Environment,
}

impl Value {
    /// The empty S-expression `()`.
    pub fn unit() -> Self {
        Value::SExpr(Rc::new(Vec::new()))
    }

    pub fn number(n: impl Into<BigDecimal>) -> Self {
        Value::Number(n.into())
    }

    /// `1` for true, `0` for false.
    pub fn bool(b: bool) -> Self {
        Value::number(if b { 1 } else { 0 })
    }

    pub fn text(s: &str) -> Self {
        Value::Text(Rc::from(s))
    }

    pub fn symbol(s: &str) -> Self {
        Value::Symbol(Rc::from(s))
    }

    pub fn qexpr(items: Vec<Value>) -> Self {
        Value::QExpr(Rc::new(items))
    }

    pub fn sexpr(items: Vec<Value>) -> Self {
        Value::SExpr(Rc::new(items))
    }

    pub fn is_unit(&self) -> bool {
        matches!(self, Value::SExpr(items) if items.is_empty())
    }

    /// Human readable name of the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "Number",
            Value::Text(_) => "Text",
            Value::Symbol(_) => "Symbol",
            Value::SExpr(_) => "S-Expression",
            Value::QExpr(_) => "Q-Expression",
            Value::Builtin(_) => "Builtin",
            Value::Lambda(_) => "Lambda",
        }
    }

    pub fn as_number(&self) -> Option<&BigDecimal> {
        match self {
            Value::Number(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_qexpr(&self) -> Option<&Rc<Vec<Value>>> {
        match self {
            Value::QExpr(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&Rc<str>> {
        match self {
            Value::Symbol(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

fn write_seq(f: &mut fmt::Formatter<'_>, open: &str, items: &[Value], close: &str) -> fmt::Result {
    f.write_str(open)?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{}", item)?;
    }
    f.write_str(close)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => f.write_str(&number::render(n)),
            Value::Text(s) => write!(f, "\"{}\"", s),
            Value::Symbol(s) => f.write_str(s),
            Value::SExpr(items) => write_seq(f, "(", items, ")"),
            Value::QExpr(items) => write_seq(f, "{", items, "}"),
            Value::Builtin(b) => f.write_str(b.name),
            Value::Lambda(lambda) => write!(f, "{}", lambda),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Builtin(b) => write!(f, "<builtin:{}>", b.name),
            other => write!(f, "{}", other),
        }
    }
}

impl fmt::Display for Lambda {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(\\ {")?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(param)?;
        }
        f.write_str("} ")?;
        write_seq(f, "{", &self.body, "}")?;
        f.write_str(")")
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::SExpr(a), Value::SExpr(b)) => a == b,
            (Value::QExpr(a), Value::QExpr(b)) => a == b,
            (Value::Builtin(a), Value::Builtin(b)) => a.name == b.name,
            (Value::Lambda(a), Value::Lambda(b)) => Rc::ptr_eq(a, b),
            // Different variants are never equal
            _ => false,
        }
    }
}
