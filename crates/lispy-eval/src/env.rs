//! Evaluation environment.

use std::collections::{BTreeSet, HashMap};
use std::rc::Rc;
use std::cell::RefCell;

use crate::host::{Host, StdHost};
use crate::Value;

/// An environment for symbol bindings.
///
/// Clones share the same binding table, so a `def` through any handle to
/// the root is visible from every child.
#[derive(Clone)]
pub struct Environment {
    bindings: Rc<RefCell<HashMap<Rc<str>, Value>>>,
    parent: Option<Box<Environment>>,
    host: Rc<dyn Host>,
}

impl Environment {
    /// Create a new empty root environment.
    pub fn new(host: Rc<dyn Host>) -> Self {
        Self {
            bindings: Rc::new(RefCell::new(HashMap::new())),
            parent: None,
            host,
        }
    }

    /// Create a root environment with all builtins, printing to stdout.
    pub fn with_builtins() -> Self {
        crate::new_root_environment(Rc::new(StdHost))
    }

    /// Create a child environment.
    pub fn child(&self) -> Self {
        Self {
            bindings: Rc::new(RefCell::new(HashMap::new())),
            parent: Some(Box::new(self.clone())),
            host: self.host.clone(),
        }
    }

    /// A copy of this scope's own bindings with `parent` as the new parent.
    pub fn reparented(&self, parent: &Environment) -> Self {
        Self {
            bindings: Rc::new(RefCell::new(self.bindings.borrow().clone())),
            parent: Some(Box::new(parent.clone())),
            host: self.host.clone(),
        }
    }

    /// A copy of this scope's own bindings with no parent.
    pub fn detached(&self) -> Self {
        Self {
            bindings: Rc::new(RefCell::new(self.bindings.borrow().clone())),
            parent: None,
            host: self.host.clone(),
        }
    }

    /// Define a symbol in the current scope.
    pub fn define(&self, name: impl Into<Rc<str>>, value: Value) {
        self.bindings.borrow_mut().insert(name.into(), value);
    }

    /// Define a symbol in the outermost scope.
    pub fn define_global(&self, name: impl Into<Rc<str>>, value: Value) {
        self.root().define(name, value);
    }

    /// Look up a symbol.
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.borrow().get(name) {
            return Some(value.clone());
        }
        if let Some(parent) = &self.parent {
            return parent.get(name);
        }
        None
    }

    /// The environment at the end of the parent chain.
    pub fn root(&self) -> &Environment {
        let mut env = self;
        while let Some(parent) = &env.parent {
            env = &**parent;
        }
        env
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    pub fn host(&self) -> &dyn Host {
        self.host.as_ref()
    }

    /// Every name visible from this scope, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names = BTreeSet::new();
        let mut env = Some(self);
        while let Some(scope) = env {
            names.extend(scope.bindings.borrow().keys().map(|k| k.to_string()));
            env = scope.parent.as_deref();
        }
        names.into_iter().collect()
    }
}
