//! Lexical scopes captured by user functions.
//!
//! The evaluator owns the scope chain and decides when to enclose a new
//! scope (function calls, blocks). This module only stores bindings. A
//! `FunctionValue` keeps a `LocalScope<Environment>` handle to the scope it
//! was created in, so later definitions in that scope stay visible to it.

use rustc_hash::FxHashMap;
use std::cell::RefCell;
use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

use crate::value::Value;

/// Error returned by `Environment::assign`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignError {
    /// No scope in the chain binds the name.
    Undefined,
}

/// Single-threaded shared handle to a scope.
///
/// Wraps `Rc<RefCell<T>>`; the only way to create one is `LocalScope::new`.
/// Not thread-safe, matching the interpreter, which runs on one thread.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> std::cell::Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> std::cell::RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Whether both handles refer to the same scope.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

// Only the address: scopes routinely contain functions that point back at them.
impl<T> fmt::Debug for LocalScope<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LocalScope({:p})", Rc::as_ptr(&self.0))
    }
}

impl<T: Default> Default for LocalScope<T> {
    fn default() -> Self {
        LocalScope::new(T::default())
    }
}

impl<T> Deref for LocalScope<T> {
    type Target = RefCell<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// One scope: its own bindings plus an optional enclosing scope.
#[derive(Clone, Debug, Default)]
pub struct Environment {
    bindings: FxHashMap<String, Value>,
    outer: Option<LocalScope<Environment>>,
}

impl Environment {
    /// Create a root scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scope nested inside `outer`.
    pub fn enclosed(outer: LocalScope<Environment>) -> Self {
        Environment {
            bindings: FxHashMap::default(),
            outer: Some(outer),
        }
    }

    pub fn outer(&self) -> Option<&LocalScope<Environment>> {
        self.outer.as_ref()
    }

    /// Bind `name` in this scope, shadowing any outer binding.
    ///
    /// Returns the bound value so `fanya x = ...` can evaluate to it.
    pub fn define(&mut self, name: impl Into<String>, value: Value) -> Value {
        self.bindings.insert(name.into(), value.clone());
        value
    }

    /// Look `name` up in this scope, then outward.
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.bindings.get(name) {
            return Some(value.clone());
        }
        if let Some(outer) = &self.outer {
            return outer.borrow().get(name);
        }
        None
    }

    /// Update the nearest scope that already binds `name`.
    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), AssignError> {
        if let Some(slot) = self.bindings.get_mut(name) {
            *slot = value;
            return Ok(());
        }
        if let Some(outer) = &self.outer {
            return outer.borrow_mut().assign(name, value);
        }
        Err(AssignError::Undefined)
    }

    /// Whether `name` is bound in this scope itself (outer scopes ignored).
    pub fn has_local(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }
}

#[cfg(test)]
mod tests;
