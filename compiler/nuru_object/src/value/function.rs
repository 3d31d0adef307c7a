//! Callable values: user functions and native builtins.

use std::fmt;
use std::rc::Rc;

use crate::environment::{Environment, LocalScope};

use super::Value;

/// Opaque body of a user function.
///
/// Owned by the syntax tree. The object model only needs to print it; the
/// evaluator downcasts or otherwise knows how to execute its own node type.
pub trait FunctionBody: fmt::Display + fmt::Debug {}

impl<T: fmt::Display + fmt::Debug> FunctionBody for T {}

/// User function (closure).
///
/// # Captured Scope
/// `env` is the scope that was live when the `unda` expression was
/// evaluated. It is shared, not copied: bindings added to that scope after
/// creation are visible to the function, which is what makes recursive
/// `fanya f = unda(n) { ... f(n - 1) ... }` work.
///
/// The handle is strong, so a function that escapes its defining scope still
/// resolves names there. A function bound inside the scope it captured forms
/// an `Rc` cycle: that scope is never freed, even after every other handle to
/// it is dropped.
#[derive(Clone)]
pub struct FunctionValue {
    params: Rc<[String]>,
    body: Rc<dyn FunctionBody>,
    env: LocalScope<Environment>,
}

impl FunctionValue {
    /// Create a function value.
    ///
    /// # Arguments
    /// * `params` - Parameter names, in declaration order
    /// * `body` - The block statement, rendered verbatim by `Display`
    /// * `env` - The defining scope
    pub fn new(
        params: Vec<String>,
        body: Rc<dyn FunctionBody>,
        env: LocalScope<Environment>,
    ) -> Self {
        FunctionValue {
            params: params.into(),
            body,
            env,
        }
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    pub fn body(&self) -> &Rc<dyn FunctionBody> {
        &self.body
    }

    /// The captured scope. Calls enclose a fresh scope around this one.
    pub fn env(&self) -> &LocalScope<Environment> {
        &self.env
    }

    /// Identity comparison: two function values are the same function when
    /// they share a body and a captured scope.
    pub fn same_as(&self, other: &FunctionValue) -> bool {
        Rc::ptr_eq(&self.body, &other.body) && self.env.ptr_eq(&other.env)
    }
}

impl fmt::Display for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unda({}) {{\n{}\n}}", self.params.join(", "), self.body)
    }
}

// The captured scope is left out: it usually contains this very function.
impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionValue")
            .field("params", &self.params)
            .field("body", &self.body)
            .finish_non_exhaustive()
    }
}

/// Native procedure signature: any number of arguments, one result.
///
/// Failures are reported by returning an `Error` value.
pub type BuiltinFn = fn(&[Value]) -> Value;

/// Native function supplied by the built-in library.
#[derive(Clone, Copy)]
pub struct BuiltinValue {
    name: &'static str,
    func: BuiltinFn,
}

impl BuiltinValue {
    pub const fn new(name: &'static str, func: BuiltinFn) -> Self {
        BuiltinValue { name, func }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn call(&self, args: &[Value]) -> Value {
        (self.func)(args)
    }
}

impl fmt::Debug for BuiltinValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BuiltinValue({})", self.name)
    }
}
