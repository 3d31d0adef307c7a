//! Runtime values for the Nuru interpreter.
//!
//! # Factory Enforcement
//!
//! Heap-backed variants hold a `Heap<T>`, whose constructor is private to
//! this module. External code builds them through `Value::` factories:
//!
//! ```text
//! let s = Value::string("habari");                    // OK
//! let xs = Value::array(vec![Value::int(1)]);         // OK
//! let s = Value::String(Heap::new("habari".into()));  // ERROR: Heap::new is pub(super)
//! ```
//!
//! # Immutability
//!
//! Payloads are never mutated after construction, so a value can be shared
//! freely between bindings, containers and concurrent traversals. Iteration
//! state lives in `ValueIter`, not in the value.

mod dict;
mod error_value;
mod function;
mod heap;

use std::fmt;

use nuru_stack::ensure_sufficient_stack;

use crate::errors::ObjectError;
use crate::iter::{Iterable, ValueIter};
use crate::kind::Kind;

pub use dict::{DictPair, DictValue};
pub use error_value::ErrorValue;
pub use function::{BuiltinFn, BuiltinValue, FunctionBody, FunctionValue};
pub use heap::Heap;

/// Runtime value in the Nuru interpreter.
#[derive(Clone)]
pub enum Value {
    // Primitives (inline)
    /// Signed 64-bit whole number (`NAMBA`).
    Integer(i64),
    /// 64-bit binary floating-point number (`DESIMALI`).
    Float(f64),
    /// `kweli` / `sikweli`.
    Boolean(bool),
    /// The single absence marker (`TUPU`).
    Null,

    // Heap types
    /// Immutable text (`NENO`).
    String(Heap<String>),
    /// Ordered, heterogeneous sequence (`ORODHA`).
    Array(Heap<Vec<Value>>),
    /// Unordered map from hashable values to values (`KAMUSI`).
    Dict(Heap<DictValue>),

    // Callables
    /// User function with its captured scope.
    Function(FunctionValue),
    /// Native function from the built-in library.
    Builtin(BuiltinValue),

    // Signals
    /// Unwind the current call and yield the wrapped value.
    Return(Heap<Value>),
    /// Abort evaluation and propagate until surfaced.
    Error(Heap<ErrorValue>),
    /// Skip to the next iteration of the nearest loop.
    Continue,
    /// Terminate the nearest loop.
    Break,
}

// Factory Methods (ONLY way to construct heap values)

impl Value {
    #[inline]
    pub fn int(n: i64) -> Self {
        Value::Integer(n)
    }

    #[inline]
    pub fn float(f: f64) -> Self {
        Value::Float(f)
    }

    #[inline]
    pub fn bool(b: bool) -> Self {
        Value::Boolean(b)
    }

    /// Create a string value.
    ///
    /// ```text
    /// let s = Value::string("habari");
    /// let s2 = Value::string(format!("jina: {name}"));
    /// ```
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(Heap::new(s.into()))
    }

    #[inline]
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Heap::new(items))
    }

    #[inline]
    pub fn dict(dict: DictValue) -> Self {
        Value::Dict(Heap::new(dict))
    }

    /// Build a dict from key/value pairs, failing on the first unhashable key.
    ///
    /// Later pairs replace earlier ones with the same key identity.
    pub fn dict_from_pairs(
        pairs: impl IntoIterator<Item = (Value, Value)>,
    ) -> Result<Self, ObjectError> {
        let mut dict = DictValue::new();
        for (key, value) in pairs {
            dict.insert(key, value)?;
        }
        Ok(Value::dict(dict))
    }

    #[inline]
    pub fn function(func: FunctionValue) -> Self {
        Value::Function(func)
    }

    #[inline]
    pub fn builtin(name: &'static str, func: BuiltinFn) -> Self {
        Value::Builtin(BuiltinValue::new(name, func))
    }

    /// Wrap a value in a `Return` signal.
    #[inline]
    pub fn return_value(v: Value) -> Self {
        Value::Return(Heap::new(v))
    }

    /// Create an `Error` signal carrying `message`.
    #[cold]
    pub fn error(message: impl Into<String>) -> Self {
        Value::Error(Heap::new(ErrorValue::new(message)))
    }
}

// Value Methods

impl Value {
    /// The kind tag of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Integer(_) => Kind::Integer,
            Value::Float(_) => Kind::Float,
            Value::Boolean(_) => Kind::Boolean,
            Value::Null => Kind::Null,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Dict(_) => Kind::Dict,
            Value::Function(_) => Kind::Function,
            Value::Builtin(_) => Kind::Builtin,
            Value::Return(_) => Kind::Return,
            Value::Error(_) => Kind::Error,
            Value::Continue => Kind::Continue,
            Value::Break => Kind::Break,
        }
    }

    /// The rendered text of this value, without terminal styling.
    pub fn inspect(&self) -> String {
        self.to_string()
    }

    /// Condition truthiness: `sikweli` and `null` are false, all else true.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Boolean(false) | Value::Null)
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Whether the evaluator must stop and act on this value.
    #[inline]
    pub fn is_signal(&self) -> bool {
        self.kind().is_signal()
    }

    /// Peel one `Return` layer; used at a call boundary.
    ///
    /// Other values, including `Error`, pass through unchanged.
    pub fn unwrap_return(self) -> Value {
        match self {
            Value::Return(inner) => (*inner).clone(),
            other => other,
        }
    }

    /// Start a traversal of this value.
    ///
    /// Returns `None` for kinds that are not iterable.
    pub fn iter(&self) -> Option<ValueIter> {
        match self {
            Value::String(s) => Some(s.iter_pairs()),
            Value::Array(items) => Some(items.iter_pairs()),
            Value::Dict(dict) => Some(dict.iter_pairs()),
            _ => None,
        }
    }

    /// Like `iter`, but reports non-iterable kinds as an `ObjectError`.
    pub fn try_iter(&self) -> Result<ValueIter, ObjectError> {
        self.iter()
            .ok_or(ObjectError::NotIterable { kind: self.kind() })
    }
}

// Payload access

impl Value {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Only `Float` answers; no promotion from `Integer`.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&DictValue> {
        match self {
            Value::Dict(dict) => Some(dict),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionValue> {
        match self {
            Value::Function(func) => Some(func),
            _ => None,
        }
    }

    pub fn as_builtin(&self) -> Option<&BuiltinValue> {
        match self {
            Value::Builtin(builtin) => Some(builtin),
            _ => None,
        }
    }

    pub fn as_error(&self) -> Option<&ErrorValue> {
        match self {
            Value::Error(err) => Some(err),
            _ => None,
        }
    }
}

/// Float text: shortest round-trip decimal, never exponent form.
///
/// Rust's `Display` for `f64` already has that shape; only the infinities
/// are spelled differently (`+Inf` / `-Inf`). Dict keys hash this text.
pub(crate) struct FloatText(pub f64);

impl fmt::Display for FloatText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let x = self.0;
        if x.is_infinite() {
            f.write_str(if x.is_sign_positive() { "+Inf" } else { "-Inf" })
        } else {
            write!(f, "{x}")
        }
    }
}

// Trait Implementations

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{}", FloatText(*x)),
            Value::Boolean(true) => f.write_str("kweli"),
            Value::Boolean(false) => f.write_str("sikweli"),
            Value::Null => f.write_str("null"),
            Value::String(s) => f.write_str(s),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Dict(dict) => {
                f.write_str("{")?;
                for (i, pair) in dict.pairs().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", pair.key, pair.value)?;
                }
                f.write_str("}")
            }
            Value::Function(func) => write!(f, "{func}"),
            Value::Builtin(_) => f.write_str("builtin function"),
            Value::Return(inner) => write!(f, "{}", &**inner),
            Value::Error(err) => {
                write!(f, "{}{}", crate::render::ERROR_LABEL, err.message())
            }
            Value::Continue => f.write_str("continue"),
            Value::Break => f.write_str("break"),
        })
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "Integer({n})"),
            Value::Float(x) => write!(f, "Float({x:?})"),
            Value::Boolean(b) => write!(f, "Boolean({b})"),
            Value::Null => f.write_str("Null"),
            Value::String(s) => write!(f, "String({:?})", &**s),
            Value::Array(items) => write!(f, "Array({:?})", &**items),
            Value::Dict(dict) => write!(f, "Dict({:?})", &**dict),
            Value::Function(func) => write!(f, "Function({func:?})"),
            Value::Builtin(builtin) => write!(f, "Builtin({})", builtin.name()),
            Value::Return(inner) => write!(f, "Return({:?})", &**inner),
            Value::Error(err) => write!(f, "Error({:?})", err.message()),
            Value::Continue => f.write_str("Continue"),
            Value::Break => f.write_str("Break"),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Null, Value::Null)
            | (Value::Continue, Value::Continue)
            | (Value::Break, Value::Break) => true,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Dict(a), Value::Dict(b)) => a == b,
            (Value::Return(a), Value::Return(b)) => a == b,
            (Value::Error(a), Value::Error(b)) => a == b,
            // Callables compare by identity
            (Value::Function(a), Value::Function(b)) => a.same_as(b),
            (Value::Builtin(a), Value::Builtin(b)) => a.name() == b.name(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests;
