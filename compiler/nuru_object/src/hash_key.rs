//! Dict key identity.
//!
//! A `HashKey` is `(kind, digest)`. The kind is part of the identity, so the
//! integer `1`, the float `1.0` and the string `"1"` are three different
//! keys even though all three render as `1`.
//!
//! | Kind | Digest |
//! |---|---|
//! | Integer | the two's-complement bit pattern |
//! | Boolean | `1` for `kweli`, `0` for `sikweli` |
//! | Float | FNV-1a of the rendered decimal text |
//! | String | FNV-1a of the UTF-8 bytes |
//!
//! Floats hash their text, not their bits: two floats that print the same
//! are the same key (every NaN is one key), while `0` and `-0` are not.

use crate::errors::ObjectError;
use crate::kind::Kind;
use crate::value::{FloatText, Value};

/// FNV-1a offset basis (64-bit).
const FNV_OFFSET_BASIS: u64 = 14_695_981_039_346_656_037;
/// FNV-1a prime (64-bit).
const FNV_PRIME: u64 = 1_099_511_628_211;

/// 64-bit FNV-1a over `bytes`.
fn fnv1a(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, &byte| {
        (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Identity of a value used as a dict key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HashKey {
    pub kind: Kind,
    pub value: u64,
}

impl HashKey {
    #[inline]
    pub const fn new(kind: Kind, value: u64) -> Self {
        HashKey { kind, value }
    }
}

/// Payloads that can serve as dict keys.
///
/// Implemented only for the payloads of `Integer`, `Float`, `Boolean` and
/// `String`; every other kind is rejected by `Value::hash_key`.
pub trait Hashable {
    fn hash_key(&self) -> HashKey;
}

impl Hashable for i64 {
    #[inline]
    fn hash_key(&self) -> HashKey {
        HashKey::new(Kind::Integer, u64::from_ne_bytes(self.to_ne_bytes()))
    }
}

impl Hashable for bool {
    #[inline]
    fn hash_key(&self) -> HashKey {
        HashKey::new(Kind::Boolean, u64::from(*self))
    }
}

impl Hashable for f64 {
    fn hash_key(&self) -> HashKey {
        let text = FloatText(*self).to_string();
        HashKey::new(Kind::Float, fnv1a(text.as_bytes()))
    }
}

impl Hashable for str {
    fn hash_key(&self) -> HashKey {
        HashKey::new(Kind::String, fnv1a(self.as_bytes()))
    }
}

impl Value {
    /// Compute this value's dict key identity.
    ///
    /// Fails with `ObjectError::NotHashable` for every kind other than
    /// Integer, Float, Boolean and String.
    pub fn hash_key(&self) -> Result<HashKey, ObjectError> {
        match self {
            Value::Integer(n) => Ok(n.hash_key()),
            Value::Float(x) => Ok(x.hash_key()),
            Value::Boolean(b) => Ok(b.hash_key()),
            Value::String(s) => Ok(s.as_str().hash_key()),
            _ => {
                let kind = self.kind();
                tracing::debug!(%kind, "rejected unhashable dict key");
                Err(ObjectError::NotHashable { kind })
            }
        }
    }
}
