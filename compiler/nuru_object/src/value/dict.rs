//! Dict payload: an unordered map keyed by `HashKey`.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::errors::ObjectError;
use crate::hash_key::HashKey;

use super::Value;

/// A stored entry. The original key is kept so it can be rendered and
/// yielded during iteration; the map itself is keyed by its identity.
#[derive(Clone, Debug, PartialEq)]
pub struct DictPair {
    pub key: Value,
    pub value: Value,
}

/// Associative container from hashable values to values.
///
/// Iteration order of `pairs()` is unspecified. Ordered traversal goes
/// through `Value::iter`, which sorts by rendered key text.
#[derive(Clone, Default)]
pub struct DictValue {
    pairs: FxHashMap<HashKey, DictPair>,
}

impl DictValue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pair, replacing any entry with the same key identity.
    ///
    /// Returns the previous value for that key. Fails before touching the
    /// map if `key` is not hashable.
    pub fn insert(&mut self, key: Value, value: Value) -> Result<Option<Value>, ObjectError> {
        let hash = key.hash_key()?;
        Ok(self
            .pairs
            .insert(hash, DictPair { key, value })
            .map(|old| old.value))
    }

    /// Look up the value stored under `key`'s identity.
    pub fn get(&self, key: &Value) -> Result<Option<&Value>, ObjectError> {
        let hash = key.hash_key()?;
        Ok(self.pairs.get(&hash).map(|pair| &pair.value))
    }

    pub fn contains_key(&self, key: &Value) -> Result<bool, ObjectError> {
        let hash = key.hash_key()?;
        Ok(self.pairs.contains_key(&hash))
    }

    /// Remove the entry for `key`, returning its value.
    pub fn remove(&mut self, key: &Value) -> Result<Option<Value>, ObjectError> {
        let hash = key.hash_key()?;
        Ok(self.pairs.remove(&hash).map(|pair| pair.value))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Stored pairs in unspecified order.
    pub fn pairs(&self) -> impl Iterator<Item = &DictPair> + '_ {
        self.pairs.values()
    }
}

impl PartialEq for DictValue {
    fn eq(&self, other: &Self) -> bool {
        self.pairs.len() == other.pairs.len()
            && self
                .pairs
                .iter()
                .all(|(hash, pair)| other.pairs.get(hash).is_some_and(|o| o.value == pair.value))
    }
}

impl fmt::Debug for DictValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.pairs.values().map(|pair| (&pair.key, &pair.value)))
            .finish()
    }
}
