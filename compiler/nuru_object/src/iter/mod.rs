//! Iteration protocol for `kwa` loops.
//!
//! A traversal is a `ValueIter` created from the collection with
//! `Value::iter`. The cursor lives in the iterator, so two loops over the
//! same string, array or dict never disturb each other, and the collection
//! itself stays immutable.
//!
//! Each step yields a `(key, value)` pair:
//!
//! - **String**: `(byte offset, one-character string)`, byte by byte. A byte
//!   of a multi-byte character is yielded on its own as the character with
//!   that code point (`U+0000..=U+00FF`), so non-ASCII text splits.
//! - **Array**: `(index, element)` in storage order.
//! - **Dict**: `(key, value)` in ascending order of the key's rendered text.
//!   The order is computed once, when the iterator is created.
//!
//! The iterator is not reset automatically: once exhausted it keeps
//! returning `None` until `reset()` is called.

use crate::value::{DictPair, DictValue, Heap, Value};

/// Collections that can start a traversal.
pub trait Iterable {
    /// Create an iterator positioned at the first pair.
    fn iter_pairs(&self) -> ValueIter;
}

/// Cursor over the pairs of one collection.
#[derive(Clone, Debug)]
pub enum ValueIter {
    /// Bytes of a string.
    Str { data: Heap<String>, pos: usize },
    /// Elements of an array.
    Array { items: Heap<Vec<Value>>, pos: usize },
    /// Dict entries, pre-sorted by rendered key.
    Dict { entries: Vec<DictPair>, pos: usize },
}

/// Offsets and indices are yielded as `Integer` values.
fn index_value(pos: usize) -> Value {
    Value::int(i64::try_from(pos).unwrap_or(i64::MAX))
}

impl ValueIter {
    /// Advance the cursor and return the next pair, or `None` when the
    /// traversal is exhausted.
    pub fn next_pair(&mut self) -> Option<(Value, Value)> {
        match self {
            ValueIter::Str { data, pos } => {
                let byte = *data.as_bytes().get(*pos)?;
                let offset = index_value(*pos);
                *pos = pos.saturating_add(1);
                Some((offset, Value::string(char::from(byte))))
            }
            ValueIter::Array { items, pos } => {
                let item = items.get(*pos)?.clone();
                let index = index_value(*pos);
                *pos = pos.saturating_add(1);
                Some((index, item))
            }
            ValueIter::Dict { entries, pos } => {
                let pair = entries.get(*pos)?.clone();
                *pos = pos.saturating_add(1);
                Some((pair.key, pair.value))
            }
        }
    }

    /// Rewind to the first pair.
    pub fn reset(&mut self) {
        match self {
            ValueIter::Str { pos, .. }
            | ValueIter::Array { pos, .. }
            | ValueIter::Dict { pos, .. } => *pos = 0,
        }
    }

    /// Number of pairs already yielded in this pass.
    pub fn position(&self) -> usize {
        match self {
            ValueIter::Str { pos, .. }
            | ValueIter::Array { pos, .. }
            | ValueIter::Dict { pos, .. } => *pos,
        }
    }

    /// Number of pairs in a full pass.
    pub fn len(&self) -> usize {
        match self {
            ValueIter::Str { data, .. } => data.len(),
            ValueIter::Array { items, .. } => items.len(),
            ValueIter::Dict { entries, .. } => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Iterator for ValueIter {
    type Item = (Value, Value);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.next_pair()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.len().saturating_sub(self.position());
        (remaining, Some(remaining))
    }
}

impl Iterable for Heap<String> {
    fn iter_pairs(&self) -> ValueIter {
        ValueIter::Str {
            data: self.clone(),
            pos: 0,
        }
    }
}

impl Iterable for Heap<Vec<Value>> {
    fn iter_pairs(&self) -> ValueIter {
        ValueIter::Array {
            items: self.clone(),
            pos: 0,
        }
    }
}

impl Iterable for Heap<DictValue> {
    fn iter_pairs(&self) -> ValueIter {
        let mut keyed: Vec<(String, DictPair)> = self
            .pairs()
            .map(|pair| (pair.key.to_string(), pair.clone()))
            .collect();
        // Keys of different kinds can render identically (`1`, `1.0`, "1").
        // Within one kind, equal text means equal identity, so (text, kind)
        // is a total order over the entries.
        keyed.sort_by(|(a_text, a), (b_text, b)| {
            a_text
                .cmp(b_text)
                .then_with(|| a.key.kind().cmp(&b.key.kind()))
        });
        tracing::trace!(entries = keyed.len(), "dict traversal order fixed");
        ValueIter::Dict {
            entries: keyed.into_iter().map(|(_, pair)| pair).collect(),
            pos: 0,
        }
    }
}
