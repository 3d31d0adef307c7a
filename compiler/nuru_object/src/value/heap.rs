//! Shared heap storage for value payloads.
//!
//! `Heap<T>` wraps `Rc<T>` and has a constructor visible only inside the
//! `value` module, so every heap-backed `Value` is built through a `Value::`
//! factory method. Values are single-threaded: functions hold `Rc` handles to
//! their scopes, so nothing in a `Value` ever crosses a thread.

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// Reference-counted, immutable payload of a `Value`.
#[repr(transparent)]
pub struct Heap<T: ?Sized>(Rc<T>);

impl<T> Heap<T> {
    /// Allocate a new payload. Only `Value::` factories call this.
    #[inline]
    pub(super) fn new(value: T) -> Self {
        Heap(Rc::new(value))
    }
}

impl<T: ?Sized> Heap<T> {
    /// Whether both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(this: &Self, other: &Self) -> bool {
        Rc::ptr_eq(&this.0, &other.0)
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Rc::clone(&self.0))
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

// Structural even when both sides share an allocation, so `[NaN]` never
// equals itself.
impl<T: ?Sized + PartialEq> PartialEq for Heap<T> {
    fn eq(&self, other: &Self) -> bool {
        *self.0 == *other.0
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}
