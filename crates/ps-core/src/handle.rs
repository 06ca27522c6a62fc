//! `Handle<T>` — a shared, optionally-null reference to a collaborator.
//!
//! Distribution facades receive their calculator through a `Handle`.  A
//! handle may be null, which lets callers express "no calculator supplied";
//! facades reject such handles at construction time instead of failing on
//! first use.  Handles are read-only: once built, the referenced value is
//! never replaced.

use std::sync::Arc;

/// A shared, optionally-null reference to a value of type `T`.
pub struct Handle<T> {
    inner: Option<Arc<T>>,
}

impl<T> Handle<T> {
    /// Create a non-null handle wrapping `value`.
    pub fn new(value: T) -> Self {
        Self {
            inner: Some(Arc::new(value)),
        }
    }

    /// Create a handle from an existing `Arc`.
    pub fn from_arc(arc: Arc<T>) -> Self {
        Self { inner: Some(arc) }
    }

    /// Create a null (empty) handle.
    pub fn null() -> Self {
        Self { inner: None }
    }

    /// Return `true` if the handle is null (contains no value).
    pub fn is_empty(&self) -> bool {
        self.inner.is_none()
    }

    /// Return a reference to the inner `Arc<T>`, or `None` if this handle is
    /// null.
    pub fn as_arc(&self) -> Option<&Arc<T>> {
        self.inner.as_ref()
    }

    /// Consume the handle, yielding the shared value if there is one.
    pub fn into_arc(self) -> Option<Arc<T>> {
        self.inner
    }

    /// Attempt to borrow the contained value.
    ///
    /// Returns `None` if the handle is null.
    pub fn get(&self) -> Option<&T> {
        self.inner.as_deref()
    }

    /// Return `true` if both handles point at the same allocation.
    ///
    /// Two null handles are considered equal.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.inner, &other.inner) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T> Clone for Handle<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Default for Handle<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T> From<Arc<T>> for Handle<T> {
    fn from(arc: Arc<T>) -> Self {
        Self::from_arc(arc)
    }
}

impl<T> From<Option<Arc<T>>> for Handle<T> {
    fn from(inner: Option<Arc<T>>) -> Self {
        Self { inner }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.inner {
            Some(v) => write!(f, "Handle({:?})", v),
            None => write!(f, "Handle(null)"),
        }
    }
}
