//! # **SharedBuffer Module** - *Shared-ownership handle over a backing store*
//!
//! Reference-counted, interior-mutable handle to the contiguous element store
//! behind one family of [`ArrayView`](crate::ArrayView)s.
//!
//! ## Purpose
//! - Lets any number of views window the same store without copying it.
//! - Writes through one view are visible through every sibling holding the
//!   same handle, which is what makes zero-copy `slice` write-through work.
//! - Clone-on-write swaps a view's handle for a fresh one; siblings keep the
//!   old handle, and the store is released when the last handle drops.
//!
//! ## Threading
//! - Deliberately single-executor: the seal flag on the views is a plain
//!   `bool` and the refcount here is non-atomic, so the handle is `!Send` and
//!   `!Sync`. Publish a view family to another executor only after sealing,
//!   and treat the sealed views as immutable inputs.

use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

/// # SharedBuffer
///
/// Shared-ownership, interior-mutable handle to a backing store of
/// representation `A`.
///
/// ## Behaviour
/// - `clone` is O(1): it bumps the reference count and shares the store.
/// - Element access goes through short-lived `borrow`/`borrow_mut` guards;
///   no guard is held across user code.
/// - Identity (`ptr_eq`) and content (`PartialEq`) are distinct notions:
///   two handles can be equal in content while referring to different stores.
pub struct SharedBuffer<A> {
    inner: Rc<RefCell<A>>,
}

impl<A> SharedBuffer<A> {
    /// Wraps a store in a fresh, uniquely owned handle.
    #[inline]
    pub fn new(store: A) -> Self {
        Self {
            inner: Rc::new(RefCell::new(store)),
        }
    }

    /// Immutably borrows the store.
    #[inline]
    pub fn borrow(&self) -> Ref<'_, A> {
        self.inner.borrow()
    }

    /// Mutably borrows the store.
    #[inline]
    pub fn borrow_mut(&self) -> RefMut<'_, A> {
        self.inner.borrow_mut()
    }

    /// Returns `true` if both handles refer to the same store.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Returns `true` if this handle is the unique owner of its store.
    #[inline]
    pub fn is_unique(&self) -> bool {
        Rc::strong_count(&self.inner) == 1
    }

    /// Extracts the store if this handle is the unique owner.
    ///
    /// Zero-copy when unique; otherwise the handle is returned unchanged.
    #[inline]
    pub fn try_unwrap(self) -> Result<A, Self> {
        Rc::try_unwrap(self.inner)
            .map(RefCell::into_inner)
            .map_err(|inner| Self { inner })
    }
}

/// Clones the handle, not the store. Always O(1).
impl<A> Clone for SharedBuffer<A> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<A> From<A> for SharedBuffer<A> {
    #[inline]
    fn from(store: A) -> Self {
        Self::new(store)
    }
}

/// Compare for equality by store contents.
impl<A: PartialEq> PartialEq for SharedBuffer<A> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || *self.borrow() == *other.borrow()
    }
}

impl<A: fmt::Debug> fmt::Debug for SharedBuffer<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedBuffer").field(&*self.borrow()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_shares_the_store() {
        let a = SharedBuffer::new(vec![1, 2, 3]);
        let b = a.clone();
        assert!(a.ptr_eq(&b));
        b.borrow_mut()[0] = 9;
        assert_eq!(a.borrow()[0], 9);
    }

    #[test]
    fn unique_ownership_tracking() {
        let a = SharedBuffer::new(vec![1u8]);
        assert!(a.is_unique());
        let b = a.clone();
        assert!(!a.is_unique());
        drop(b);
        assert!(a.is_unique());
    }

    #[test]
    fn try_unwrap_when_unique() {
        let a = SharedBuffer::new(vec![5, 6]);
        assert_eq!(a.try_unwrap().unwrap(), vec![5, 6]);

        let b = SharedBuffer::new(vec![7]);
        let c = b.clone();
        assert!(b.try_unwrap().is_err());
        assert_eq!(*c.borrow(), vec![7]);
    }

    #[test]
    fn content_equality_across_distinct_stores() {
        let a = SharedBuffer::new(vec![1, 2]);
        let b = SharedBuffer::new(vec![1, 2]);
        assert!(!a.ptr_eq(&b));
        assert_eq!(a, b);
    }
}
