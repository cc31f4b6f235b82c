//! # **ArrayView Module** - *Bounded, copy-on-write window over a shared buffer*
//!
//! `ArrayView` is a bounded, sliceable window `[start .. end)` into a buffer
//! shared by a whole family of views. It is the storage substrate that
//! chromosome, gene-array, and population sequence types are built on.
//!
//! ## Purpose
//! - Length-relative, bounds-checked element access over a subrange of a
//!   buffer, without copying it.
//! - Zero-copy slicing: a sub-view shares the parent's buffer, and writes
//!   through the sub-view are visible through the parent.
//! - Seal-based snapshots: [`seal`](ArrayView::seal) freezes the current
//!   buffer contents, and the first mutation through a frozen handle pays a
//!   one-shot buffer duplication instead of disturbing the snapshot.
//!
//! ## Behaviour
//! - All indices on the public surface are **relative** to the window; the
//!   view translates to absolute offsets before delegating to its accessor.
//! - The window is fixed for the view's lifetime. Slicing produces a new
//!   view; it never retargets an existing one.
//! - Only `buffer` and `sealed` ever change after construction, and only
//!   through the clone-on-write step.
//! - Storage is pluggable: the view drives its buffer exclusively through the
//!   [`Backend`] trio handed to it at construction, so value storage and any
//!   specialised representation share this one type.
//!
//! ## Threading
//! - Single-executor by design: the seal flag is a plain `bool` and the
//!   buffer handle is non-atomic. Seal before publishing a view to another
//!   executor and treat the sealed view as an immutable input.

use std::fmt::{self, Debug, Display, Formatter};
use std::rc::Rc;

use vec64::Vec64;

use crate::enums::error::ViewError;
use crate::structs::backend::Backend;
use crate::structs::shared_buffer::SharedBuffer;
use crate::traits::storage::{BufferCopier, ElementAccessor, ViewFactory};

/// Element cap for `Display` previews.
pub const MAX_PREVIEW: usize = 12;

/// # ArrayView
///
/// Bounded, copy-on-write window `[start .. end)` over a [`SharedBuffer`].
///
/// ## Fields
/// - `buffer`: shared handle to the backing store; siblings created by
///   [`slice`](Self::slice) and [`seal`](Self::seal) hold the same handle.
/// - `start` / `end`: absolute window bounds into the buffer, `end >= start`.
/// - `sealed`: when set, the next mutation through this view first replaces
///   `buffer` with an independent copy of `[0, end)` and clears the flag.
/// - factory / copier / accessor: the storage collaborators, fixed for the
///   view's lifetime and always present after construction.
///
/// ## Example
/// ```rust
/// use geneview::ArrayView;
///
/// let mut v = ArrayView::from_slice(&[10, 20, 30, 40, 50]);
/// let mut w = v.slice(1, 4).unwrap();
/// w.set(0, 99).unwrap();
///
/// assert_eq!(v.get(1).unwrap(), 99); // writes through the slice
///
/// let snapshot = v.seal();
/// v.set(0, 7).unwrap(); // v re-homes onto a private copy first
/// assert_eq!(snapshot.get(0).unwrap(), 10);
/// ```
pub struct ArrayView<T, A> {
    buffer: SharedBuffer<A>,
    start: usize,
    end: usize,
    sealed: bool,
    factory: Rc<dyn ViewFactory<T, A>>,
    copier: Rc<dyn BufferCopier<A>>,
    accessor: Rc<dyn ElementAccessor<T, A>>,
}

impl<T, A> ArrayView<T, A> {
    /// Constructs a view over `buffer[start..end)` driven by the given
    /// storage backend.
    ///
    /// The window is validated as a range (`end >= start`) but deliberately
    /// not against the buffer length: a window that overruns its buffer is
    /// representable and faults on first access through the storage's own
    /// bounds discipline.
    ///
    /// # Errors
    /// - [`ViewError::InvalidRange`] when `end < start`.
    /// - [`ViewError::NullCollaborator`] when the backend is missing a part.
    pub fn new(
        buffer: SharedBuffer<A>,
        start: usize,
        end: usize,
        backend: Backend<T, A>,
    ) -> Result<Self, ViewError> {
        if end < start {
            return Err(ViewError::InvalidRange { start, end });
        }
        let (factory, copier, accessor) = backend.into_parts()?;
        Ok(Self {
            buffer,
            start,
            end,
            sealed: false,
            factory,
            copier,
            accessor,
        })
    }

    /// Returns the number of elements in the window.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns true if the window is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Absolute inclusive start offset of the window.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Absolute exclusive end offset of the window.
    #[inline]
    pub fn end(&self) -> usize {
        self.end
    }

    /// Returns true if the next mutation through this view will duplicate
    /// the buffer first.
    #[inline]
    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Returns true if both views window the same underlying buffer.
    #[inline]
    pub fn shares_buffer(&self, other: &Self) -> bool {
        self.store().ptr_eq(other.store())
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    /// [`ViewError::IndexOutOfRange`] when `index >= len()`.
    #[inline]
    pub fn get(&self, index: usize) -> Result<T, ViewError> {
        self.check_index(index)?;
        Ok(self.get_unchecked(index))
    }

    /// Replaces the element at `index`, duplicating the buffer first if this
    /// view is sealed.
    ///
    /// # Errors
    /// [`ViewError::IndexOutOfRange`] when `index >= len()`.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) -> Result<(), ViewError> {
        self.check_index(index)?;
        self.set_unchecked(index, value);
        Ok(())
    }

    /// Returns the element at `index` without checking it against the
    /// window. The caller guarantees `index < len()`; a violation faults in
    /// the storage rather than being reported as [`ViewError`].
    #[inline]
    pub fn get_unchecked(&self, index: usize) -> T {
        self.accessor.abs_get(&self.buffer.borrow(), self.start + index)
    }

    /// Replaces the element at `index` without checking it against the
    /// window. Still honors clone-on-write. The caller guarantees
    /// `index < len()`.
    #[inline]
    pub fn set_unchecked(&mut self, index: usize, value: T) {
        self.clone_if_sealed();
        self.accessor
            .abs_set(&mut self.buffer.borrow_mut(), self.start + index, value);
    }

    /// Returns a sub-view over `[from, until)` of this window.
    ///
    /// The sub-view shares this view's buffer: writes through it are visible
    /// through the parent, subject to clone-on-write. A sealed parent hands
    /// its seal on to the sub-view, so a window carved from a snapshot pays
    /// its own one-shot copy on first write instead of disturbing the
    /// snapshot.
    ///
    /// Bounds are delegated: the constructor rejects `until < from`, and a
    /// window beyond `len()` faults on first access.
    ///
    /// # Errors
    /// [`ViewError::InvalidRange`] when `until < from`.
    pub fn slice(&self, from: usize, until: usize) -> Result<Self, ViewError> {
        let mut sub =
            self.factory
                .create(self.buffer.clone(), from + self.start, until + self.start)?;
        sub.sealed = self.sealed;
        Ok(sub)
    }

    /// Shorthand for `slice(from, len())`.
    #[inline]
    pub fn slice_from(&self, from: usize) -> Result<Self, ViewError> {
        self.slice(from, self.len())
    }

    /// Exchanges `self[from..until)` with `other[other_from..other_from + (until - from))`.
    ///
    /// Both views run their clone-on-write check before the first write. The
    /// exchange walks the range from the high index down to the low one;
    /// that order is part of the contract and is observable exactly when
    /// both views share one buffer and the two windows overlap. Swapping a
    /// full window against an identical alias of itself is a no-op.
    ///
    /// # Errors
    /// [`ViewError::IndexOutOfRange`] when either window is reversed or
    /// falls outside its view.
    pub fn swap(
        &mut self,
        from: usize,
        until: usize,
        other: &mut Self,
        other_from: usize,
    ) -> Result<(), ViewError> {
        self.check_range(from, until)?;
        other.check_range(other_from, other_from + (until - from))?;
        self.clone_if_sealed();
        other.clone_if_sealed();

        let mut i = until - from;
        while i > 0 {
            i -= 1;
            let mine = self.get_unchecked(from + i);
            let theirs = other.get_unchecked(other_from + i);
            self.set_unchecked(from + i, theirs);
            other.set_unchecked(other_from + i, mine);
        }
        Ok(())
    }

    /// Produces an independent view of the same length over value storage;
    /// element `i` of the result is `f(self.get_unchecked(i))`.
    ///
    /// Never mutates `self` and never triggers clone-on-write on it.
    pub fn map<U, F>(&self, mut f: F) -> ArrayView<U, Vec64<U>>
    where
        U: Clone + 'static,
        F: FnMut(T) -> U,
    {
        let mut out = Vec64::with_capacity(self.len());
        for i in 0..self.len() {
            out.push(f(self.get_unchecked(i)));
        }
        ArrayView::from_vec64(out)
    }

    /// As [`map`](Self::map), but the result's representation comes from
    /// `builder`, which receives the requested length and must return an
    /// empty view of exactly that length.
    pub fn map_with<U, B, F, N>(&self, mut f: F, builder: N) -> ArrayView<U, B>
    where
        F: FnMut(T) -> U,
        N: FnOnce(usize) -> ArrayView<U, B>,
    {
        let mut out = builder(self.len());
        assert_eq!(
            out.len(),
            self.len(),
            "map builder returned a view of length {} for a request of {}",
            out.len(),
            self.len()
        );
        for i in 0..self.len() {
            let value = f(self.get_unchecked(i));
            out.set_unchecked(i, value);
        }
        out
    }

    /// Freezes the current buffer contents and returns a writable
    /// continuation over the same buffer and window.
    ///
    /// Both this view and the returned one come out sealed: whichever handle
    /// is mutated first re-homes onto a private copy of the buffer, so the
    /// other keeps observing the frozen contents. Siblings that already
    /// shared the buffer *before* the seal are not covered - each view
    /// checks only its own flag, so a pre-existing writable alias can still
    /// write into the frozen buffer.
    pub fn seal(&mut self) -> Self {
        self.sealed = true;
        Self {
            buffer: self.buffer.clone(),
            start: self.start,
            end: self.end,
            sealed: true,
            factory: Rc::clone(&self.factory),
            copier: Rc::clone(&self.copier),
            accessor: Rc::clone(&self.accessor),
        }
    }

    /// Duplicates the buffer and clears the seal flag if this view is
    /// sealed; otherwise does nothing. Runs at the top of every mutating
    /// entry point.
    ///
    /// The copy spans `[0, end)`, not `[start, end)`, so the view's absolute
    /// offsets keep their meaning on the fresh buffer. Siblings keep the old
    /// buffer.
    pub fn clone_if_sealed(&mut self) {
        if self.sealed {
            let copied = self.copier.copy(&self.buffer.borrow(), 0, self.end);
            self.buffer = SharedBuffer::new(copied);
            self.sealed = false;
        }
    }

    /// Returns a fully independent, unsealed view holding a copy of this
    /// window's contents, re-based to `[0, len())`. Shares nothing with
    /// `self`.
    pub fn copy(&self) -> Self {
        let copied = self.copier.copy(&self.buffer.borrow(), self.start, self.end);
        Self {
            buffer: SharedBuffer::new(copied),
            start: 0,
            end: self.len(),
            sealed: false,
            factory: Rc::clone(&self.factory),
            copier: Rc::clone(&self.copier),
            accessor: Rc::clone(&self.accessor),
        }
    }

    /// Returns an iterator over the window's elements.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        (0..self.len()).map(move |i| self.get_unchecked(i))
    }

    /// Materialises the window's contents as an owned `Vec64<T>`.
    #[inline]
    pub fn to_vec64(&self) -> Vec64<T> {
        self.iter().collect()
    }

    /// Crate-internal handle to the shared buffer, so cooperating storage
    /// code can reach the store without bypassing the seal discipline.
    #[inline]
    pub(crate) fn store(&self) -> &SharedBuffer<A> {
        &self.buffer
    }

    fn check_index(&self, index: usize) -> Result<(), ViewError> {
        if index >= self.len() {
            return Err(ViewError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok(())
    }

    fn check_range(&self, from: usize, until: usize) -> Result<(), ViewError> {
        if from > until {
            return Err(ViewError::IndexOutOfRange {
                index: from,
                len: until,
            });
        }
        if until > self.len() {
            return Err(ViewError::IndexOutOfRange {
                index: until,
                len: self.len(),
            });
        }
        Ok(())
    }
}

/// Clones the handle: the result windows the same buffer, with the seal
/// flag preserved so a clone of a snapshot cannot write into it.
impl<T, A> Clone for ArrayView<T, A> {
    fn clone(&self) -> Self {
        Self {
            buffer: self.buffer.clone(),
            start: self.start,
            end: self.end,
            sealed: self.sealed,
            factory: Rc::clone(&self.factory),
            copier: Rc::clone(&self.copier),
            accessor: Rc::clone(&self.accessor),
        }
    }
}

/// Compare for equality elementwise over the window. Buffer identity, the
/// window offsets, and the seal flag do not participate.
impl<T: PartialEq, A> PartialEq for ArrayView<T, A> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && (0..self.len()).all(|i| self.get_unchecked(i) == other.get_unchecked(i))
    }
}

impl<T: Debug, A> Debug for ArrayView<T, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayView")
            .field("window", &(self.start..self.end))
            .field("sealed", &self.sealed)
            .field("elements", &self.iter().collect::<Vec<T>>())
            .finish()
    }
}

impl<T: Display, A> Display for ArrayView<T, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "ArrayView [{} values{}] [", self.len(), if self.sealed { ", sealed" } else { "" })?;
        for i in 0..self.len().min(MAX_PREVIEW) {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", self.get_unchecked(i))?;
        }
        if self.len() > MAX_PREVIEW {
            write!(f, ", … (+{})", self.len() - MAX_PREVIEW)?;
        }
        write!(f, "]")
    }
}
