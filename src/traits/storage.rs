//! Collaborator traits implemented by every storage representation.
//!
//! A representation is a trio: a [`ViewFactory`] that constructs sibling
//! views over a shared buffer, a [`BufferCopier`] that materialises an
//! independent copy of a buffer range, and an [`ElementAccessor`] that moves
//! single elements in and out of the buffer at absolute offsets. The trio is
//! bundled into a [`Backend`](crate::Backend) and handed to the view at
//! construction; [`ValueStore`](crate::ValueStore) implements all three for
//! general by-value element storage.

use crate::Offset;
use crate::enums::error::ViewError;
use crate::structs::array_view::ArrayView;
use crate::structs::shared_buffer::SharedBuffer;

/// Constructs views of one storage representation over a shared buffer.
pub trait ViewFactory<T, A> {
    /// Builds a view over `buffer[start..end)` that *shares* the given
    /// buffer. Implementations must not copy the buffer; window validation
    /// follows [`ArrayView::new`].
    fn create(
        &self,
        buffer: SharedBuffer<A>,
        start: Offset,
        end: Offset,
    ) -> Result<ArrayView<T, A>, ViewError>;
}

/// Produces an independent copy of a buffer range.
pub trait BufferCopier<A> {
    /// Returns a fresh buffer whose `[0, until - from)` prefix holds the same
    /// elements as `buffer[from..until)`. Capacity and content beyond that
    /// prefix are unspecified.
    fn copy(&self, buffer: &A, from: Offset, until: Offset) -> A;
}

/// Reads and writes single elements at absolute buffer offsets.
///
/// The accessor performs no view-level bounds checks; offset translation and
/// window validation are the view's job. Implementations must still fail fast
/// (panic) on an offset outside the buffer itself, so that a window which
/// overruns its buffer faults on first access instead of corrupting memory.
pub trait ElementAccessor<T, A> {
    /// Reads the element at the absolute offset `index`.
    fn abs_get(&self, buffer: &A, index: Offset) -> T;

    /// Writes the element at the absolute offset `index`.
    fn abs_set(&self, buffer: &mut A, index: Offset, value: T);
}
