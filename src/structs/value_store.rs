//! # **ValueStore Module** - *General by-value element storage*
//!
//! The default storage representation: elements held by value in a
//! [`Vec64<T>`], cloned in and out one at a time. It is the representation
//! [`ArrayView::map`] targets and the one behind the [`view!`](crate::view)
//! macro and the slice/vector constructors.
//!
//! One unit struct implements all three collaborator roles, so
//! [`Backend::values`] shares a single allocation across the trio.

use vec64::Vec64;

use crate::enums::error::ViewError;
use crate::structs::array_view::ArrayView;
use crate::structs::backend::Backend;
use crate::structs::shared_buffer::SharedBuffer;
use crate::traits::storage::{BufferCopier, ElementAccessor, ViewFactory};
use crate::{Length, Offset, ValueView};

/// # ValueStore
///
/// Storage strategy for by-value elements in a `Vec64<T>` buffer. Stateless;
/// one value serves as factory, copier, and accessor.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ValueStore;

impl<T: Clone + 'static> ViewFactory<T, Vec64<T>> for ValueStore {
    fn create(
        &self,
        buffer: SharedBuffer<Vec64<T>>,
        start: Offset,
        end: Offset,
    ) -> Result<ArrayView<T, Vec64<T>>, ViewError> {
        ArrayView::new(buffer, start, end, Backend::values())
    }
}

impl<T: Clone> BufferCopier<Vec64<T>> for ValueStore {
    fn copy(&self, buffer: &Vec64<T>, from: Offset, until: Offset) -> Vec64<T> {
        let mut out = Vec64::with_capacity(until - from);
        out.extend_from_slice(&buffer.as_slice()[from..until]);
        out
    }
}

impl<T: Clone> ElementAccessor<T, Vec64<T>> for ValueStore {
    #[inline]
    fn abs_get(&self, buffer: &Vec64<T>, index: Offset) -> T {
        buffer.as_slice()[index].clone()
    }

    #[inline]
    fn abs_set(&self, buffer: &mut Vec64<T>, index: Offset, value: T) {
        buffer.as_mut_slice()[index] = value;
    }
}

impl<T: Clone + 'static> Backend<T, Vec64<T>> {
    /// The complete value-storage trio.
    #[inline]
    pub fn values() -> Self {
        Backend::shared(ValueStore)
    }
}

impl<T: Clone + 'static> ArrayView<T, Vec64<T>> {
    /// Constructs a value-storage view owning the given vector, windowed
    /// over the whole of it.
    pub fn from_vec64(values: Vec64<T>) -> Self {
        let end = values.len();
        match ArrayView::new(SharedBuffer::new(values), 0, end, Backend::values()) {
            Ok(view) => view,
            // window [0, len) and a complete backend: the constructor
            // cannot reject this
            Err(_) => unreachable!(),
        }
    }

    /// Constructs a value-storage view holding a copy of the slice.
    #[inline]
    pub fn from_slice(values: &[T]) -> Self {
        let mut buf = Vec64::with_capacity(values.len());
        buf.extend_from_slice(values);
        Self::from_vec64(buf)
    }

    /// Constructs a default-filled value-storage view of the given length,
    /// the shape `map_with` builders hand out.
    #[inline]
    pub fn with_len(len: Length) -> Self
    where
        T: Default,
    {
        let mut buf = Vec64::with_capacity(len);
        for _ in 0..len {
            buf.push(T::default());
        }
        Self::from_vec64(buf)
    }
}

impl<T: Clone + 'static> From<Vec64<T>> for ValueView<T> {
    #[inline]
    fn from(values: Vec64<T>) -> Self {
        ArrayView::from_vec64(values)
    }
}

impl<T: Clone + 'static> From<&[T]> for ValueView<T> {
    #[inline]
    fn from(values: &[T]) -> Self {
        ArrayView::from_slice(values)
    }
}

/// Construction from an element iterator, into value storage.
impl<T: Clone + 'static> FromIterator<T> for ValueView<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ArrayView::from_vec64(iter.into_iter().collect())
    }
}
