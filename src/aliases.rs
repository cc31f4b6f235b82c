//! Type aliases used across the crate and by downstream sequence types.

use vec64::Vec64;

use crate::structs::array_view::ArrayView;

/// Absolute element offset into a backing buffer.
pub type Offset = usize;

/// Logical element count of a window or buffer.
pub type Length = usize;

/// The standard view instantiation: by-value elements in a `Vec64<T>` buffer,
/// driven by [`ValueStore`](crate::ValueStore). This is what
/// [`ArrayView::map`] returns and what the slice/vector constructors build.
pub type ValueView<T> = ArrayView<T, Vec64<T>>;
