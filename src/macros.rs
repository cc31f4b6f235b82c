//! Constructor macros.

/// Builds a [`ValueView`](crate::ValueView) from its elements.
///
/// ```rust
/// use geneview::view;
///
/// let v = view![10, 20, 30];
/// assert_eq!(v.len(), 3);
/// assert_eq!(v.get(2).unwrap(), 30);
/// ```
#[macro_export]
macro_rules! view {
    () => {
        $crate::ArrayView::from_slice(&[])
    };
    ($($value:expr),+ $(,)?) => {
        $crate::ArrayView::from_slice(&[$($value),+])
    };
}
