//! # **Backend Module** - *Factory / copier / accessor trio*
//!
//! A [`Backend`] bundles the three collaborator handles a view needs to talk
//! to its storage representation: a [`ViewFactory`] for sibling construction,
//! a [`BufferCopier`] for clone-on-write and deep copies, and an
//! [`ElementAccessor`] for single-element reads and writes.
//!
//! ## Behaviour
//! - Parts stay optional inside the bundle; [`ArrayView::new`] unwraps them
//!   and rejects an incomplete backend with
//!   [`ViewError::NullCollaborator`](crate::ViewError::NullCollaborator).
//!   Once a view is constructed its collaborators are always present.
//! - A single strategy value that implements all three traits can be shared
//!   across the three roles via [`Backend::shared`]; this is how
//!   `Backend::values` hands out the [`ValueStore`](crate::ValueStore) trio
//!   with one allocation.
//!
//! [`ArrayView::new`]: crate::ArrayView::new

use std::rc::Rc;

use crate::enums::error::ViewError;
use crate::traits::storage::{BufferCopier, ElementAccessor, ViewFactory};

/// # Backend
///
/// The storage-representation strategy supplied to a view at construction:
/// the factory, copier, and accessor collaborator handles.
pub struct Backend<T, A> {
    factory: Option<Rc<dyn ViewFactory<T, A>>>,
    copier: Option<Rc<dyn BufferCopier<A>>>,
    accessor: Option<Rc<dyn ElementAccessor<T, A>>>,
}

impl<T, A> Backend<T, A> {
    /// An empty bundle; parts are added with the `with_*` builders.
    #[inline]
    pub fn empty() -> Self {
        Self {
            factory: None,
            copier: None,
            accessor: None,
        }
    }

    /// Builds a complete bundle from one strategy value implementing all
    /// three collaborator roles. The value is allocated once and shared.
    pub fn shared<S>(strategy: S) -> Self
    where
        S: ViewFactory<T, A> + BufferCopier<A> + ElementAccessor<T, A> + 'static,
    {
        let strategy = Rc::new(strategy);
        Self {
            factory: Some(strategy.clone()),
            copier: Some(strategy.clone()),
            accessor: Some(strategy),
        }
    }

    /// Sets the view factory.
    #[inline]
    pub fn with_factory(mut self, factory: impl ViewFactory<T, A> + 'static) -> Self {
        self.factory = Some(Rc::new(factory));
        self
    }

    /// Sets the buffer copier.
    #[inline]
    pub fn with_copier(mut self, copier: impl BufferCopier<A> + 'static) -> Self {
        self.copier = Some(Rc::new(copier));
        self
    }

    /// Sets the element accessor.
    #[inline]
    pub fn with_accessor(mut self, accessor: impl ElementAccessor<T, A> + 'static) -> Self {
        self.accessor = Some(Rc::new(accessor));
        self
    }

    /// Unwraps the trio, naming the first missing part.
    pub(crate) fn into_parts(
        self,
    ) -> Result<
        (
            Rc<dyn ViewFactory<T, A>>,
            Rc<dyn BufferCopier<A>>,
            Rc<dyn ElementAccessor<T, A>>,
        ),
        ViewError,
    > {
        let factory = self.factory.ok_or(ViewError::NullCollaborator {
            collaborator: "view factory",
        })?;
        let copier = self.copier.ok_or(ViewError::NullCollaborator {
            collaborator: "buffer copier",
        })?;
        let accessor = self.accessor.ok_or(ViewError::NullCollaborator {
            collaborator: "element accessor",
        })?;
        Ok((factory, copier, accessor))
    }
}

impl<T, A> Default for Backend<T, A> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

/// Clones the bundle by sharing the collaborator handles.
impl<T, A> Clone for Backend<T, A> {
    fn clone(&self) -> Self {
        Self {
            factory: self.factory.clone(),
            copier: self.copier.clone(),
            accessor: self.accessor.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::structs::value_store::ValueStore;

    #[test]
    fn empty_backend_names_the_factory_first() {
        let backend: Backend<i32, vec64::Vec64<i32>> = Backend::empty();
        assert_eq!(
            backend.into_parts().err().unwrap(),
            ViewError::NullCollaborator {
                collaborator: "view factory"
            }
        );
    }

    #[test]
    fn partial_backend_names_the_missing_part() {
        let backend: Backend<i32, vec64::Vec64<i32>> =
            Backend::empty().with_factory(ValueStore).with_accessor(ValueStore);
        assert_eq!(
            backend.into_parts().err().unwrap(),
            ViewError::NullCollaborator {
                collaborator: "buffer copier"
            }
        );
    }

    #[test]
    fn shared_backend_is_complete() {
        let backend: Backend<i32, vec64::Vec64<i32>> = Backend::shared(ValueStore);
        assert!(backend.into_parts().is_ok());
    }
}
