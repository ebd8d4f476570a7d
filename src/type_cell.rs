use std::{fmt, marker::PhantomData, ops::Deref};

/// A value tagged with a marker type, so that element ids, listener ids and
/// percentages can't be mixed up even though they share a representation.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TypeCell<M, T> {
    value:    T,
    _phantom: PhantomData<M>,
}

impl<M, T> TypeCell<M, T> {
    #[inline]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            _phantom: PhantomData,
        }
    }

    #[inline]
    pub const fn get(&self) -> &T { &self.value }
}

impl<M, T> Deref for TypeCell<M, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &Self::Target { &self.value }
}

impl<M, T> From<T> for TypeCell<M, T> {
    #[inline]
    fn from(value: T) -> Self { Self::new(value) }
}

impl<M, T: fmt::Display> fmt::Display for TypeCell<M, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { self.value.fmt(f) }
}
