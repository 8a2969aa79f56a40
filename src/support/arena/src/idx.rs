use crate::Id;
use core::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
};

/// A strongly-typed handle to a value stored in an [`Arena`](crate::Arena).
///
/// The value type is part of the handle's type, so a handle to a global can
/// never be used to look up a function even when both arenas share a key type.
pub struct Idx<K: Id, V> {
    pub(crate) raw: K,
    pub(crate) phantom: PhantomData<fn() -> V>,
}

impl<K: Id, V> Idx<K, V> {
    #[inline]
    pub fn from_raw(raw: K) -> Self {
        Self {
            raw,
            phantom: PhantomData,
        }
    }

    #[inline]
    pub fn into_raw(self) -> K {
        self.raw
    }

    /// Zero-based position of this handle in its arena.
    #[inline]
    pub fn index(self) -> usize {
        self.raw.into_usize()
    }
}

impl<K: Id, V> Clone for Idx<K, V> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: Id, V> Copy for Idx<K, V> {}

impl<K: Id, V> PartialEq for Idx<K, V> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<K: Id, V> Eq for Idx<K, V> {}

impl<K: Id, V> PartialOrd for Idx<K, V> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Id, V> Ord for Idx<K, V> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl<K: Id, V> Hash for Idx<K, V> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.raw.hash(state)
    }
}

impl<K: Id, V> fmt::Debug for Idx<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let type_name = core::any::type_name::<V>();
        let type_name = type_name.rsplit("::").next().unwrap_or(type_name);
        write!(f, "Idx::<{}>({})", type_name, self.raw.into_usize())
    }
}
