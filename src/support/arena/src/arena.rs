use crate::{
    Id, Idx,
    iter::{IntoIter, Iter, IterMut},
};
use alloc::vec::Vec;
use core::{
    fmt,
    marker::PhantomData,
    ops::{Index, IndexMut},
};

/// An append-only, index-based arena.
///
/// Values are allocated once and referred to afterwards by a strongly-typed
/// [`Idx<K, V>`]. Allocation order is preserved, so iterating an arena yields
/// values in the order they were declared.
pub struct Arena<K: Id, V> {
    data: Vec<V>,
    phantom: PhantomData<K>,
}

impl<K: Id, V> Arena<K, V> {
    /// Creates a new empty arena.
    ///
    /// # Examples
    ///
    /// ```
    /// # use arena::Arena;
    /// let arena: Arena<u32, i32> = Arena::new();
    /// assert!(arena.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self {
            data: Vec::new(),
            phantom: PhantomData,
        }
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            phantom: PhantomData,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Allocates a value and returns its handle.
    ///
    /// # Panics
    ///
    /// Panics if the arena is full (more than `K::MAX` values).
    ///
    /// # Examples
    ///
    /// ```
    /// use arena::{Arena, Idx};
    ///
    /// let mut arena: Arena<u32, &str> = Arena::new();
    /// let idx: Idx<u32, &str> = arena.alloc("hello");
    /// assert_eq!(arena[idx], "hello");
    /// ```
    #[inline]
    pub fn alloc(&mut self, value: V) -> Idx<K, V> {
        self.try_alloc(value).expect("arena is full")
    }

    /// Fallible version of [`Arena::alloc`].
    #[inline]
    pub fn try_alloc(&mut self, value: V) -> Option<Idx<K, V>> {
        if self.data.len() < K::MAX {
            let raw = K::from_usize(self.data.len());
            self.data.push(value);
            Some(Idx::from_raw(raw))
        } else {
            None
        }
    }

    /// Returns the value for a handle, or `None` if the handle belongs to a
    /// larger arena of the same type.
    #[inline]
    pub fn get(&self, idx: Idx<K, V>) -> Option<&V> {
        self.data.get(idx.raw.into_usize())
    }

    #[inline]
    pub fn get_mut(&mut self, idx: Idx<K, V>) -> Option<&mut V> {
        self.data.get_mut(idx.raw.into_usize())
    }

    /// Returns an iterator over handles and values in allocation order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use arena::Arena;
    /// let mut arena = Arena::<u32, _>::new();
    ///
    /// let first = arena.alloc(20);
    /// let second = arena.alloc(40);
    ///
    /// let mut iter = arena.iter();
    /// assert_eq!(iter.next(), Some((first, &20)));
    /// assert_eq!(iter.next(), Some((second, &40)));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            iter: self.data.iter().enumerate(),
            phantom: PhantomData,
        }
    }

    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            iter: self.data.iter_mut().enumerate(),
            phantom: PhantomData,
        }
    }

    #[inline]
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = Idx<K, V>> + use<K, V> {
        (0..self.data.len()).map(|i| Idx::from_raw(K::from_usize(i)))
    }

    #[inline]
    pub fn values(&self) -> core::slice::Iter<'_, V> {
        self.data.iter()
    }

    #[inline]
    pub fn values_mut(&mut self) -> core::slice::IterMut<'_, V> {
        self.data.iter_mut()
    }
}

impl<K: Id, V> Default for Arena<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Id, V> Index<Idx<K, V>> for Arena<K, V> {
    type Output = V;

    #[inline]
    fn index(&self, idx: Idx<K, V>) -> &Self::Output {
        &self.data[idx.raw.into_usize()]
    }
}

impl<K: Id, V> IndexMut<Idx<K, V>> for Arena<K, V> {
    #[inline]
    fn index_mut(&mut self, idx: Idx<K, V>) -> &mut Self::Output {
        &mut self.data[idx.raw.into_usize()]
    }
}

impl<K: Id, V: Clone> Clone for Arena<K, V> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            phantom: PhantomData,
        }
    }
}

impl<K: Id, V: fmt::Debug> fmt::Debug for Arena<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("len", &self.len())
            .field("data", &self.data)
            .finish()
    }
}

impl<K: Id, V: PartialEq> PartialEq for Arena<K, V> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<K: Id, V: Eq> Eq for Arena<K, V> {}

impl<'a, K: Id, V> IntoIterator for &'a Arena<K, V> {
    type Item = (Idx<K, V>, &'a V);
    type IntoIter = Iter<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K: Id, V> IntoIterator for Arena<K, V> {
    type Item = (Idx<K, V>, V);
    type IntoIter = IntoIter<K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            iter: self.data.into_iter().enumerate(),
            phantom: PhantomData,
        }
    }
}
