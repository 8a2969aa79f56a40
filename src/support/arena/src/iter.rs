use crate::{Id, Idx};
use core::{
    iter::{Enumerate, FusedIterator},
    marker::PhantomData,
    slice,
};

macro_rules! indexed_iterator_impls {
    ($ty:ty, type Item = $item_ty:ty;) => {
        impl<'a, K: Id, V> Iterator for $ty {
            type Item = $item_ty;

            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                self.iter
                    .next()
                    .map(|(i, value)| (Idx::from_raw(K::from_usize(i)), value))
            }

            #[inline]
            fn size_hint(&self) -> (usize, Option<usize>) {
                self.iter.size_hint()
            }
        }

        impl<'a, K: Id, V> DoubleEndedIterator for $ty {
            #[inline]
            fn next_back(&mut self) -> Option<Self::Item> {
                self.iter
                    .next_back()
                    .map(|(i, value)| (Idx::from_raw(K::from_usize(i)), value))
            }
        }

        impl<'a, K: Id, V> ExactSizeIterator for $ty {}

        impl<'a, K: Id, V> FusedIterator for $ty {}
    };
}

pub struct Iter<'a, K: Id, V> {
    pub(crate) iter: Enumerate<slice::Iter<'a, V>>,
    pub(crate) phantom: PhantomData<K>,
}

indexed_iterator_impls! {
    Iter<'a, K, V>,
    type Item = (Idx<K, V>, &'a V);
}

pub struct IterMut<'a, K: Id, V> {
    pub(crate) iter: Enumerate<slice::IterMut<'a, V>>,
    pub(crate) phantom: PhantomData<K>,
}

indexed_iterator_impls! {
    IterMut<'a, K, V>,
    type Item = (Idx<K, V>, &'a mut V);
}

pub struct IntoIter<K: Id, V> {
    pub(crate) iter: Enumerate<alloc::vec::IntoIter<V>>,
    pub(crate) phantom: PhantomData<K>,
}

impl<K: Id, V> Iterator for IntoIter<K, V> {
    type Item = (Idx<K, V>, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter
            .next()
            .map(|(i, value)| (Idx::from_raw(K::from_usize(i)), value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<K: Id, V> ExactSizeIterator for IntoIter<K, V> {}
