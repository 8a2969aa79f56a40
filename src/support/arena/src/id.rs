use core::{fmt::Debug, hash::Hash};

/// A trait for the raw key types used by arenas.
///
/// Two arenas with the same value type but different [`Id`] types hand out
/// indices that cannot be mixed up, which is how the IR keeps named types,
/// globals, and functions apart.
pub trait Id: Copy + Ord + Hash + Debug {
    /// The largest position (as a usize) this id type can represent.
    const MAX: usize;

    /// Converts a position into this id type.
    ///
    /// The input is guaranteed to be at most `Self::MAX`.
    fn from_usize(idx: usize) -> Self;

    /// Converts this id back into a position.
    fn into_usize(self) -> usize;
}

impl Id for u32 {
    const MAX: usize = u32::MAX as usize;

    #[inline]
    fn from_usize(idx: usize) -> Self {
        assert!(idx <= <Self as Id>::MAX);
        idx as u32
    }

    #[inline]
    fn into_usize(self) -> usize {
        self as usize
    }
}

impl Id for usize {
    const MAX: usize = usize::MAX;

    #[inline]
    fn from_usize(idx: usize) -> Self {
        idx
    }

    #[inline]
    fn into_usize(self) -> usize {
        self
    }
}
