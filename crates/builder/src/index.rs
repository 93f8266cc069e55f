use std::fmt::{Debug, Display};
use std::hash::Hash;

/// A node identifier.
///
/// DIMACS files number nodes starting at `1`, so a valid id `u` of a network
/// with `n` nodes satisfies `1 <= u <= n`. The trait is implemented for the
/// unsigned integer types that are commonly used to address nodes.
pub trait Idx:
    Copy
    + std::ops::Add<Output = Self>
    + std::ops::Sub<Output = Self>
    + Ord
    + Hash
    + Debug
    + Display
    + Send
    + Sync
    + Sized
    + 'static
{
    fn new(idx: usize) -> Self;

    fn index(self) -> usize;

    /// Same as [`Idx::new`] but fails instead of panicking if the value does
    /// not fit into the index type.
    fn try_new(idx: usize) -> Option<Self>;
}

macro_rules! impl_idx {
    ($TYPE:ty) => {
        impl Idx for $TYPE {
            #[inline]
            fn new(idx: usize) -> Self {
                assert!(idx <= <$TYPE>::MAX as usize);
                idx as $TYPE
            }

            #[inline]
            fn index(self) -> usize {
                self as usize
            }

            #[inline]
            fn try_new(idx: usize) -> Option<Self> {
                <$TYPE>::try_from(idx).ok()
            }
        }
    };
}

impl_idx!(u32);
impl_idx!(u64);
impl_idx!(usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips() {
        assert_eq!(u32::new(42).index(), 42);
        assert_eq!(usize::new(7).index(), 7);
    }

    #[test]
    fn try_new_rejects_overflow() {
        assert_eq!(u32::try_new(7), Some(7));
        assert_eq!(u32::try_new(u32::MAX as usize + 1), None);
    }
}
