use std::{
    fmt::{Debug, Display},
    ops::Range,
};

use num::{Bounded, One, Unsigned, Zero};

/// A dense 0-based identifier for vertices and edge slots.
///
/// Graphs address their vertex set by contiguous keys in `[0, |V|)`, so a key
/// doubles as an offset into per-vertex storage. Narrow key types keep
/// pointer-like references compact; `u32` is the usual choice.
///
/// The largest representable value is reserved as the [nil](Key::nil)
/// sentinel ("no vertex", "no edge", "no predecessor"). Containers refuse to
/// grow to a size that would hand out the sentinel as a real key.
pub trait Key:
    Copy
    + std::ops::Add<Output = Self>
    + std::ops::AddAssign
    + std::ops::Sub<Output = Self>
    + std::ops::SubAssign
    + Ord
    + Debug
    + Display
    + Sized
    + Default
    + Unsigned
    + Zero
    + One
    + Bounded
    + 'static
{
    fn new(i: usize) -> Self;
    fn index(self) -> usize;

    /// The reserved sentinel; never a valid key.
    fn nil() -> Self {
        Self::max_value()
    }

    type KeyIterator: Iterator<Item = Self>;
    fn range(self, end: Self) -> Self::KeyIterator;
}

macro_rules! impl_key {
    ($($type:ty)*) => ($(
        impl Key for $type {
            #[inline]
            fn new(i: usize) -> Self {
                debug_assert!(i <= <$type>::MAX as usize);
                i as $type
            }

            #[inline]
            fn index(self) -> usize {
                self as usize
            }

            type KeyIterator = Range<Self>;
            #[inline]
            fn range(self, end: Self) -> Self::KeyIterator {
                self..end
            }
        }
    )*)
}

impl_key!(u16 u32 usize);
