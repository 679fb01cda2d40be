//! Key comparison strategies for [`ScanMap`](crate::ScanMap).
//!
//! A comparator decides when two keys are "the same key". Only the
//! [`Ordering::Equal`] verdict carries meaning for the map; the string
//! comparators happen to produce a real lexicographic order, while the
//! numeric and identity comparators report every mismatch as
//! [`Ordering::Less`] and cannot be used for ordered traversal.
//!
//! Any `Fn(&K, &K) -> Ordering` works as a comparator too:
//!
//! ```
//! use scan_map::ScanMap;
//!
//! let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
//! let mut map = ScanMap::new(by_len)?;
//! map.insert("one", 1)?;
//! map.insert("two", 2)?;
//! assert_eq!(map.len(), 1);
//! assert_eq!(map.get(&"six"), Some(&2));
//! # Ok::<(), scan_map::AllocationError>(())
//! ```

use core::borrow::Borrow;
use core::cmp::Ordering;
use core::ptr;

/// Verdict returned by the equality-only comparators when keys differ.
pub const MISMATCH: Ordering = Ordering::Less;

/// Decides key identity for a [`ScanMap`](crate::ScanMap).
///
/// Implementations must be pure: the same pair of keys always yields the same
/// verdict, and `compare(a, b)` is `Equal` exactly when `compare(b, a)` is.
pub trait KeyComparator<K: ?Sized> {
    /// Compares two keys, returning [`Ordering::Equal`] iff they are identical
    /// under this comparator.
    fn compare(&self, a: &K, b: &K) -> Ordering;

    /// Returns `true` if `a` and `b` denote the same key.
    #[inline]
    fn equals(&self, a: &K, b: &K) -> bool {
        self.compare(a, b) == Ordering::Equal
    }
}

impl<K, F> KeyComparator<K> for F
where
    K: ?Sized,
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}

/// Case-sensitive string keys, compared byte by byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StrKeys;

impl<K: AsRef<str> + ?Sized> KeyComparator<K> for StrKeys {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.as_ref().cmp(b.as_ref())
    }
}

/// Case-insensitive string keys.
///
/// Both keys are lower-cased (Unicode `to_lowercase`, character by character)
/// and the lower-cased forms are compared. Lower-casing is streamed, so no
/// copies of the keys are made.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct StrKeysIgnoreCase;

impl<K: AsRef<str> + ?Sized> KeyComparator<K> for StrKeysIgnoreCase {
    fn compare(&self, a: &K, b: &K) -> Ordering {
        let a = a.as_ref().chars().flat_map(char::to_lowercase);
        let b = b.as_ref().chars().flat_map(char::to_lowercase);
        // char order matches UTF-8 byte order
        a.cmp(b)
    }
}

macro_rules! scalar_comparator {
    ($(#[$meta:meta])* $name:ident => $ty:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl<K: Borrow<$ty> + ?Sized> KeyComparator<K> for $name {
            #[inline]
            fn compare(&self, a: &K, b: &K) -> Ordering {
                if Borrow::<$ty>::borrow(a) == Borrow::<$ty>::borrow(b) {
                    Ordering::Equal
                } else {
                    MISMATCH
                }
            }
        }
    };
}

scalar_comparator! {
    /// `i32` keys (owned or borrowed), equal iff the values are equal.
    IntKeys => i32
}

scalar_comparator! {
    /// `u32` keys (owned or borrowed), equal iff the values are equal.
    UintKeys => u32
}

scalar_comparator! {
    /// `f32` keys (owned or borrowed) under IEEE equality: `NaN` matches
    /// nothing and `0.0` matches `-0.0`.
    FloatKeys => f32
}

scalar_comparator! {
    /// `f64` keys (owned or borrowed) under IEEE equality: `NaN` matches
    /// nothing and `0.0` matches `-0.0`.
    DoubleKeys => f64
}

/// Reference keys compared by identity: two keys are equal iff they point to
/// the same storage. The referenced values are never read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PtrKeys;

impl<T: ?Sized> KeyComparator<&T> for PtrKeys {
    #[inline]
    fn compare(&self, a: &&T, b: &&T) -> Ordering {
        if ptr::eq(*a, *b) {
            Ordering::Equal
        } else {
            MISMATCH
        }
    }
}
