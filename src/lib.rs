#![doc = include_str!("../README.md")]

#![cfg_attr(not(test), no_std)]

#![warn(
    anonymous_parameters,
    missing_copy_implementations,
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
    single_use_lifetimes,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unused_extern_crates,
    unused_qualifications,
    variant_size_differences
)]

extern crate alloc;

pub mod compare;
mod error;

use core::{fmt, mem, slice};
use core::iter::FusedIterator;

use alloc::vec::Vec;

use log::{debug, trace};

pub use compare::{
    DoubleKeys, FloatKeys, IntKeys, KeyComparator, PtrKeys, StrKeys, StrKeysIgnoreCase, UintKeys,
};
pub use error::AllocationError;

/// Slot count used when a map is created with a capacity of `0`.
pub const DEFAULT_CAPACITY: usize = 10;

/// Returned by [`size`] and [`capacity`] when there is no map to query.
pub const INVALID_MAP: isize = -1;

/// A key-value pair stored in a `ScanMap`.
#[derive(Debug, Clone)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// A map stored as a flat vector of entries, searched linearly.
///
/// Key identity is decided by the comparator `C` bound at creation, not by
/// `Eq` or `Hash`, so the same container serves exact or case-insensitive
/// strings, numbers, or reference identity. Every lookup is an O(n) scan.
///
/// The map keeps its own slot count: it starts at the requested capacity and
/// doubles whenever an insertion finds every slot occupied. Growing never
/// panics; it reports [`AllocationError`] and leaves the map untouched.
///
/// Keys and values may be references, in which case the map only stores the
/// references and the referenced data stays owned by the caller.
pub struct ScanMap<K, V, C> {
    entries: Vec<Entry<K, V>>, // occupied slots, `entries.capacity() >= capacity`
    capacity: usize,
    comparator: C,
}

impl<K, V, C> ScanMap<K, V, C> {
    /// Creates an empty map with room for [`DEFAULT_CAPACITY`] entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use scan_map::{ScanMap, StrKeys, DEFAULT_CAPACITY};
    ///
    /// let map = ScanMap::<&str, u32, _>::new(StrKeys)?;
    /// assert_eq!(map.capacity(), DEFAULT_CAPACITY);
    /// # Ok::<(), scan_map::AllocationError>(())
    /// ```
    #[inline]
    pub fn new(comparator: C) -> Result<Self, AllocationError> {
        Self::with_capacity(0, comparator)
    }

    /// Creates an empty map with room for `capacity` entries, using
    /// `comparator` for every key comparison the map will ever make.
    ///
    /// A `capacity` of `0` selects [`DEFAULT_CAPACITY`].
    pub fn with_capacity(capacity: usize, comparator: C) -> Result<Self, AllocationError> {
        let capacity = if capacity == 0 { DEFAULT_CAPACITY } else { capacity };

        let mut entries = Vec::new();
        if let Err(err) = entries.try_reserve_exact(capacity) {
            debug!("scan map: cannot allocate {capacity} slots: {err}");
            return Err(AllocationError::reserve(capacity, err))
        }

        trace!("scan map: allocated {capacity} slots");
        Ok(Self { entries, capacity, comparator })
    }

    /// Returns the number of entries in the map.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map holds no entries.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of slots the map can fill before it has to grow.
    #[inline(always)]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the comparator bound to this map.
    #[inline(always)]
    pub const fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Removes every entry. The capacity is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.entries.clear()
    }

    /// Returns an iterator over the entries in storage order.
    ///
    /// Storage order is insertion order until a removal shifts later entries
    /// down; it carries no other meaning.
    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter { inner: self.entries.iter() }
    }

    /// Grows the slot count to `new_capacity`, or fails leaving it unchanged.
    fn grow_to(&mut self, new_capacity: usize) -> Result<(), AllocationError> {
        let additional = new_capacity - self.entries.len();
        if let Err(err) = self.entries.try_reserve_exact(additional) {
            debug!(
                "scan map: cannot grow from {} to {new_capacity} slots: {err}",
                self.capacity
            );
            return Err(AllocationError::reserve(new_capacity, err))
        }

        trace!("scan map: grew from {} to {new_capacity} slots", self.capacity);
        self.capacity = new_capacity;
        Ok(())
    }
}

impl<K, V, C> ScanMap<K, V, C>
where
    C: KeyComparator<K>,
{
    /// Returns the index of the entry whose key matches `key`.
    #[cfg_attr(feature = "inline-more", inline)]
    fn find(&self, key: &K) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| self.comparator.equals(&entry.key, key))
    }

    /// Associates `value` with `key`.
    ///
    /// If a key comparing equal to `key` is already stored, only its value is
    /// replaced: the stored key is kept, `key` is dropped, and the old value is
    /// returned. Otherwise the pair is appended, doubling the capacity first
    /// if every slot is taken.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError`] if the map is full and cannot grow. The map
    /// is not modified in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use scan_map::{ScanMap, StrKeysIgnoreCase};
    ///
    /// let mut map = ScanMap::with_capacity(2, StrKeysIgnoreCase)?;
    /// assert_eq!(map.insert("lu", "Lu Wang")?, None);
    /// assert_eq!(map.insert("Lu", "Lucy")?, Some("Lu Wang"));
    /// assert_eq!(map.len(), 1);
    /// assert_eq!(map.get(&"lu"), Some(&"Lucy"));
    /// # Ok::<(), scan_map::AllocationError>(())
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn insert(&mut self, key: K, value: V) -> Result<Option<V>, AllocationError> {
        if let Some(idx) = self.find(&key) {
            let old = mem::replace(&mut self.entries[idx].value, value);
            return Ok(Some(old))
        }

        if self.entries.len() == self.capacity {
            let doubled = self
                .capacity
                .checked_mul(2)
                .ok_or(AllocationError::overflow(self.capacity, self.capacity))?;
            self.grow_to(doubled)?
        }

        self.entries.push(Entry { key, value });
        Ok(None)
    }

    /// Returns a reference to the value stored under `key`.
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.find(key).map(|idx| &self.entries[idx].value)
    }

    /// Returns the stored key and its value for `key`.
    ///
    /// The stored key may differ from `key` when the comparator is looser than
    /// `Eq`, e.g. in letter case.
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        self.find(key).map(|idx| {
            let entry = &self.entries[idx];
            (&entry.key, &entry.value)
        })
    }

    /// Returns a mutable reference to the value stored under `key`.
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let idx = self.find(key)?;
        Some(&mut self.entries[idx].value)
    }

    /// Returns `true` if the map holds a value for `key`.
    #[inline]
    pub fn contains_key(&self, key: &K) -> bool {
        self.find(key).is_some()
    }

    /// Removes `key` from the map, returning its value if it was present.
    ///
    /// Entries stored after the removed one shift down by one slot, keeping
    /// their relative order. Removing an absent key changes nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use scan_map::{ScanMap, IntKeys};
    ///
    /// let mut map = ScanMap::new(IntKeys)?;
    /// map.insert(1, 'a')?;
    /// map.insert(2, 'b')?;
    /// assert_eq!(map.remove(&1), Some('a'));
    /// assert_eq!(map.remove(&1), None);
    /// assert_eq!(map.len(), 1);
    /// # Ok::<(), scan_map::AllocationError>(())
    /// ```
    #[cfg_attr(feature = "inline-more", inline)]
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let idx = self.find(key)?;
        let removed = self.entries.remove(idx);
        Some(removed.value)
    }

    /// Makes room for at least `additional` more entries.
    ///
    /// The capacity follows the same doubling schedule as [`insert`], jumping
    /// further only when doubling is not enough.
    ///
    /// # Errors
    ///
    /// Returns [`AllocationError`] if the storage cannot be obtained; the map
    /// is not modified in that case.
    ///
    /// [`insert`]: ScanMap::insert
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), AllocationError> {
        let needed = self
            .entries
            .len()
            .checked_add(additional)
            .ok_or(AllocationError::overflow(self.capacity, additional))?;
        if needed <= self.capacity {
            return Ok(())
        }

        let new_capacity = self
            .capacity
            .checked_mul(2)
            .map_or(needed, |doubled| doubled.max(needed));
        self.grow_to(new_capacity)
    }
}

/// Returns the number of entries in `map`, or [`INVALID_MAP`] if there is no
/// map.
#[inline]
pub fn size<K, V, C>(map: Option<&ScanMap<K, V, C>>) -> isize {
    map.map_or(INVALID_MAP, |map| isize::try_from(map.len()).unwrap_or(isize::MAX))
}

/// Returns the slot count of `map`, or [`INVALID_MAP`] if there is no map.
#[inline]
pub fn capacity<K, V, C>(map: Option<&ScanMap<K, V, C>>) -> isize {
    map.map_or(INVALID_MAP, |map| isize::try_from(map.capacity()).unwrap_or(isize::MAX))
}

/// Borrowing iterator over the entries of a `ScanMap` in storage order.
#[derive(Debug)]
pub struct Iter<'a, K, V> {
    inner: slice::Iter<'a, Entry<K, V>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|entry| (&entry.key, &entry.value))
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|entry| (&entry.key, &entry.value))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    #[inline(always)]
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<'a, K, V, C> IntoIterator for &'a ScanMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, C> Extend<(K, V)> for ScanMap<K, V, C>
where
    C: KeyComparator<K>,
{
    /// # Panics
    ///
    /// Panics if the map cannot grow, as `Vec::extend` does.
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            if let Err(err) = self.insert(key, value) {
                panic!("{err}")
            }
        }
    }
}

impl<K, V, C> Clone for ScanMap<K, V, C>
where
    K: Clone,
    V: Clone,
    C: Clone,
{
    fn clone(&self) -> Self {
        // `Vec::clone` only keeps `len` slots
        let mut entries = Vec::with_capacity(self.capacity);
        entries.extend(self.entries.iter().cloned());
        Self {
            entries,
            capacity: self.capacity,
            comparator: self.comparator.clone(),
        }
    }
}

/// Two maps are equal when they hold the same number of entries and every
/// entry of `self` is found in `other`, under `other`'s comparator, with an
/// equal value. Storage order is ignored.
impl<K, V, C> PartialEq for ScanMap<K, V, C>
where
    V: PartialEq,
    C: KeyComparator<K>,
{
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K, V, C> fmt::Debug for ScanMap<K, V, C>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}
