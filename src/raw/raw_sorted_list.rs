use alloc::vec::Vec;
use core::borrow::Borrow;

use crate::comparer::Comparer;

/// The sorted-array storage backing `SortedList`.
///
/// Keys and values are kept in two parallel vectors so that key searches only
/// touch the key array.
#[derive(Clone)]
pub(crate) struct RawSortedList<K, V, C> {
    /// Keys, sorted by `comparer`, no duplicates.
    keys: Vec<K>,
    /// Values, `values[i]` belongs to `keys[i]`.
    values: Vec<V>,
    comparer: C,
}

impl<K, V, C> RawSortedList<K, V, C> {
    /// Creates a new, empty list.
    pub(crate) const fn new(comparer: C) -> Self {
        Self {
            keys: Vec::new(),
            values: Vec::new(),
            comparer,
        }
    }

    /// Creates a new list with room for `capacity` entries.
    pub(crate) fn with_capacity(capacity: usize, comparer: C) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
            values: Vec::with_capacity(capacity),
            comparer,
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.keys.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Number of entries that fit without reallocating either array.
    pub(crate) fn capacity(&self) -> usize {
        self.keys.capacity().min(self.values.capacity())
    }

    pub(crate) const fn comparer(&self) -> &C {
        &self.comparer
    }

    /// Grows or shrinks both arrays towards `capacity`. The caller guarantees
    /// `capacity >= len`.
    pub(crate) fn set_capacity(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.len(), "capacity below len");
        let current = self.capacity();
        if capacity > current {
            let additional = capacity - self.len();
            self.keys.reserve_exact(additional);
            self.values.reserve_exact(additional);
        } else if capacity < current {
            self.keys.shrink_to(capacity);
            self.values.shrink_to(capacity);
        }
        tracing::trace!(from = current, to = self.capacity(), "sorted list capacity changed");
    }

    pub(crate) fn shrink_to_fit(&mut self) {
        self.keys.shrink_to_fit();
        self.values.shrink_to_fit();
    }

    pub(crate) fn clear(&mut self) {
        self.keys.clear();
        self.values.clear();
    }

    pub(crate) fn keys(&self) -> &[K] {
        &self.keys
    }

    pub(crate) fn values(&self) -> &[V] {
        &self.values
    }

    pub(crate) fn values_mut(&mut self) -> &mut [V] {
        &mut self.values
    }

    /// Returns both arrays, the mutable one being the values.
    pub(crate) fn split_mut(&mut self) -> (&[K], &mut [V]) {
        (&self.keys, &mut self.values)
    }

    pub(crate) fn get_by_rank(&self, rank: usize) -> Option<(&K, &V)> {
        Some((self.keys.get(rank)?, self.values.get(rank)?))
    }

    pub(crate) fn get_by_rank_mut(&mut self, rank: usize) -> Option<(&K, &mut V)> {
        Some((self.keys.get(rank)?, self.values.get_mut(rank)?))
    }

    /// Inserts an entry at `rank`, shifting later entries up by one.
    ///
    /// The caller guarantees that `rank` is the key's sorted position.
    pub(crate) fn insert_at(&mut self, rank: usize, key: K, value: V) {
        if self.keys.len() == self.keys.capacity() {
            tracing::trace!(len = self.keys.len(), "sorted list growing");
        }
        self.keys.insert(rank, key);
        self.values.insert(rank, value);
    }

    /// Removes the entry at `rank`, shifting later entries down by one.
    ///
    /// # Panics
    ///
    /// Panics if `rank >= len`.
    pub(crate) fn remove_at(&mut self, rank: usize) -> (K, V) {
        (self.keys.remove(rank), self.values.remove(rank))
    }

    pub(crate) fn into_parts(self) -> (Vec<K>, Vec<V>) {
        (self.keys, self.values)
    }
}

impl<K, V, C> RawSortedList<K, V, C> {
    /// Binary searches the key array.
    ///
    /// Returns `Ok(rank)` of a matching key, or `Err(rank)` where the key would
    /// have to be inserted to keep the array sorted.
    pub(crate) fn search<Q>(&self, key: &Q) -> Result<usize, usize>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparer<Q>,
    {
        self.keys.binary_search_by(|probe| self.comparer.compare(probe.borrow(), key))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::comparer::{Natural, Reverse};
    use proptest::prelude::*;
    use static_assertions::assert_eq_size;

    // A zero-sized comparer adds nothing to the two arrays.
    assert_eq_size!(RawSortedList<u64, u64, Natural>, [Vec<u64>; 2]);

    impl<K, V, C: Comparer<K>> RawSortedList<K, V, C> {
        /// Panics if the arrays are out of step or the keys are not strictly
        /// increasing under the comparer.
        pub(crate) fn validate_invariants(&self) {
            assert_eq!(self.keys.len(), self.values.len(), "keys and values out of step");
            for pair in self.keys.windows(2) {
                assert_eq!(
                    self.comparer.compare(&pair[0], &pair[1]),
                    core::cmp::Ordering::Less,
                    "keys not strictly increasing"
                );
            }
        }
    }

    fn insert<K, V, C: Comparer<K>>(raw: &mut RawSortedList<K, V, C>, key: K, value: V) -> bool {
        match raw.search(&key) {
            Ok(_) => false,
            Err(rank) => {
                raw.insert_at(rank, key, value);
                true
            }
        }
    }

    #[test]
    fn empty_list() {
        let raw: RawSortedList<i32, i32, Natural> = RawSortedList::new(Natural);
        assert!(raw.is_empty());
        assert_eq!(raw.search(&7), Err(0));
        assert!(raw.get_by_rank(0).is_none());
        raw.validate_invariants();
    }

    #[test]
    fn search_reports_insertion_point() {
        let mut raw = RawSortedList::new(Natural);
        for key in [10, 30, 20] {
            assert!(insert(&mut raw, key, key * 2));
        }
        assert_eq!(raw.search(&20), Ok(1));
        assert_eq!(raw.search(&25), Err(2));
        assert_eq!(raw.search(&5), Err(0));
        assert_eq!(raw.search(&99), Err(3));
        assert!(!insert(&mut raw, 20, 0));
        assert_eq!(raw.get_by_rank(1), Some((&20, &40)));
        raw.validate_invariants();
    }

    #[test]
    fn reverse_comparer_orders_descending() {
        let mut raw = RawSortedList::new(Reverse);
        for key in 0..5 {
            insert(&mut raw, key, ());
        }
        assert_eq!(raw.keys(), &[4, 3, 2, 1, 0]);
        raw.validate_invariants();
    }

    #[test]
    fn set_capacity_grows_and_shrinks() {
        let mut raw: RawSortedList<u8, u8, Natural> = RawSortedList::with_capacity(4, Natural);
        raw.set_capacity(64);
        assert!(raw.capacity() >= 64);
        insert(&mut raw, 1, 1);
        raw.set_capacity(1);
        assert!(raw.capacity() >= 1);
        raw.shrink_to_fit();
        assert_eq!(raw.len(), 1);
    }

    proptest! {
        #[test]
        fn inserts_and_removes_keep_order(
            keys in proptest::collection::vec(-500i32..500, 0..300),
            removals in proptest::collection::vec(any::<prop::sample::Index>(), 0..100),
        ) {
            let mut raw = RawSortedList::new(Natural);
            for key in keys {
                insert(&mut raw, key, -key);
                raw.validate_invariants();
            }
            for index in removals {
                if raw.is_empty() {
                    break;
                }
                let rank = index.index(raw.len());
                let (key, value) = raw.remove_at(rank);
                prop_assert_eq!(value, -key);
                prop_assert!(raw.search(&key).is_err());
                raw.validate_invariants();
            }
        }
    }
}
