use core::borrow::Borrow;
use core::ops::{Index, IndexMut};

use super::{Error, SortedList};
use crate::Rank;
use crate::comparer::Comparer;

impl<K, V, C> SortedList<K, V, C> {
    /// Returns the entry at position `rank` in key order.
    ///
    /// The rank is zero-based. Returns `None` if `rank` is out of bounds.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_util::SortedList;
    ///
    /// let list = SortedList::from([("a", 10), ("c", 30), ("b", 20)]);
    ///
    /// assert_eq!(list.get_by_rank(1), Some((&"b", &20)));
    /// assert!(list.get_by_rank(3).is_none());
    /// ```
    #[must_use]
    pub fn get_by_rank(&self, rank: usize) -> Option<(&K, &V)> {
        self.raw.get_by_rank(rank)
    }

    /// Returns the key and a mutable reference to the value at position
    /// `rank`.
    ///
    /// The key is shared because mutating it could break the ordering.
    #[must_use]
    pub fn get_by_rank_mut(&mut self, rank: usize) -> Option<(&K, &mut V)> {
        self.raw.get_by_rank_mut(rank)
    }

    /// Returns the zero-based rank of `key`, or `None` if it is absent.
    ///
    /// # Complexity
    ///
    /// O(log n)
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_util::SortedList;
    ///
    /// let list = SortedList::from([(10, "a"), (20, "b")]);
    /// assert_eq!(list.rank_of(&20), Some(1));
    /// assert_eq!(list.rank_of(&15), None);
    /// ```
    #[must_use]
    pub fn rank_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparer<Q>,
    {
        self.raw.search(key).ok()
    }

    /// Returns the rank of the first entry, in key order, whose value equals
    /// `value`.
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn rank_of_value(&self, value: &V) -> Option<usize>
    where
        V: PartialEq,
    {
        self.raw.values().iter().position(|v| v == value)
    }

    /// Replaces the value at `rank`, returning the old value.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::RankOutOfBounds`] if `rank >= len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_util::SortedList;
    ///
    /// let mut list = SortedList::from([(1, "a"), (2, "b")]);
    /// assert_eq!(list.set_by_rank(1, "z"), Ok("b"));
    /// assert!(list.set_by_rank(2, "y").is_err());
    /// ```
    pub fn set_by_rank(&mut self, rank: usize, value: V) -> Result<V, Error> {
        let len = self.raw.len();
        let (_, slot) = self.raw.get_by_rank_mut(rank).ok_or(Error::RankOutOfBounds { rank, len })?;
        Ok(core::mem::replace(slot, value))
    }

    /// Removes and returns the entry at `rank`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::RankOutOfBounds`] if `rank >= len`.
    ///
    /// # Complexity
    ///
    /// O(n) to shift the later entries.
    pub fn remove_by_rank(&mut self, rank: usize) -> Result<(K, V), Error> {
        let len = self.raw.len();
        if rank >= len {
            return Err(Error::RankOutOfBounds { rank, len });
        }
        Ok(self.raw.remove_at(rank))
    }
}

/// Indexes into the list by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
///
/// # Examples
///
/// ```
/// use wabi_util::{Rank, SortedList};
///
/// let list = SortedList::from([("a", 1), ("b", 2)]);
/// assert_eq!(list[Rank(1)], 2);
/// ```
impl<K, V, C> Index<Rank> for SortedList<K, V, C> {
    type Output = V;

    fn index(&self, rank: Rank) -> &Self::Output {
        self.get_by_rank(rank.0).map(|(_, v)| v).expect("rank out of bounds")
    }
}

/// Mutably indexes into the list by rank.
///
/// # Panics
///
/// Panics if `rank` is out of bounds.
impl<K, V, C> IndexMut<Rank> for SortedList<K, V, C> {
    fn index_mut(&mut self, rank: Rank) -> &mut Self::Output {
        self.get_by_rank_mut(rank.0).map(|(_, v)| v).expect("rank out of bounds")
    }
}
