use core::borrow::Borrow;
use core::fmt;

use super::{Error, Iter, SortedList};
use crate::comparer::Comparer;

/// A view of a [`SortedList`] that rejects structural changes.
///
/// Entries cannot be added or removed through the view, but the value of an
/// existing entry can be replaced. Created by [`SortedList::fixed_size`].
///
/// # Examples
///
/// ```
/// use wabi_util::SortedList;
/// use wabi_util::sorted_list::Error;
///
/// let mut list = SortedList::from([("a", 1), ("b", 2)]);
/// {
///     let mut fixed = list.fixed_size();
///     assert_eq!(fixed.add("c", 3), Err(Error::FixedSize));
///     assert_eq!(fixed.remove(&"a"), Err(Error::FixedSize));
///     assert_eq!(fixed.set("a", 10), Ok(1));
///     assert_eq!(fixed.set("z", 26), Err(Error::FixedSize));
/// }
/// assert_eq!(list.len(), 2);
/// assert_eq!(list[&"a"], 10);
/// ```
pub struct FixedSize<'a, K, V, C> {
    list: &'a mut SortedList<K, V, C>,
}

impl<'a, K, V, C> FixedSize<'a, K, V, C> {
    pub(super) fn new(list: &'a mut SortedList<K, V, C>) -> Self {
        FixedSize { list }
    }

    /// Always `true`.
    #[must_use]
    pub const fn is_fixed_size(&self) -> bool {
        true
    }

    /// Returns the number of entries, which cannot change through this view.
    #[must_use]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Returns `true` if the underlying list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// See [`SortedList::get`].
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparer<Q>,
    {
        self.list.get(key)
    }

    /// See [`SortedList::get_mut`]. Replacing a value is not a structural
    /// change, so this is allowed.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparer<Q>,
    {
        self.list.get_mut(key)
    }

    /// See [`SortedList::contains_key`].
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparer<Q>,
    {
        self.list.contains_key(key)
    }

    /// See [`SortedList::get_by_rank`].
    #[must_use]
    pub fn get_by_rank(&self, rank: usize) -> Option<(&K, &V)> {
        self.list.get_by_rank(rank)
    }

    /// See [`SortedList::rank_of`].
    #[must_use]
    pub fn rank_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparer<Q>,
    {
        self.list.rank_of(key)
    }

    /// See [`SortedList::iter`].
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.list.iter()
    }

    /// Replaces the value of an existing key, returning the old value.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::FixedSize`] if the key is absent, since storing it
    /// would add an entry.
    pub fn set(&mut self, key: K, value: V) -> Result<V, Error>
    where
        C: Comparer<K>,
    {
        match self.list.get_mut(&key) {
            Some(slot) => Ok(core::mem::replace(slot, value)),
            None => {
                tracing::debug!(len = self.list.len(), "rejected set of absent key on fixed-size list");
                Err(Error::FixedSize)
            }
        }
    }

    /// See [`SortedList::set_by_rank`].
    ///
    /// # Errors
    ///
    /// Fails with [`Error::RankOutOfBounds`] if `rank >= len`.
    pub fn set_by_rank(&mut self, rank: usize, value: V) -> Result<V, Error> {
        self.list.set_by_rank(rank, value)
    }

    /// Always fails: adding an entry is a structural change.
    ///
    /// # Errors
    ///
    /// Always [`Error::FixedSize`].
    pub fn add(&mut self, _key: K, _value: V) -> Result<(), Error> {
        Err(self.reject("add"))
    }

    /// Always fails: removing an entry is a structural change.
    ///
    /// # Errors
    ///
    /// Always [`Error::FixedSize`].
    pub fn remove<Q>(&mut self, _key: &Q) -> Result<V, Error>
    where
        K: Borrow<Q>,
        Q: ?Sized,
    {
        Err(self.reject("remove"))
    }

    /// Always fails: clearing the list is a structural change.
    ///
    /// # Errors
    ///
    /// Always [`Error::FixedSize`].
    pub fn clear(&mut self) -> Result<(), Error> {
        Err(self.reject("clear"))
    }

    fn reject(&self, operation: &'static str) -> Error {
        tracing::debug!(operation, len = self.list.len(), "rejected structural change on fixed-size list");
        Error::FixedSize
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for FixedSize<'_, K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FixedSize").field(&self.list).finish()
    }
}
