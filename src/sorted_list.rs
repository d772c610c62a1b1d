use alloc::vec;
use core::borrow::Borrow;
use core::fmt;
use core::iter::{FusedIterator, Zip};
use core::ops::Index;
use core::slice;

use crate::comparer::{Comparer, Natural};
use crate::raw::RawSortedList;

mod capacity;
mod error;
mod fixed_size;
mod order_statistic;

pub use crate::Rank;
pub use error::Error;
pub use fixed_size::FixedSize;

/// An ordered map stored as a sorted array.
///
/// Keys and their values are kept in two parallel arrays, sorted by a
/// [`Comparer`] chosen when the list is built ([`Natural`] by default, which
/// uses the key's [`Ord`] implementation). Lookups are binary searches. Adding
/// or removing an entry shifts the entries after it, so building a list from
/// keys that arrive in order is the cheap case.
///
/// Because entries are contiguous, every entry also has a [`Rank`]: its
/// zero-based position in key order. Entries can be read, replaced and removed
/// by rank as well as by key.
///
/// It is a logic error for a key to be modified in such a way that its ordering
/// relative to any other key changes while it is in the list. The behavior
/// resulting from such a logic error is not specified, but will be encapsulated
/// to the `SortedList` that observed it and not result in undefined behavior.
///
/// # Examples
///
/// ```
/// use wabi_util::SortedList;
///
/// let mut planets = SortedList::new();
///
/// planets.add("Venus", 0.7).unwrap();
/// planets.add("Mercury", 0.4).unwrap();
/// planets.add("Earth", 1.0).unwrap();
///
/// // `add` never replaces an existing entry...
/// assert!(planets.add("Earth", 1.1).is_err());
/// // ...but `insert` does.
/// assert_eq!(planets.insert("Earth", 1.0), Some(1.0));
///
/// assert!(!planets.is_fixed_size());
/// assert_eq!(planets.len(), 3);
/// assert_eq!(planets["Mercury"], 0.4);
///
/// let names: Vec<_> = planets.keys().copied().collect();
/// assert_eq!(names, ["Earth", "Mercury", "Venus"]);
/// ```
pub struct SortedList<K, V, C = Natural> {
    raw: RawSortedList<K, V, C>,
}

/// An iterator over the entries of a `SortedList`, in key order.
///
/// This `struct` is created by the [`iter`] method on [`SortedList`].
///
/// [`iter`]: SortedList::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, V> {
    inner: Zip<slice::Iter<'a, K>, slice::Iter<'a, V>>,
}

/// A mutable iterator over the entries of a `SortedList`, in key order.
///
/// This `struct` is created by the [`iter_mut`] method on [`SortedList`].
///
/// [`iter_mut`]: SortedList::iter_mut
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IterMut<'a, K, V> {
    inner: Zip<slice::Iter<'a, K>, slice::IterMut<'a, V>>,
}

/// An owning iterator over the entries of a `SortedList`, in key order.
///
/// This `struct` is created by the [`into_iter`] method on [`SortedList`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: IntoIterator::into_iter
pub struct IntoIter<K, V> {
    inner: Zip<vec::IntoIter<K>, vec::IntoIter<V>>,
}

/// An iterator over the keys of a `SortedList`.
///
/// This `struct` is created by the [`keys`] method on [`SortedList`].
///
/// [`keys`]: SortedList::keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Keys<'a, K> {
    inner: slice::Iter<'a, K>,
}

/// An iterator over the values of a `SortedList`.
///
/// This `struct` is created by the [`values`] method on [`SortedList`].
///
/// [`values`]: SortedList::values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Values<'a, V> {
    inner: slice::Iter<'a, V>,
}

/// A mutable iterator over the values of a `SortedList`.
///
/// This `struct` is created by the [`values_mut`] method on [`SortedList`].
///
/// [`values_mut`]: SortedList::values_mut
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct ValuesMut<'a, V> {
    inner: slice::IterMut<'a, V>,
}

/// An owning iterator over the keys of a `SortedList`.
///
/// This `struct` is created by the [`into_keys`] method on [`SortedList`].
///
/// [`into_keys`]: SortedList::into_keys
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IntoKeys<K> {
    inner: vec::IntoIter<K>,
}

/// An owning iterator over the values of a `SortedList`.
///
/// This `struct` is created by the [`into_values`] method on [`SortedList`].
///
/// [`into_values`]: SortedList::into_values
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct IntoValues<V> {
    inner: vec::IntoIter<V>,
}

impl<K, V> SortedList<K, V> {
    /// Makes a new, empty `SortedList` ordered by the keys' [`Ord`]
    /// implementation.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_util::SortedList;
    ///
    /// let mut list = SortedList::new();
    /// list.add(1, "a").unwrap();
    /// assert!(!list.is_fixed_size());
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        SortedList {
            raw: RawSortedList::new(Natural),
        }
    }
}

impl<K, V, C> SortedList<K, V, C> {
    /// Makes a new, empty `SortedList` ordered by `comparer`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_util::SortedList;
    ///
    /// let mut list = SortedList::with_comparer(|a: &i32, b: &i32| b.abs().cmp(&a.abs()));
    /// list.insert(-1, "one");
    /// list.insert(3, "three");
    /// assert_eq!(list.first_key_value(), Some((&3, &"three")));
    /// ```
    #[must_use]
    pub const fn with_comparer(comparer: C) -> Self {
        SortedList {
            raw: RawSortedList::new(comparer),
        }
    }

    /// Builds a list ordered by `comparer` from an iterator of entries.
    ///
    /// Later entries replace earlier ones with an equal key.
    pub fn from_iter_with_comparer<I>(iter: I, comparer: C) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        C: Comparer<K>,
    {
        let mut list = SortedList::with_comparer(comparer);
        list.extend(iter);
        list
    }

    /// Returns the comparer that orders this list's keys.
    #[must_use]
    pub const fn comparer(&self) -> &C {
        self.raw.comparer()
    }

    /// Returns `true` if the list rejects structural changes.
    ///
    /// Always `false` for a `SortedList`; see [`FixedSize`] for the view that
    /// reports `true`.
    #[must_use]
    pub const fn is_fixed_size(&self) -> bool {
        false
    }

    /// Returns the number of entries in the list.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_util::SortedList;
    ///
    /// let mut a = SortedList::new();
    /// assert_eq!(a.len(), 0);
    /// a.add(1, "a").unwrap();
    /// assert_eq!(a.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the list contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Clears the list, removing all entries. The capacity is kept.
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// The key may be any borrowed form of the list's key type, but the
    /// comparer must order the borrowed form the same way as the key type.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_util::SortedList;
    ///
    /// let mut list = SortedList::new();
    /// list.add(String::from("a"), 1).unwrap();
    /// assert_eq!(list.get("a"), Some(&1));
    /// assert_eq!(list.get("b"), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparer<Q>,
    {
        let rank = self.raw.search(key).ok()?;
        self.raw.get_by_rank(rank).map(|(_, v)| v)
    }

    /// Returns the value corresponding to the key, or
    /// [`Error::KeyNotFound`].
    ///
    /// # Errors
    ///
    /// Fails with [`Error::KeyNotFound`] if the key is absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_util::SortedList;
    /// use wabi_util::sorted_list::Error;
    ///
    /// let list = SortedList::from([(1, "a")]);
    /// assert_eq!(list.try_get(&1), Ok(&"a"));
    /// assert_eq!(list.try_get(&2), Err(Error::KeyNotFound));
    /// ```
    pub fn try_get<Q>(&self, key: &Q) -> Result<&V, Error>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparer<Q>,
    {
        self.get(key).ok_or(Error::KeyNotFound)
    }

    /// Returns the stored key and value corresponding to the supplied key.
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparer<Q>,
    {
        let rank = self.raw.search(key).ok()?;
        self.raw.get_by_rank(rank)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_util::SortedList;
    ///
    /// let mut list = SortedList::new();
    /// list.add(1, "a").unwrap();
    /// if let Some(x) = list.get_mut(&1) {
    ///     *x = "b";
    /// }
    /// assert_eq!(list[&1], "b");
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparer<Q>,
    {
        let rank = self.raw.search(key).ok()?;
        self.raw.get_by_rank_mut(rank).map(|(_, v)| v)
    }

    /// Returns `true` if the list contains a value for the specified key.
    ///
    /// # Complexity
    ///
    /// O(log n)
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparer<Q>,
    {
        self.raw.search(key).is_ok()
    }

    /// Returns `true` if any entry holds a value equal to `value`.
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.raw.values().contains(value)
    }

    /// Adds a new entry to the list.
    ///
    /// Unlike [`insert`](Self::insert), an existing entry is never replaced.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::DuplicateKey`] if the key is already present; the
    /// list is left unchanged and `key` and `value` are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_util::SortedList;
    /// use wabi_util::sorted_list::Error;
    ///
    /// let mut list = SortedList::new();
    /// for i in 0..100 {
    ///     list.add(i, i).unwrap();
    /// }
    /// assert_eq!(list.len(), 100);
    /// assert_eq!(list.add(7, 0), Err(Error::DuplicateKey));
    /// assert_eq!(list[&7], 7);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(log n) to search, O(n) to shift.
    pub fn add(&mut self, key: K, value: V) -> Result<(), Error>
    where
        C: Comparer<K>,
    {
        match self.raw.search(&key) {
            Ok(rank) => {
                tracing::debug!(rank, len = self.raw.len(), "rejected add of duplicate key");
                Err(Error::DuplicateKey)
            }
            Err(rank) => {
                self.raw.insert_at(rank, key, value);
                Ok(())
            }
        }
    }

    /// Inserts an entry, replacing the value of an existing equal key.
    ///
    /// If the list did not have this key present, `None` is returned and the
    /// length grows by one. Otherwise the value is updated, the old value is
    /// returned and the length is unchanged. The stored key is not updated.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_util::SortedList;
    ///
    /// let mut list = SortedList::new();
    /// assert_eq!(list.insert(37, "a"), None);
    /// assert_eq!(list.insert(37, "b"), Some("a"));
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V>
    where
        C: Comparer<K>,
    {
        match self.raw.search(&key) {
            Ok(rank) => self.raw.get_by_rank_mut(rank).map(|(_, slot)| core::mem::replace(slot, value)),
            Err(rank) => {
                self.raw.insert_at(rank, key, value);
                None
            }
        }
    }

    /// Removes a key from the list, returning its value if it was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_util::SortedList;
    ///
    /// let mut list = SortedList::new();
    /// list.add(1, "a").unwrap();
    /// assert_eq!(list.remove(&1), Some("a"));
    /// assert_eq!(list.remove(&1), None);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparer<Q>,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes a key from the list, returning the stored key and value if the
    /// key was present.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized,
        C: Comparer<Q>,
    {
        let rank = self.raw.search(key).ok()?;
        Some(self.raw.remove_at(rank))
    }

    /// Returns the entry with the smallest key.
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.raw.get_by_rank(0)
    }

    /// Returns the entry with the largest key.
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.raw.get_by_rank(self.raw.len().checked_sub(1)?)
    }

    /// Gets an iterator over the entries of the list, in key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_util::SortedList;
    ///
    /// let list = SortedList::from([(3, "c"), (1, "a"), (2, "b")]);
    /// let (first_key, first_value) = list.iter().next().unwrap();
    /// assert_eq!((*first_key, *first_value), (1, "a"));
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.raw.keys().iter().zip(self.raw.values()),
        }
    }

    /// Gets a mutable iterator over the entries of the list, in key order.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        let (keys, values) = self.raw.split_mut();
        IterMut {
            inner: keys.iter().zip(values.iter_mut()),
        }
    }

    /// Gets an iterator over the keys of the list, in order.
    pub fn keys(&self) -> Keys<'_, K> {
        Keys {
            inner: self.raw.keys().iter(),
        }
    }

    /// Gets an iterator over the values of the list, in key order.
    pub fn values(&self) -> Values<'_, V> {
        Values {
            inner: self.raw.values().iter(),
        }
    }

    /// Gets a mutable iterator over the values of the list, in key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_util::SortedList;
    ///
    /// let mut list = SortedList::from([(1, 10), (2, 20)]);
    /// for value in list.values_mut() {
    ///     *value += 1;
    /// }
    /// let values: Vec<_> = list.values().copied().collect();
    /// assert_eq!(values, [11, 21]);
    /// ```
    pub fn values_mut(&mut self) -> ValuesMut<'_, V> {
        ValuesMut {
            inner: self.raw.values_mut().iter_mut(),
        }
    }

    /// Creates a consuming iterator over the keys, in order.
    pub fn into_keys(self) -> IntoKeys<K> {
        let (keys, _) = self.raw.into_parts();
        IntoKeys {
            inner: keys.into_iter(),
        }
    }

    /// Creates a consuming iterator over the values, in key order.
    pub fn into_values(self) -> IntoValues<V> {
        let (_, values) = self.raw.into_parts();
        IntoValues {
            inner: values.into_iter(),
        }
    }

    /// Returns a view of this list that rejects structural changes.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_util::SortedList;
    ///
    /// let mut list = SortedList::from([(1, "a")]);
    /// let mut fixed = list.fixed_size();
    /// assert!(fixed.is_fixed_size());
    /// assert!(fixed.add(2, "b").is_err());
    /// assert_eq!(fixed.set(1, "z"), Ok("a"));
    /// ```
    pub fn fixed_size(&mut self) -> FixedSize<'_, K, V, C> {
        FixedSize::new(self)
    }
}

impl<K: Clone, V: Clone, C: Clone> Clone for SortedList<K, V, C> {
    fn clone(&self) -> Self {
        SortedList {
            raw: self.raw.clone(),
        }
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for SortedList<K, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, C> Eq for SortedList<K, V, C> {}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for SortedList<K, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, C: Default> Default for SortedList<K, V, C> {
    fn default() -> Self {
        SortedList::with_comparer(C::default())
    }
}

impl<K, V, C: Comparer<K> + Default> FromIterator<(K, V)> for SortedList<K, V, C> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        SortedList::from_iter_with_comparer(iter, C::default())
    }
}

impl<K, V, C: Comparer<K>> Extend<(K, V)> for SortedList<K, V, C> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K: Copy, V: Copy, C: Comparer<K>> Extend<(&'a K, &'a V)> for SortedList<K, V, C> {
    fn extend<T: IntoIterator<Item = (&'a K, &'a V)>>(&mut self, iter: T) {
        for (&k, &v) in iter {
            self.insert(k, v);
        }
    }
}

impl<'a, K, V, C> IntoIterator for &'a SortedList<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

impl<'a, K, V, C> IntoIterator for &'a mut SortedList<K, V, C> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> IterMut<'a, K, V> {
        self.iter_mut()
    }
}

impl<K, V, C> IntoIterator for SortedList<K, V, C> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    /// Gets an owning iterator over the entries of the list, in key order.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_util::SortedList;
    ///
    /// let list = SortedList::from([(2, "b"), (1, "a")]);
    /// let mut iter = list.into_iter();
    /// assert_eq!(iter.next(), Some((1, "a")));
    /// assert_eq!(iter.next_back(), Some((2, "b")));
    /// ```
    fn into_iter(self) -> IntoIter<K, V> {
        let (keys, values) = self.raw.into_parts();
        IntoIter {
            inner: keys.into_iter().zip(values),
        }
    }
}

impl<K, Q, V, C> Index<&Q> for SortedList<K, V, C>
where
    K: Borrow<Q>,
    Q: ?Sized,
    C: Comparer<Q>,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if the key is not present in the list.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for SortedList<K, V> {
    fn from(arr: [(K, V); N]) -> Self {
        arr.into_iter().collect()
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Iter<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IterMut<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}

impl<K, V> FusedIterator for IterMut<'_, K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IterMut<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterMut").field("remaining", &self.inner.len()).finish()
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for IntoIter<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntoIter").field("remaining", &self.inner.len()).finish()
    }
}

impl<'a, K> Iterator for Keys<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K> DoubleEndedIterator for Keys<'_, K> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K> ExactSizeIterator for Keys<'_, K> {}

impl<K> FusedIterator for Keys<'_, K> {}

impl<K> Clone for Keys<'_, K> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for Keys<'_, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<&'a V> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for Values<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<V> ExactSizeIterator for Values<'_, V> {}

impl<V> FusedIterator for Values<'_, V> {}

impl<V> Clone for Values<'_, V> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for Values<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, V> Iterator for ValuesMut<'a, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<&'a mut V> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for ValuesMut<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<V> ExactSizeIterator for ValuesMut<'_, V> {}

impl<V> FusedIterator for ValuesMut<'_, V> {}

impl<V: fmt::Debug> fmt::Debug for ValuesMut<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.as_slice()).finish()
    }
}

impl<K> Iterator for IntoKeys<K> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K> DoubleEndedIterator for IntoKeys<K> {
    fn next_back(&mut self) -> Option<K> {
        self.inner.next_back()
    }
}

impl<K> ExactSizeIterator for IntoKeys<K> {}

impl<K> FusedIterator for IntoKeys<K> {}

impl<K: fmt::Debug> fmt::Debug for IntoKeys<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.as_slice()).finish()
    }
}

impl<V> Iterator for IntoValues<V> {
    type Item = V;

    fn next(&mut self) -> Option<V> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for IntoValues<V> {
    fn next_back(&mut self) -> Option<V> {
        self.inner.next_back()
    }
}

impl<V> ExactSizeIterator for IntoValues<V> {}

impl<V> FusedIterator for IntoValues<V> {}

impl<V: fmt::Debug> fmt::Debug for IntoValues<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.as_slice()).finish()
    }
}
