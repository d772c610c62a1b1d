use super::{Error, SortedList};
use crate::comparer::Natural;
use crate::raw::RawSortedList;

impl<K, V> SortedList<K, V> {
    /// Creates an empty list with capacity for at least `capacity` entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_util::SortedList;
    ///
    /// let list: SortedList<i32, i32> = SortedList::with_capacity(32);
    /// assert!(list.is_empty());
    /// assert!(list.capacity() >= 32);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        SortedList::with_capacity_and_comparer(capacity, Natural)
    }
}

impl<K, V, C> SortedList<K, V, C> {
    /// Creates an empty list ordered by `comparer` with capacity for at least
    /// `capacity` entries.
    #[must_use]
    pub fn with_capacity_and_comparer(capacity: usize, comparer: C) -> Self {
        SortedList {
            raw: RawSortedList::with_capacity(capacity, comparer),
        }
    }

    /// Returns the number of entries the list can hold without reallocating.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// Grows or shrinks the storage to hold about `capacity` entries.
    ///
    /// Growing guarantees room for at least `capacity` entries; shrinking
    /// releases memory down to at least `capacity`.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::CapacityTooSmall`] if `capacity` is less than
    /// [`len`](Self::len).
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_util::SortedList;
    /// use wabi_util::sorted_list::Error;
    ///
    /// let mut list = SortedList::from([(1, 'a'), (2, 'b')]);
    /// list.set_capacity(100).unwrap();
    /// assert!(list.capacity() >= 100);
    /// assert_eq!(list.set_capacity(1), Err(Error::CapacityTooSmall { requested: 1, len: 2 }));
    /// ```
    pub fn set_capacity(&mut self, capacity: usize) -> Result<(), Error> {
        let len = self.raw.len();
        if capacity < len {
            return Err(Error::CapacityTooSmall {
                requested: capacity,
                len,
            });
        }
        self.raw.set_capacity(capacity);
        Ok(())
    }

    /// Shrinks the capacity as close as possible to the number of entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use wabi_util::SortedList;
    ///
    /// let mut list: SortedList<i32, i32> = SortedList::with_capacity(64);
    /// list.insert(1, 1);
    /// list.trim_to_size();
    /// assert!(list.capacity() >= 1);
    /// ```
    pub fn trim_to_size(&mut self) {
        self.raw.shrink_to_fit();
    }
}
