/// A zero-based rank into the sorted order of a [`SortedList`](crate::SortedList).
///
/// A rank is the position of an entry in key order, so `Rank(0)` is always the
/// entry with the smallest key.
///
/// # Examples
///
/// ```
/// use wabi_util::{Rank, SortedList};
///
/// let mut list = SortedList::new();
/// list.insert("b", 20);
/// list.insert("a", 10);
///
/// assert_eq!(list[Rank(0)], 10);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Rank(pub usize);
