use core::cmp::Ordering;

/// A total order over keys of type `K`.
///
/// A [`SortedList`](crate::SortedList) keeps its keys sorted by a comparer
/// chosen at construction. Any `Fn(&K, &K) -> Ordering` closure is a comparer,
/// as are the unit types [`Natural`] and [`Reverse`].
///
/// It is a logic error for a comparer to be inconsistent (for example, to
/// report `a < b` and `b < a`). The list will not exhibit undefined behavior,
/// but lookups may miss entries that are present.
///
/// # Examples
///
/// ```
/// use wabi_util::SortedList;
///
/// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len()).then_with(|| a.cmp(b));
/// let mut list = SortedList::with_comparer(by_len);
/// list.insert("ccc", 3);
/// list.insert("a", 1);
/// list.insert("bb", 2);
///
/// let keys: Vec<_> = list.keys().copied().collect();
/// assert_eq!(keys, ["a", "bb", "ccc"]);
/// ```
pub trait Comparer<K: ?Sized> {
    /// Compares two keys.
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// Orders keys by their [`Ord`] implementation. This is the default comparer.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Natural;

impl<K: ?Sized + Ord> Comparer<K> for Natural {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

/// Orders keys by the reverse of their [`Ord`] implementation.
///
/// # Examples
///
/// ```
/// use wabi_util::{Reverse, SortedList};
///
/// let list = SortedList::from_iter_with_comparer([(1, 'a'), (3, 'c'), (2, 'b')], Reverse);
/// let keys: Vec<_> = list.keys().copied().collect();
/// assert_eq!(keys, [3, 2, 1]);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Reverse;

impl<K: ?Sized + Ord> Comparer<K> for Reverse {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        b.cmp(a)
    }
}

impl<K: ?Sized, F> Comparer<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}
