use thiserror::Error;

/// Errors reported by [`SortedList`](super::SortedList) and its
/// [`FixedSize`](super::FixedSize) view.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq, Hash)]
pub enum Error {
    /// An entry with an equal key is already present.
    #[error("an entry with the same key already exists in the sorted list")]
    DuplicateKey,

    /// No entry has the requested key.
    #[error("the given key was not present in the sorted list")]
    KeyNotFound,

    /// A rank was at or past the end of the list.
    #[error("rank {rank} is out of bounds for a sorted list of length {len}")]
    RankOutOfBounds {
        /// The rank that was requested.
        rank: usize,
        /// The length of the list at the time.
        len: usize,
    },

    /// A capacity smaller than the number of entries was requested.
    #[error("capacity {requested} is less than the sorted list length {len}")]
    CapacityTooSmall {
        /// The capacity that was requested.
        requested: usize,
        /// The length of the list at the time.
        len: usize,
    },

    /// A structural change was attempted through a fixed-size view.
    #[error("the sorted list is fixed size")]
    FixedSize,
}
