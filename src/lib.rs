//! Sorted list and web text codecs for Rust.
//!
//! This crate provides two independent utilities:
//!
//! - [`SortedList`] - an array-backed ordered map with O(log n) lookups, rank
//!   (index) based access, pluggable key ordering through [`Comparer`], and a
//!   [`FixedSize`](sorted_list::FixedSize) view that forbids structural changes.
//! - [`web_utility`] - HTML entity and URL percent-encoding helpers over text
//!   and byte buffers.
//!
//! # Example
//!
//! ```
//! use wabi_util::{Rank, SortedList, web_utility};
//!
//! let mut scores = SortedList::new();
//! scores.add("Carol", 92).unwrap();
//! scores.add("Alice", 100).unwrap();
//! scores.add("Bob", 85).unwrap();
//!
//! assert!(scores.add("Bob", 70).is_err());
//! assert_eq!(scores.rank_of(&"Bob"), Some(1));
//! assert_eq!(scores[Rank(0)], 100);
//!
//! assert_eq!(web_utility::html_encode("<b>"), "&lt;b&gt;");
//! assert_eq!(web_utility::url_encode("a b"), "a+b");
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Sorted-array storage** - keys and values live in two parallel vectors kept in key order
//! - **Pure codecs** - every codec function is a single pass over its input and
//!   borrows the input back when nothing needs escaping

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod comparer;
mod order_statistic;
mod raw;

pub mod sorted_list;
pub mod web_utility;

pub use comparer::{Comparer, Natural, Reverse};
pub use order_statistic::Rank;
pub use sorted_list::SortedList;
