//! HTML and URL encoding helpers.
//!
//! Every function here is a pure, single-pass transform. The text functions
//! take `&str` and return [`Cow`](alloc::borrow::Cow), borrowing the input when
//! nothing had to change. A missing value is expressed with `Option`, and
//! passes through as `None`:
//!
//! ```
//! use wabi_util::web_utility::{html_decode, html_encode, url_decode, url_encode};
//!
//! let missing: Option<&str> = None;
//! assert_eq!(missing.map(html_encode), None);
//! assert_eq!(missing.map(url_decode), None);
//!
//! let text = "/\\\"\tHello! \u{2665}?";
//! assert_eq!(html_decode(&html_encode(text)), text);
//! assert_eq!(url_decode(&url_encode(text)), text);
//! ```
//!
//! The range-checked byte functions ([`url_encode_to_bytes`],
//! [`url_decode_to_bytes`]) take an optional buffer plus a signed offset and
//! count, and report bad arguments as [`ArgumentError`].

mod entities;
mod error;
mod html;
mod url;

pub use error::ArgumentError;
pub use html::{html_decode, html_decode_to, html_encode, html_encode_to};
pub use url::{
    url_decode, url_decode_bytes, url_decode_to_bytes, url_encode, url_encode_bytes, url_encode_to_bytes,
};
