use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use super::ArgumentError;

const UPPER_HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Bytes copied through by the URL encoder: ASCII letters and digits plus
/// `-`, `_`, `.`, `!`, `*`, `(` and `)`.
const fn is_url_safe(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'!' | b'*' | b'(' | b')')
}

const fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// The encoded form of one byte: one or three ASCII bytes.
fn encode_byte(byte: u8) -> ([u8; 3], usize) {
    if is_url_safe(byte) {
        ([byte, 0, 0], 1)
    } else if byte == b' ' {
        ([b'+', 0, 0], 1)
    } else {
        (
            [b'%', UPPER_HEX[usize::from(byte >> 4)], UPPER_HEX[usize::from(byte & 0x0f)]],
            3,
        )
    }
}

/// Length of the encoded form of `bytes`, or `None` if encoding would not
/// change them.
fn encoded_len(bytes: &[u8]) -> Option<usize> {
    let mut spaces = 0;
    let mut escaped = 0;
    for &byte in bytes {
        if byte == b' ' {
            spaces += 1;
        } else if !is_url_safe(byte) {
            escaped += 1;
        }
    }
    (spaces + escaped > 0).then_some(bytes.len() + 2 * escaped)
}

/// Percent-encodes `value` for use in a URL query string.
///
/// The text is encoded as UTF-8 and every byte outside the safe set (ASCII
/// letters and digits plus `-_.!*()`) is replaced: a space becomes `+`, any
/// other byte becomes `%XX` with uppercase hex digits.
///
/// # Examples
///
/// ```
/// use wabi_util::web_utility::url_encode;
///
/// assert_eq!(url_encode("'"), "%27");
/// assert_eq!(url_encode("/\\\"\tHello! \u{2665}?"), "%2F%5C%22%09Hello!+%E2%99%A5%3F");
/// ```
#[must_use]
pub fn url_encode(value: &str) -> Cow<'_, str> {
    let Some(len) = encoded_len(value.as_bytes()) else {
        return Cow::Borrowed(value);
    };

    let mut encoded = String::with_capacity(len);
    for &byte in value.as_bytes() {
        let (chunk, n) = encode_byte(byte);
        encoded.extend(chunk[..n].iter().copied().map(char::from));
    }
    Cow::Owned(encoded)
}

/// Decodes a percent-encoded string.
///
/// `+` becomes a space and `%XX` (either hex case) becomes the byte `XX`; a
/// `%` not followed by two hex digits is kept as is. The resulting bytes are
/// read as UTF-8, with invalid sequences replaced by U+FFFD.
///
/// # Examples
///
/// ```
/// use wabi_util::web_utility::url_decode;
///
/// assert_eq!(url_decode("%2F%5c+%E2%99%A5"), "/\\ \u{2665}");
/// assert_eq!(url_decode("100%"), "100%");
/// ```
#[must_use]
pub fn url_decode(value: &str) -> Cow<'_, str> {
    match url_decode_bytes(value.as_bytes()) {
        Cow::Borrowed(_) => Cow::Borrowed(value),
        Cow::Owned(bytes) => Cow::Owned(
            String::from_utf8(bytes).unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned()),
        ),
    }
}

/// Percent-encodes a byte buffer with the rules of [`url_encode`].
///
/// # Examples
///
/// ```
/// use wabi_util::web_utility::url_encode_bytes;
///
/// assert_eq!(&*url_encode_bytes(&[b'a', b' ', 0xff]), b"a+%FF");
/// ```
#[must_use]
pub fn url_encode_bytes(bytes: &[u8]) -> Cow<'_, [u8]> {
    let Some(len) = encoded_len(bytes) else {
        return Cow::Borrowed(bytes);
    };

    let mut encoded = Vec::with_capacity(len);
    for &byte in bytes {
        let (chunk, n) = encode_byte(byte);
        encoded.extend_from_slice(&chunk[..n]);
    }
    Cow::Owned(encoded)
}

/// Decodes a percent-encoded byte buffer with the rules of [`url_decode`],
/// without any UTF-8 interpretation.
///
/// # Examples
///
/// ```
/// use wabi_util::web_utility::url_decode_bytes;
///
/// assert_eq!(&*url_decode_bytes(b"a+%FF%zz"), &[b'a', b' ', 0xff, b'%', b'z', b'z']);
/// ```
#[must_use]
pub fn url_decode_bytes(bytes: &[u8]) -> Cow<'_, [u8]> {
    if !bytes.iter().any(|&byte| byte == b'+' || byte == b'%') {
        return Cow::Borrowed(bytes);
    }

    let mut decoded = Vec::with_capacity(bytes.len());
    let mut index = 0;
    while index < bytes.len() {
        match bytes[index] {
            b'+' => decoded.push(b' '),
            b'%' => match percent_escape(&bytes[index + 1..]) {
                Some(byte) => {
                    decoded.push(byte);
                    index += 2;
                }
                None => decoded.push(b'%'),
            },
            byte => decoded.push(byte),
        }
        index += 1;
    }
    Cow::Owned(decoded)
}

/// Decodes the two hex digits following a `%`.
fn percent_escape(rest: &[u8]) -> Option<u8> {
    match rest {
        [high, low, ..] => Some((hex_value(*high)? << 4) | hex_value(*low)?),
        _ => None,
    }
}

/// Percent-encodes `count` bytes of `bytes` starting at `offset`.
///
/// A missing buffer with `count == 0` yields `Ok(None)`.
///
/// # Errors
///
/// - [`ArgumentError::Null`] (`bytes`) if `bytes` is `None` and `count` is
///   not zero.
/// - [`ArgumentError::OutOfRange`] (`offset`) if `offset` is negative or past
///   the end of `bytes`.
/// - [`ArgumentError::OutOfRange`] (`count`) if `count` is negative or
///   `offset + count` is past the end of `bytes`.
///
/// # Examples
///
/// ```
/// use wabi_util::web_utility::{ArgumentError, url_encode_to_bytes};
///
/// assert_eq!(url_encode_to_bytes(Some(&b"x a b"[..]), 1, 3), Ok(Some(b"+a+".to_vec())));
/// assert_eq!(url_encode_to_bytes(None, 0, 0), Ok(None));
/// assert_eq!(url_encode_to_bytes(None, 0, 1), Err(ArgumentError::Null { param: "bytes" }));
/// ```
pub fn url_encode_to_bytes(bytes: Option<&[u8]>, offset: isize, count: isize) -> Result<Option<Vec<u8>>, ArgumentError> {
    Ok(checked_range(bytes, offset, count)?.map(|range| url_encode_bytes(range).into_owned()))
}

/// Decodes `count` bytes of `bytes` starting at `offset`.
///
/// A missing buffer with `count == 0` yields `Ok(None)`.
///
/// # Errors
///
/// The same argument errors as [`url_encode_to_bytes`].
pub fn url_decode_to_bytes(bytes: Option<&[u8]>, offset: isize, count: isize) -> Result<Option<Vec<u8>>, ArgumentError> {
    Ok(checked_range(bytes, offset, count)?.map(|range| url_decode_bytes(range).into_owned()))
}

/// Validates an `(offset, count)` window over an optional buffer.
fn checked_range(bytes: Option<&[u8]>, offset: isize, count: isize) -> Result<Option<&[u8]>, ArgumentError> {
    let Some(bytes) = bytes else {
        if count == 0 {
            return Ok(None);
        }
        tracing::debug!(offset, count, "url codec rejected missing buffer");
        return Err(ArgumentError::Null { param: "bytes" });
    };

    let start = usize::try_from(offset).ok().filter(|&start| start <= bytes.len()).ok_or_else(|| {
        tracing::debug!(offset, len = bytes.len(), "url codec rejected offset");
        ArgumentError::OutOfRange { param: "offset" }
    })?;
    let len = usize::try_from(count).ok().filter(|&len| len <= bytes.len() - start).ok_or_else(|| {
        tracing::debug!(offset, count, len = bytes.len(), "url codec rejected count");
        ArgumentError::OutOfRange { param: "count" }
    })?;

    Ok(Some(&bytes[start..start + len]))
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn every_byte_encodes_to_safe_ascii() {
        for byte in 0..=u8::MAX {
            let (chunk, n) = encode_byte(byte);
            assert!(chunk[..n].iter().all(|&b| is_url_safe(b) || b == b'%' || b == b'+'));
            assert_eq!(&*url_decode_bytes(&chunk[..n]), &[byte]);
        }
    }

    #[test]
    fn truncated_escapes_pass_through() {
        assert_eq!(&*url_decode_bytes(b"%"), b"%");
        assert_eq!(&*url_decode_bytes(b"%4"), b"%4");
        assert_eq!(&*url_decode_bytes(b"%4g%41"), b"%4gA");
    }

    #[test]
    fn checked_range_windows() {
        let buf = [1u8, 2, 3];
        assert_eq!(checked_range(Some(&buf[..]), 0, 3), Ok(Some(&buf[..])));
        assert_eq!(checked_range(Some(&buf[..]), 3, 0), Ok(Some(&buf[3..])));
        assert_eq!(checked_range(Some(&buf[..]), 1, 2), Ok(Some(&buf[1..])));
        assert_eq!(checked_range(Some(&buf[..]), 4, 0), Err(ArgumentError::OutOfRange { param: "offset" }));
        assert_eq!(checked_range(Some(&buf[..]), 2, 2), Err(ArgumentError::OutOfRange { param: "count" }));
        assert_eq!(checked_range(None, 5, 0), Ok(None));
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        assert_eq!(url_decode("%FF%41"), "\u{fffd}A");
    }
}
