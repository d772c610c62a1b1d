use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt::{self, Write};

use super::entities;

/// Returns `true` for characters that [`html_encode`] replaces.
const fn needs_encoding(ch: char) -> bool {
    matches!(ch, '<' | '>' | '"' | '\'' | '&' | '\u{a0}'..='\u{ff}' | '\u{10000}'..='\u{10ffff}')
}

/// Encodes `value` for safe inclusion in HTML text or attribute values.
///
/// The markup-significant characters `<`, `>`, `"`, `'` and `&` become
/// character references. The apostrophe is written as `&#39;` rather than
/// `&apos;`, which is only defined in XHTML. Characters in U+00A0..=U+00FF and
/// characters outside the Basic Multilingual Plane are written as decimal
/// numeric references of their scalar value. Everything else is copied.
///
/// Returns the input unchanged (borrowed) when nothing needs encoding.
///
/// # Examples
///
/// ```
/// use wabi_util::web_utility::html_encode;
///
/// assert_eq!(html_encode("Hello! '\"<&>\u{2665}\u{e7} World"),
///            "Hello! &#39;&quot;&lt;&amp;&gt;\u{2665}&#231; World");
/// assert_eq!(html_encode("\u{233b4}"), "&#144308;");
/// ```
#[must_use]
pub fn html_encode(value: &str) -> Cow<'_, str> {
    if !value.chars().any(needs_encoding) {
        return Cow::Borrowed(value);
    }

    let mut encoded = String::with_capacity(value.len() + value.len() / 2);
    // `String` never fails to accept writes.
    let _ = html_encode_to(value, &mut encoded);
    Cow::Owned(encoded)
}

/// Writes the HTML-encoded form of `value` to `output`.
///
/// See [`html_encode`] for the encoding rules.
///
/// # Errors
///
/// Returns any error reported by `output`.
pub fn html_encode_to<W: Write + ?Sized>(value: &str, output: &mut W) -> fmt::Result {
    let mut start = 0;
    for (index, ch) in value.char_indices() {
        if !needs_encoding(ch) {
            continue;
        }
        output.write_str(&value[start..index])?;
        match ch {
            '<' => output.write_str("&lt;")?,
            '>' => output.write_str("&gt;")?,
            '"' => output.write_str("&quot;")?,
            '\'' => output.write_str("&#39;")?,
            '&' => output.write_str("&amp;")?,
            _ => write!(output, "&#{};", u32::from(ch))?,
        }
        start = index + ch.len_utf8();
    }
    output.write_str(&value[start..])
}

/// Decodes HTML character references in `value`.
///
/// Recognized references are named references from HTML 4.01 (plus
/// `&apos;`), decimal references `&#N;`, and hexadecimal references `&#xN;`
/// or `&#XN;`. A reference runs from `&` to the next `;`; if another `&`
/// comes first, the first `&` is plain text. Unknown names, malformed numbers,
/// and numbers that are not Unicode scalar values (surrogates, values above
/// U+10FFFF) are copied through unchanged.
///
/// Returns the input unchanged (borrowed) when it contains no `&`.
///
/// # Examples
///
/// ```
/// use wabi_util::web_utility::html_decode;
///
/// assert_eq!(html_decode("&apos;&quot;&lt;&amp;&gt;&hearts;&#xe7;&#231;"),
///            "'\"<&>\u{2665}\u{e7}\u{e7}");
/// assert_eq!(html_decode("&bogus; &#xD800;"), "&bogus; &#xD800;");
/// ```
#[must_use]
pub fn html_decode(value: &str) -> Cow<'_, str> {
    if !value.contains('&') {
        return Cow::Borrowed(value);
    }

    let mut decoded = String::with_capacity(value.len());
    // `String` never fails to accept writes.
    let _ = html_decode_to(value, &mut decoded);
    Cow::Owned(decoded)
}

/// Writes the HTML-decoded form of `value` to `output`.
///
/// See [`html_decode`] for the decoding rules.
///
/// # Errors
///
/// Returns any error reported by `output`.
pub fn html_decode_to<W: Write + ?Sized>(value: &str, output: &mut W) -> fmt::Result {
    let mut rest = value;
    while let Some(amp) = rest.find('&') {
        output.write_str(&rest[..amp])?;
        let after = &rest[amp + 1..];

        let terminated = after.find([';', '&']).filter(|&end| after.as_bytes()[end] == b';');
        if let Some(end) = terminated {
            let reference = &after[..end];
            match reference.strip_prefix('#') {
                Some(number) => {
                    if let Some(ch) = parse_numeric_reference(number) {
                        output.write_char(ch)?;
                        rest = &after[end + 1..];
                        continue;
                    }
                }
                None => {
                    match entities::lookup(reference) {
                        Some(ch) => output.write_char(ch)?,
                        None => {
                            output.write_char('&')?;
                            output.write_str(reference)?;
                            output.write_char(';')?;
                        }
                    }
                    rest = &after[end + 1..];
                    continue;
                }
            }
        }

        output.write_char('&')?;
        rest = after;
    }
    output.write_str(rest)
}

/// Parses the part of a numeric reference after `#`: decimal digits, or `x`/`X`
/// followed by hex digits.
fn parse_numeric_reference(number: &str) -> Option<char> {
    let (digits, radix) = match number.strip_prefix(['x', 'X']) {
        Some(hex) => (hex, 16),
        None => (number, 10),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    let scalar = u32::from_str_radix(digits, radix).ok()?;
    char::from_u32(scalar)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn numeric_reference_forms() {
        assert_eq!(parse_numeric_reference("231"), Some('\u{e7}'));
        assert_eq!(parse_numeric_reference("xe7"), Some('\u{e7}'));
        assert_eq!(parse_numeric_reference("XE7"), Some('\u{e7}'));
        assert_eq!(parse_numeric_reference("144308"), Some('\u{233b4}'));
        assert_eq!(parse_numeric_reference("x"), None);
        assert_eq!(parse_numeric_reference(""), None);
        assert_eq!(parse_numeric_reference("+5"), None);
        assert_eq!(parse_numeric_reference("12a"), None);
        assert_eq!(parse_numeric_reference("x110000"), None);
        assert_eq!(parse_numeric_reference("55296"), None);
        assert_eq!(parse_numeric_reference("99999999999"), None);
    }

    #[test]
    fn ampersand_before_semicolon_is_text() {
        assert_eq!(html_decode("a & b &amp; c"), "a & b & c");
        assert_eq!(html_decode("&&lt;"), "&<");
        assert_eq!(html_decode("trailing &"), "trailing &");
        assert_eq!(html_decode("&;"), "&;");
        assert_eq!(html_decode("&#;"), "&#;");
    }

    #[test]
    fn unchanged_input_is_borrowed() {
        assert!(matches!(html_encode("Hello, world!"), Cow::Borrowed(_)));
        assert!(matches!(html_decode("Hello, world! \"<>\u{2665}\u{e7}"), Cow::Borrowed(_)));
        assert!(matches!(html_encode("<"), Cow::Owned(_)));
    }

    #[test]
    fn writer_variants_append() {
        let mut out = String::from(">> ");
        html_encode_to("<a>", &mut out).unwrap();
        html_decode_to(" &lt;b&gt;", &mut out).unwrap();
        assert_eq!(out, ">> &lt;a&gt; <b>");
    }
}
