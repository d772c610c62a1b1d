use pretty_assertions::assert_eq;
use proptest::prelude::*;
use wabi_util::web_utility::{
    ArgumentError, html_decode, html_decode_to, html_encode, html_encode_to, url_decode, url_decode_bytes,
    url_decode_to_bytes, url_encode, url_encode_bytes, url_encode_to_bytes,
};

const MIXED: &str = "/\\\"\tHello! \u{2665}?/\\\"\tWorld! \u{2665}?\u{2665}";

// ─── HTML decoding ───────────────────────────────────────────────────────────

#[test]
fn html_decode_named_and_numeric_references() {
    let input = "Hello! &apos;&quot;&lt;&amp;&gt;\u{2665}&hearts;\u{e7}&#xe7;&#231;";
    let expected = "Hello! '\"<&>\u{2665}\u{2665}\u{e7}\u{e7}\u{e7}";

    assert_eq!(html_decode(input), expected);
}

#[test]
fn html_decode_missing_value() {
    let missing: Option<&str> = None;
    assert_eq!(missing.map(html_decode), None);
}

#[test]
fn html_decode_plain_text_is_unchanged() {
    let input = "Hello, world! \"<>\u{2665}\u{e7}";
    assert_eq!(html_decode(input), input);
}

#[test]
fn html_decode_supplementary_plane() {
    assert_eq!(html_decode("&#144308;"), "\u{233b4}");
    assert_eq!(html_decode("&#x233B4;"), "\u{233b4}");
}

#[test]
fn html_decode_rejected_references_pass_through() {
    assert_eq!(html_decode("&nosuch; &#xZZ; &#1114112; &#55357;"), "&nosuch; &#xZZ; &#1114112; &#55357;");
    assert_eq!(html_decode("AT&T &copy; 2024"), "AT&T \u{a9} 2024");
}

#[test]
fn html_decode_greek_and_symbols() {
    assert_eq!(html_decode("&Omega;&omega;&euro;&nbsp;&rArr;"), "\u{3a9}\u{3c9}\u{20ac}\u{a0}\u{21d2}");
}

// ─── HTML encoding ───────────────────────────────────────────────────────────

#[test]
fn html_encode_single_quote() {
    assert_eq!(html_encode("'"), "&#39;");
}

#[test]
fn html_encode_special_characters() {
    let input = "Hello! '\"<&>\u{2665}\u{e7} World";
    let expected = "Hello! &#39;&quot;&lt;&amp;&gt;\u{2665}&#231; World";

    assert_eq!(html_encode(input), expected);
}

#[test]
fn html_encode_missing_value() {
    let missing: Option<&str> = None;
    assert_eq!(missing.map(html_encode), None);
}

#[test]
fn html_encode_plain_text_is_unchanged() {
    assert_eq!(html_encode("Hello, world!"), "Hello, world!");
}

#[test]
fn html_encode_supplementary_plane() {
    assert_eq!(html_encode("\u{233b4}"), "&#144308;");
}

#[test]
fn html_encode_latin1_range_boundaries() {
    assert_eq!(html_encode("\u{9f}\u{a0}\u{ff}\u{100}"), "\u{9f}&#160;&#255;\u{100}");
}

#[test]
fn html_writers_accept_any_fmt_write() {
    let mut out = String::new();
    html_encode_to("a<b", &mut out).unwrap();
    out.push('|');
    html_decode_to("a&lt;b", &mut out).unwrap();
    assert_eq!(out, "a&lt;b|a<b");
}

// ─── URL text codec ──────────────────────────────────────────────────────────

#[test]
fn url_encode_mixed_text() {
    let expected = "%2F%5C%22%09Hello!+%E2%99%A5%3F%2F%5C%22%09World!+%E2%99%A5%3F%E2%99%A5";
    assert_eq!(url_encode(MIXED), expected);
}

#[test]
fn url_encode_single_quote() {
    assert_eq!(url_encode("'"), "%27");
}

#[test]
fn url_encode_safe_characters_are_kept() {
    assert_eq!(url_encode("AZaz09-_.!*()"), "AZaz09-_.!*()");
}

#[test]
fn url_missing_values() {
    let missing: Option<&str> = None;
    assert_eq!(missing.map(url_encode), None);
    assert_eq!(missing.map(url_decode), None);
}

#[test]
fn url_round_trips() {
    for url in ["'", "http://www.microsoft.com", MIXED] {
        let encoded = url_encode(url);
        assert_eq!(url_decode(&encoded), url);
    }
}

#[test]
fn url_decode_accepts_lowercase_hex() {
    assert_eq!(url_decode("%e2%99%a5"), "\u{2665}");
}

// ─── URL byte codec ──────────────────────────────────────────────────────────

#[test]
fn url_encode_to_bytes_argument_validation() {
    let buf: &[u8] = &[0u8; 1];

    assert_eq!(url_encode_to_bytes(None, 0, 0), Ok(None));
    assert_eq!(url_encode_to_bytes(None, 0, 1), Err(ArgumentError::Null { param: "bytes" }));
    assert_eq!(url_encode_to_bytes(Some(buf), -1, 1), Err(ArgumentError::OutOfRange { param: "offset" }));
    assert_eq!(url_encode_to_bytes(Some(buf), 2, 1), Err(ArgumentError::OutOfRange { param: "offset" }));
    assert_eq!(url_encode_to_bytes(Some(buf), 0, -1), Err(ArgumentError::OutOfRange { param: "count" }));
    assert_eq!(url_encode_to_bytes(Some(buf), 0, 3), Err(ArgumentError::OutOfRange { param: "count" }));
}

#[test]
fn url_decode_to_bytes_argument_validation() {
    let buf: &[u8] = &[0u8; 1];

    assert_eq!(url_decode_to_bytes(None, 0, 0), Ok(None));
    assert_eq!(url_decode_to_bytes(None, 0, 1), Err(ArgumentError::Null { param: "bytes" }));
    assert_eq!(url_decode_to_bytes(Some(buf), -1, 1), Err(ArgumentError::OutOfRange { param: "offset" }));
    assert_eq!(url_decode_to_bytes(Some(buf), 2, 1), Err(ArgumentError::OutOfRange { param: "offset" }));
    assert_eq!(url_decode_to_bytes(Some(buf), 0, -1), Err(ArgumentError::OutOfRange { param: "count" }));
    assert_eq!(url_decode_to_bytes(Some(buf), 0, 3), Err(ArgumentError::OutOfRange { param: "count" }));
}

#[test]
fn url_bytes_round_trips() {
    for url in ["'", "http://www.microsoft.com", MIXED] {
        let input = url.as_bytes();
        let len = isize::try_from(input.len()).unwrap();
        let encoded = url_encode_to_bytes(Some(input), 0, len).unwrap().unwrap();
        let encoded_len = isize::try_from(encoded.len()).unwrap();
        let decoded = url_decode_to_bytes(Some(encoded.as_slice()), 0, encoded_len).unwrap().unwrap();
        assert_eq!(decoded, input);
    }
}

#[test]
fn url_bytes_window() {
    let buf: &[u8] = b"__a b__";
    assert_eq!(url_encode_to_bytes(Some(buf), 2, 3), Ok(Some(b"a+b".to_vec())));
    assert_eq!(url_decode_to_bytes(Some(&b"xx%41+yy"[..]), 2, 4), Ok(Some(b"A ".to_vec())));
    assert_eq!(url_encode_to_bytes(Some(buf), 7, 0), Ok(Some(Vec::new())));
}

#[test]
fn argument_error_messages() {
    assert_eq!(
        ArgumentError::OutOfRange { param: "count" }.to_string(),
        "specified argument was out of the range of valid values (parameter 'count')"
    );
}

// ─── Round-trip laws ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn html_round_trip(text in any::<String>()) {
        let encoded = html_encode(&text);
        prop_assert_eq!(html_decode(&encoded), text.as_str());
    }

    #[test]
    fn html_output_has_no_markup_characters(text in any::<String>()) {
        let encoded = html_encode(&text);
        prop_assert!(!encoded.contains(['<', '>', '"', '\'']));
    }

    #[test]
    fn url_round_trip(text in any::<String>()) {
        let encoded = url_encode(&text);
        prop_assert!(encoded.is_ascii());
        prop_assert_eq!(url_decode(&encoded), text.as_str());
    }

    #[test]
    fn url_bytes_round_trip(bytes in proptest::collection::vec(any::<u8>(), 0..512)) {
        let encoded = url_encode_bytes(&bytes);
        prop_assert_eq!(&*url_decode_bytes(&encoded), bytes.as_slice());
    }
}
