//! Character encoding detection and transcoding.
//!
//! Fetch collaborators hand over raw bytes; this module picks the charset
//! (byte-order mark first, then `<meta>` declarations in the first 1024
//! bytes, then UTF-8) and decodes lossily.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use tracing::debug;

/// Bytes inspected for a charset declaration.
const SNIFF_LEN: usize = 1024;

/// `<meta charset="...">` or `<meta http-equiv="Content-Type" content="...; charset=...">`.
#[allow(clippy::expect_used)]
static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+?charset\s*=\s*["']?([A-Za-z0-9_:.\-]+)"#).expect("META_CHARSET_RE regex")
});

/// Detect character encoding from HTML bytes.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(SNIFF_LEN)]);
    declared_charset(&head)
        .and_then(|label| Encoding::for_label(label.as_bytes()))
        .unwrap_or(UTF_8)
}

/// Charset label declared by the first `<meta>` that names one.
#[must_use]
pub fn declared_charset(head: &str) -> Option<String> {
    META_CHARSET_RE
        .captures(head)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
}

/// Transcode HTML bytes to a UTF-8 string.
///
/// Undecodable sequences become U+FFFD rather than errors.
///
/// # Examples
///
/// ```
/// use html_harvest::encoding::transcode_to_utf8;
///
/// let html = b"<html><body>Hello, World!</body></html>";
/// assert!(transcode_to_utf8(html).contains("Hello, World!"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    let (decoded, used, had_errors) = encoding.decode(html);
    if had_errors {
        debug!(encoding = used.name(), "replaced undecodable bytes while transcoding");
    }
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_charset_from_meta_charset() {
        assert_eq!(declared_charset(r#"<meta charset="utf-8">"#), Some("utf-8".to_string()));
        assert_eq!(declared_charset("<META CHARSET=UTF-8>"), Some("UTF-8".to_string()));
    }

    #[test]
    fn declared_charset_from_content_type() {
        let head = r#"<meta http-equiv="Content-Type" content="text/html; charset=ISO-8859-1">"#;
        assert_eq!(declared_charset(head), Some("ISO-8859-1".to_string()));
    }

    #[test]
    fn latin1_label_maps_to_windows1252() {
        let html = br#"<html><head><meta charset="ISO-8859-1"></head><body>Test</body></html>"#;
        // encoding_rs follows WHATWG, which aliases ISO-8859-1 to windows-1252
        assert_eq!(detect_encoding(html).name(), "windows-1252");
    }

    #[test]
    fn bom_wins_over_declaration() {
        let mut html = vec![0xEF, 0xBB, 0xBF];
        html.extend_from_slice(br#"<meta charset="windows-1252"><p>x</p>"#);
        assert_eq!(detect_encoding(&html), UTF_8);
    }

    #[test]
    fn default_is_utf8() {
        assert_eq!(detect_encoding(b"<html><body>Test</body></html>"), UTF_8);
    }

    #[test]
    fn transcode_windows1252_quotes() {
        let html = b"<html><head><meta charset=\"windows-1252\"></head><body>\x93Hi\x94 Caf\xE9</body></html>";
        let result = transcode_to_utf8(html);
        assert!(result.contains("\u{201C}Hi\u{201D} Café"));
    }

    #[test]
    fn invalid_utf8_is_replaced_not_fatal() {
        let result = transcode_to_utf8(b"<p>Price \xFF\xFE list</p>");
        assert!(result.contains("Price"));
        assert!(result.contains("list"));
        assert!(result.contains('\u{FFFD}'));
    }
}
