//! Character encoding detection and transcoding.
//!
//! Pages arrive from the fetcher as raw bytes. Before parsing they are
//! decoded to UTF-8 using, in order: a byte order mark, the `charset`
//! parameter of the HTTP `Content-Type` header, a `charset` declaration in
//! the first kilobyte of markup, and finally UTF-8.

use encoding_rs::{Encoding, UTF_8};

use crate::patterns::{CHARSET_META, CONTENT_TYPE_CHARSET};

/// How much of the document is searched for a `<meta>` charset declaration.
const META_SCAN_LIMIT: usize = 1024;

/// Detect the character encoding of an HTML page.
#[must_use]
pub fn detect_encoding(html: &[u8], content_type: Option<&str>) -> &'static Encoding {
    if let Some((encoding, _bom_len)) = Encoding::for_bom(html) {
        return encoding;
    }

    if let Some(encoding) = content_type.and_then(charset_from_content_type) {
        return encoding;
    }

    let head = String::from_utf8_lossy(&html[..html.len().min(META_SCAN_LIMIT)]);
    CHARSET_META
        .captures(&head)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Decode an HTML page to a UTF-8 string.
///
/// Malformed sequences are replaced with U+FFFD rather than failing.
///
/// # Examples
///
/// ```
/// use rs_whatif::encoding::decode_html;
///
/// let html = b"<html><head><meta charset=\"windows-1251\"></head><body>\xcf\xf0\xe8\xe2\xe5\xf2</body></html>";
/// assert!(decode_html(html, None).contains("Привет"));
/// ```
#[must_use]
pub fn decode_html(html: &[u8], content_type: Option<&str>) -> String {
    let encoding = detect_encoding(html, content_type);
    // `decode` strips a BOM matching any encoding, not only the detected one.
    let (decoded, _used, _had_errors) = encoding.decode(html);
    decoded.into_owned()
}

fn charset_from_content_type(content_type: &str) -> Option<&'static Encoding> {
    CONTENT_TYPE_CHARSET
        .captures(content_type)
        .and_then(|c| c.get(1))
        .and_then(|m| Encoding::for_label(m.as_str().as_bytes()))
}
