//! Compiled regex patterns shared by the converter.
//!
//! All patterns are compiled once at first use with `LazyLock`.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Text Patterns
// =============================================================================

/// A maximal run of HTML whitespace: space, tab, newline, carriage return,
/// vertical tab and form feed.
pub static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\n\r\x0B\x0C]+").expect("WHITESPACE_RUN regex"));

/// Characters removed from a title when it is turned into a slug.
pub static SLUG_STRIPPED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.,'!$:]").expect("SLUG_STRIPPED regex"));

// =============================================================================
// Charset Patterns
// =============================================================================

/// `<meta charset="...">`
pub static CHARSET_META: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>/;]+)"#).expect("CHARSET_META regex")
});

/// `charset=...` parameter of a `Content-Type` value, either from the HTTP
/// header or from a `<meta http-equiv>` tag.
pub static CONTENT_TYPE_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i);\s*charset\s*=\s*["']?([^"'\s;>]+)"#).expect("CONTENT_TYPE_CHARSET regex")
});
