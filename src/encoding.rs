//! Character encoding detection and transcoding.
//!
//! The byte entry points accept documents in whatever encoding the server
//! delivered. The charset is sniffed from meta tags in the document head
//! and the bytes are decoded to UTF-8 before the pipeline runs.

#![allow(clippy::expect_used)]

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;
use std::sync::LazyLock;

/// Match `<meta charset="...">`
static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([^"'\s>]+)"#).expect("META_CHARSET regex")
});

/// Match `<meta http-equiv="Content-Type" content="...; charset=...">`
static HTTP_EQUIV_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?i)<meta[^>]+http-equiv\s*=\s*["']?content-type["']?[^>]+content\s*=\s*["']?[^"'>]*;\s*charset\s*=\s*([^"'\s>]+)"#,
    )
    .expect("HTTP_EQUIV_CHARSET regex")
});

/// Detects the character encoding declared in the first 1024 bytes.
///
/// Tries `<meta charset="...">`, then the `http-equiv` Content-Type form,
/// and falls back to UTF-8 when neither declares a known label.
#[must_use]
pub fn detect_encoding(html: &[u8]) -> &'static Encoding {
    let head = String::from_utf8_lossy(&html[..html.len().min(1024)]);

    for pattern in [&META_CHARSET, &HTTP_EQUIV_CHARSET] {
        let label = pattern.captures(&head).and_then(|c| c.get(1));
        if let Some(encoding) = label.and_then(|m| Encoding::for_label(m.as_str().as_bytes())) {
            return encoding;
        }
    }

    UTF_8
}

/// Transcodes HTML bytes to a UTF-8 string.
///
/// Decoding is lossy: bytes invalid in the detected encoding become the
/// Unicode replacement character instead of an error.
///
/// # Examples
///
/// ```
/// use densitext::encoding::transcode_to_utf8;
///
/// let html = b"<html><body>Hello, World!</body></html>";
/// assert!(transcode_to_utf8(html).contains("Hello, World!"));
/// ```
#[must_use]
pub fn transcode_to_utf8(html: &[u8]) -> String {
    let encoding = detect_encoding(html);
    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }
    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}
