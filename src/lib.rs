//! # densitext
//!
//! Density-based web page body text extraction.
//!
//! This library extracts the main textual content of an HTML document using
//! the line-block distribution algorithm: markup is stripped to plain-text
//! lines, a sliding-window character-count series is computed over them, and
//! the contiguous region around the series peak (bounded by a density
//! threshold) is returned as the article body. Navigation, boilerplate,
//! scripts, and styles fall outside the dense region and are discarded.
//!
//! ## Quick Start
//!
//! ```rust
//! use densitext::parse;
//!
//! let html = "<html><body>\n<a href=\"/\">Home</a>\n\
//!     <p>Paragraph one of the article body, long enough to stand out from\n\
//!     the navigation noise that surrounds it on a real page.</p>\n\
//!     <p>Paragraph two keeps the dense run of text going so the block\n\
//!     distribution stays above the threshold across the region.</p>\n\
//!     <p>Paragraph three closes out the body before the footer links.</p>\n\
//!     <a href=\"/about\">About</a>\n</body></html>";
//!
//! let body = parse(html)?;
//! assert!(body.contains("Paragraphone"));
//! # Ok::<(), densitext::Error>(())
//! ```
//!
//! ## Known approximation
//!
//! HTML stripping is regex-based, not a real parser. Deeply nested or
//! malformed markup can leak fragments into the line sequence or over-strip
//! text; quality degrades gracefully but is not guaranteed. Parsing the DOM
//! is explicitly out of scope for this algorithm.
//!
//! Note that by default the emitted lines have *all* whitespace removed:
//! the line-block algorithm computes density over stripped lines and emits
//! those same stripped lines. Set
//! [`Options::preserve_whitespace`] to keep intra-line spacing.

mod error;
mod extract;
mod options;
mod patterns;

/// Regex-based HTML sanitization (comments, scripts, styles, entities, tags).
pub mod sanitize;

/// Line splitting, whitespace stripping, and block-distribution computation.
pub mod density;

/// Peak search and threshold-bounded region location on a distribution.
pub mod boundary;

/// Character encoding detection and transcoding.
pub mod encoding;

// Public API - re-exports
pub use error::{Error, Result};
pub use options::Options;

/// Extracts the main body text from an HTML document using default options.
///
/// Runs the full pipeline: sanitize → block distribution → boundary search →
/// line reassembly. Returns the extracted lines joined by `\n`, with a
/// trailing `\n` after the last line.
///
/// # Errors
///
/// Returns [`Error::InsufficientInput`] when the document has too few lines
/// for the density window, and [`Error::NoContent`] when sanitization leaves
/// no text to locate.
///
/// # Example
///
/// ```rust
/// use densitext::parse;
///
/// // Plain text passes through the sanitizer untouched.
/// let html = "first line of text here\nsecond line of text here\n\
///     third line of text here\nfourth line of text here\nfifth line\n";
/// let body = parse(html)?;
/// assert!(body.ends_with('\n'));
/// # Ok::<(), densitext::Error>(())
/// ```
pub fn parse(html: &str) -> Result<String> {
    parse_with_options(html, &Options::default())
}

/// Extracts the main body text from an HTML document with custom options.
///
/// # Example
///
/// ```rust
/// use densitext::{parse_with_options, Options};
///
/// let options = Options {
///     threshold: 40,
///     preserve_whitespace: true,
///     ..Options::default()
/// };
/// let html = "nav\n<p>A reasonably long opening paragraph of body text.</p>\n\
///     <p>A second paragraph that keeps the block density high.</p>\n\
///     <p>A third paragraph before the boilerplate resumes.</p>\nfooter\n";
/// let body = parse_with_options(html, &options)?;
/// assert!(body.contains("opening paragraph"));
/// # Ok::<(), densitext::Error>(())
/// ```
pub fn parse_with_options(html: &str, options: &Options) -> Result<String> {
    extract::extract_text(html, options)
}

/// Extracts body text from HTML bytes with automatic encoding detection.
///
/// Accepts the document as raw bytes, detects the character encoding from
/// meta tags (`<meta charset="...">` or an `http-equiv` Content-Type),
/// converts to UTF-8, and runs the normal extraction pipeline. Invalid
/// characters are replaced with � rather than causing errors.
///
/// # Example
///
/// ```rust
/// use densitext::parse_bytes;
///
/// let html = b"<meta charset=\"ISO-8859-1\">\nCaf\xE9 culture, row one.\n\
///     Caf\xE9 culture, row two.\nCaf\xE9 culture, row three.\n\
///     Caf\xE9 culture, row four.\n";
/// let body = parse_bytes(html)?;
/// assert!(body.contains("Caf\u{e9}"));
/// # Ok::<(), densitext::Error>(())
/// ```
pub fn parse_bytes(html: &[u8]) -> Result<String> {
    let html_str = encoding::transcode_to_utf8(html);
    parse(&html_str)
}

/// Extracts body text from HTML bytes with custom options and automatic
/// encoding detection.
pub fn parse_bytes_with_options(html: &[u8], options: &Options) -> Result<String> {
    let html_str = encoding::transcode_to_utf8(html);
    parse_with_options(&html_str, options)
}
