//! HTML sanitization.
//!
//! Strips everything that cannot be body text, leaving plain-text lines for
//! the density profiler. This is regex-based by design, not an HTML parser:
//! the approximation is cheap, handles the overwhelming majority of real
//! pages, and degrades gracefully on malformed markup (an unterminated
//! construct simply fails to match and its text survives to be scored).

use crate::patterns::{COMMENT, DOCTYPE, ENTITY, SCRIPT_BLOCK, STYLE_BLOCK, TAG};

/// Strips non-content markup from raw HTML, returning plain text.
///
/// Removal order matters: comments, script blocks, and style blocks go
/// first so their inner text never leaks past generic tag stripping, and
/// entities are replaced with a single space (preserving word separation)
/// before the final `<...>` pass.
///
/// # Example
///
/// ```rust
/// use densitext::sanitize::sanitize;
///
/// let html = "<html><!-- c --><script>var x=1;</script><p>Hello&nbsp;World</p></html>";
/// assert_eq!(sanitize(html), "Hello World");
/// ```
#[must_use]
pub fn sanitize(html: &str) -> String {
    let text = DOCTYPE.replace_all(html, "");
    let text = COMMENT.replace_all(&text, "");
    let text = SCRIPT_BLOCK.replace_all(&text, "");
    let text = STYLE_BLOCK.replace_all(&text, "");
    let text = ENTITY.replace_all(&text, " ");
    let text = TAG.replace_all(&text, "");
    text.into_owned()
}
