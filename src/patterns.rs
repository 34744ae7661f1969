//! Compiled regex patterns for HTML sanitization.
//!
//! All patterns are compiled once at startup using `LazyLock`. The `(?is)`
//! flags make matching case-insensitive and let `.` cross newlines, so
//! multi-line constructs (comments, script bodies) are removed as whole
//! units. Application order lives in the `sanitize` module and matters:
//! blocks with inner text come before generic tag stripping, entities are
//! replaced before tags.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Matches `<!DOCTYPE ...>` declarations.
pub static DOCTYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<!DOCTYPE.*?>").expect("DOCTYPE regex"));

/// Matches HTML comments, contents included.
pub static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<!--.*?-->").expect("COMMENT regex"));

/// Matches whole `<script>` blocks, contents included.
pub static SCRIPT_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script.*?>.*?</script>").expect("SCRIPT_BLOCK regex"));

/// Matches whole `<style>` blocks, contents included.
pub static STYLE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style.*?>.*?</style>").expect("STYLE_BLOCK regex"));

/// Matches HTML character and numeric entities with 2–5 characters between
/// the delimiters (`&nbsp;`, `&#160;`, ...). Replaced with a space, not
/// deleted, so adjacent words stay separated.
pub static ENTITY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&.{2,5};|&#.{2,5};").expect("ENTITY regex"));

/// Matches any remaining tag. Applied last, after block constructs and
/// entities are gone.
pub static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<.*?>").expect("TAG regex"));
