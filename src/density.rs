//! Line splitting and block-distribution computation.
//!
//! The density signal is simple on purpose: strip all whitespace from each
//! line, then sum character counts over a short sliding window of
//! consecutive lines. Boilerplate and navigation lines are short once
//! whitespace is gone, while body paragraphs stay long, so the series peaks
//! over the article body without any tokenization or language knowledge.
//! Lengths are Unicode scalar values (`chars().count()`), the same
//! convention used for every text-length threshold in this crate.

/// Per-line views of the sanitized input plus its block distribution.
#[derive(Debug, Clone)]
pub struct LineProfile {
    /// Lines with leading/trailing whitespace trimmed, intra-line
    /// whitespace kept. Used for output when
    /// [`Options::preserve_whitespace`](crate::Options::preserve_whitespace)
    /// is set.
    pub trimmed_lines: Vec<String>,

    /// Lines with every whitespace character removed. The density signal,
    /// and the default output lines.
    pub stripped_lines: Vec<String>,

    /// Sliding-window character-count series: sample `i` is the summed
    /// length of `stripped_lines[i..i + block_width]`. Empty when the input
    /// has `block_width` lines or fewer.
    pub distribution: Vec<usize>,
}

/// Splits `text` into lines and computes the block distribution.
///
/// Accepts both `\n` and `\r\n` terminators. Sample `i` covers lines
/// `[i, i + block_width)`, so the distribution has
/// `lines - block_width` entries; callers must treat an empty
/// distribution as a failure rather than search it for a peak.
#[must_use]
pub fn profile(text: &str, block_width: usize) -> LineProfile {
    let trimmed_lines: Vec<String> = text.lines().map(|line| line.trim().to_owned()).collect();
    let stripped_lines: Vec<String> = trimmed_lines
        .iter()
        .map(|line| strip_whitespace(line))
        .collect();

    let samples = stripped_lines.len().saturating_sub(block_width);
    let mut distribution = Vec::with_capacity(samples);
    for i in 0..samples {
        let chars: usize = stripped_lines[i..i + block_width]
            .iter()
            .map(|line| line.chars().count())
            .sum();
        distribution.push(chars);
    }

    LineProfile {
        trimmed_lines,
        stripped_lines,
        distribution,
    }
}

/// Removes every whitespace character from a line, not just the ends.
#[must_use]
pub fn strip_whitespace(line: &str) -> String {
    line.chars().filter(|c| !c.is_whitespace()).collect()
}
