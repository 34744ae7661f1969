//! Pipeline orchestration.
//!
//! Composes the three stages — sanitize, profile, locate — and reassembles
//! the selected lines into the extracted body text.

use crate::boundary;
use crate::density;
use crate::error::{Error, Result};
use crate::options::Options;
use crate::sanitize::sanitize;

/// Runs the full extraction pipeline over one document.
pub(crate) fn extract_text(html: &str, options: &Options) -> Result<String> {
    let text = sanitize(html);
    let profile = density::profile(&text, options.block_width);

    if profile.distribution.is_empty() {
        return Err(Error::InsufficientInput {
            lines: profile.stripped_lines.len(),
            block_width: options.block_width,
        });
    }

    // Non-empty by the check above
    let peak = boundary::find_peak(&profile.distribution).ok_or(Error::NoContent)?;
    if profile.distribution[peak] == 0 {
        // Sanitization left nothing; every window is empty.
        return Err(Error::NoContent);
    }

    let region = boundary::locate(&profile.distribution, peak, options.threshold);

    if cfg!(debug_assertions) {
        eprintln!(
            "DEBUG: peak {} (value {}), region [{}, {}] of {} lines",
            peak,
            profile.distribution[peak],
            region.start,
            region.end,
            profile.stripped_lines.len()
        );
    }

    let lines = if options.preserve_whitespace {
        &profile.trimmed_lines
    } else {
        &profile.stripped_lines
    };

    let selected = &lines[region.start..=region.end];
    let capacity: usize = selected.iter().map(|line| line.len() + 1).sum();
    let mut output = String::with_capacity(capacity);
    for line in selected {
        output.push_str(line);
        output.push('\n');
    }
    Ok(output)
}
