//! Boundary location on a block distribution.
//!
//! The article body is the maximal contiguous span straddling the
//! distribution peak where density stays at or above the threshold. Peak
//! search takes the first maximum; the start and end scans walk outward
//! from it until the series drops below the threshold, approximating the
//! steep-rise and steep-fall edges of the density curve.

/// An inclusive index range into the line sequence.
///
/// Invariant: `start <= peak <= end` for the peak the region was located
/// around. Distribution index `i` corresponds to line index `i` (the
/// window's first line is the anchor), so the range indexes lines directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// First line of the content region.
    pub start: usize,
    /// Last line of the content region, inclusive.
    pub end: usize,
}

/// Returns the index of the first maximum in `distribution`, or `None` if
/// the series is empty.
///
/// Ties keep the earliest-seen maximum (strict `>` comparison).
#[must_use]
pub fn find_peak(distribution: &[usize]) -> Option<usize> {
    let mut peak = 0;
    let mut max = *distribution.first()?;
    for (i, &value) in distribution.iter().enumerate().skip(1) {
        if value > max {
            max = value;
            peak = i;
        }
    }
    Some(peak)
}

/// Locates the threshold-bounded region around `peak`.
///
/// Scans backward from `peak - 1` to the first sample below `threshold`;
/// the region starts one past it (or at 0 if none). Scans forward from
/// `peak + 1` symmetrically; the region ends one before the first sample
/// below `threshold` (or at the last index if none).
#[must_use]
pub fn locate(distribution: &[usize], peak: usize, threshold: usize) -> Region {
    let start = distribution[..peak]
        .iter()
        .rposition(|&value| value < threshold)
        .map_or(0, |i| i + 1);

    let end = distribution[peak + 1..]
        .iter()
        .position(|&value| value < threshold)
        .map_or(distribution.len() - 1, |offset| peak + offset);

    Region { start, end }
}
