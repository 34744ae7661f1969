//! Configuration options for body text extraction.
//!
//! The `Options` struct holds the tunable parameters of the line-block
//! distribution algorithm. They are an explicit value passed into every
//! call rather than process-wide mutable globals behind a setter, so
//! "configure once, reuse many times" is a shared `&Options` with no
//! synchronization hazard.

/// Configuration options for body text extraction.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for the algorithm's standard settings. No field is validated or
/// bounds-checked.
///
/// # Example
///
/// ```rust
/// use densitext::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     threshold: 120,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Number of consecutive lines summed into one distribution sample.
    ///
    /// Default: `3`
    pub block_width: usize,

    /// Minimum summed character count for a sample to count as inside the
    /// content region.
    ///
    /// Raising the threshold improves precision (cleanly isolates dense
    /// blocks, drops block-length noise like headline clusters) at the cost
    /// of recall; lowering it captures one-sentence bodies but lets more
    /// noise in.
    ///
    /// Default: `86`
    pub threshold: usize,

    /// Keep intra-line whitespace in the extracted output.
    ///
    /// The line-block algorithm strips every whitespace character from each
    /// line before computing density and emits those same stripped lines,
    /// so words within an output line run together. That stays the default
    /// for fidelity. When this flag is set, the output uses copies with
    /// only leading/trailing whitespace trimmed instead; the density
    /// computation is unaffected either way.
    ///
    /// Default: `false`
    pub preserve_whitespace: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            block_width: 3,
            threshold: 86,
            preserve_whitespace: false,
        }
    }
}
