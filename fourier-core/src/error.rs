//! Error types for spectral computation
//!
//! Every operation checks its preconditions locally and fails fast rather
//! than emitting NaN or degenerate data.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// Empty input, zero stride, or mismatched sequence lengths.
    #[error("invalid size: {0}")]
    InvalidSize(String),

    /// A non-positive time span would put zero in a denominator.
    #[error("time span must be positive (got {0})")]
    DegenerateTimeSpan(f64),

    /// The 5-tap peak search cannot run on fewer than 5 bins.
    #[error("peak detection needs at least 5 frequency bins (got {0})")]
    InsufficientBins(usize),

    #[error("window of {window} samples exceeds the {available} available samples")]
    WindowOutOfRange { window: usize, available: usize },

    /// The batch loop observed its cancellation flag between windows.
    #[error("batch analysis cancelled")]
    Cancelled,
}
