//! Sliding-window batch analysis
//!
//! Drives the transform and peak search across overlapping windows of a
//! longer sample sequence, tagging each window with its time range.

use crate::batch::peaks::{find_peaks, Peak};
use crate::error::AnalysisError;
use crate::spectrum::domain::{fdomain, fourier_coeffs};
use crate::spectrum::transform::{fft, to_complex};
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::debug;

/// Batch analysis parameters
///
/// Passed by value into the analyzer; there is no process-wide
/// configuration state.
#[derive(Debug, Clone, Copy)]
pub struct BatchConfig {
    /// Samples per window
    pub window_size: usize,
    /// Sample offset between consecutive window starts
    pub stride: usize,
    /// Peak floor as a fraction of each window's DC-bin magnitude
    pub threshold: f64,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            window_size: 256,
            stride: 128,
            threshold: 0.1,
        }
    }
}

/// Peaks found in one analyzed window
#[derive(Debug, Clone, PartialEq)]
pub struct WindowRecord {
    /// Time of the window's first sample
    pub start_time: f64,
    /// Time of the window's last sample
    pub end_time: f64,
    /// Detected peaks in increasing-frequency order
    pub peaks: Vec<Peak>,
}

/// Sliding-window analyzer over a full sample sequence
///
/// The input must be uniformly sampled at `dt` for its whole length;
/// the caller verifies that once, it is not re-checked per window.
pub struct BatchAnalyzer {
    config: BatchConfig,
}

impl BatchAnalyzer {
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Analyze every window of the sequence
    ///
    /// # Arguments
    /// * `samples` - Full uniformly sampled sequence
    /// * `t0` - Time of the first sample
    /// * `dt` - Sampling interval
    ///
    /// # Returns
    /// One [`WindowRecord`] per window, in window order; the window count
    /// is `(samples.len() - window_size) / stride + 1`
    pub fn run(
        &self,
        samples: &[f64],
        t0: f64,
        dt: f64,
    ) -> Result<Vec<WindowRecord>, AnalysisError> {
        self.run_inner(samples, t0, dt, None)
    }

    /// Like [`run`](Self::run), but checks `cancel` between windows and
    /// returns [`AnalysisError::Cancelled`] once it is set
    pub fn run_cancellable(
        &self,
        samples: &[f64],
        t0: f64,
        dt: f64,
        cancel: &AtomicBool,
    ) -> Result<Vec<WindowRecord>, AnalysisError> {
        self.run_inner(samples, t0, dt, Some(cancel))
    }

    fn run_inner(
        &self,
        samples: &[f64],
        t0: f64,
        dt: f64,
        cancel: Option<&AtomicBool>,
    ) -> Result<Vec<WindowRecord>, AnalysisError> {
        let available = samples.len();
        let BatchConfig {
            window_size,
            stride,
            threshold,
        } = self.config;

        if stride == 0 {
            return Err(AnalysisError::InvalidSize(
                "window stride must be at least 1".into(),
            ));
        }
        if window_size == 0 || window_size > available {
            return Err(AnalysisError::WindowOutOfRange {
                window: window_size,
                available,
            });
        }

        // The axis depends only on window size and dt, so one axis serves
        // every window. This also rejects dt <= 0 up front.
        let hz = fdomain(window_size as f64 * dt, window_size)?;

        let mut records = Vec::with_capacity((available - window_size) / stride + 1);
        let mut start = 0;
        while start + window_size <= available {
            if let Some(flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    debug!(windows = records.len(), "batch analysis cancelled");
                    return Err(AnalysisError::Cancelled);
                }
            }

            let window = &samples[start..start + window_size];
            let spectrum = fft(&to_complex(window))?;
            let coeffs = fourier_coeffs(&spectrum)?;
            let peaks = find_peaks(&hz, &coeffs, threshold)?;

            records.push(WindowRecord {
                start_time: t0 + start as f64 * dt,
                end_time: t0 + (start + window_size - 1) as f64 * dt,
                peaks,
            });
            start += stride;
        }

        debug!(
            windows = records.len(),
            window_size, stride, "batch analysis complete"
        );
        Ok(records)
    }
}
