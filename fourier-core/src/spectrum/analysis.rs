//! Single-shot spectral analysis
//!
//! Pairs the frequency axis with the scaled Fourier coefficients for one
//! contiguous run of samples.

use crate::error::AnalysisError;
use crate::spectrum::domain::{fdomain, fourier_coeffs};
use crate::spectrum::transform::{fft, to_complex};
use num_complex::Complex;

/// Frequency-domain view of one analyzed sample run
#[derive(Debug, Clone)]
pub struct Spectrum {
    /// Frequencies for each bin, DC up to Nyquist
    pub frequencies: Vec<f64>,
    /// Fourier-series coefficient per bin
    pub coefficients: Vec<Complex<f64>>,
}

impl Spectrum {
    /// Magnitude `|C[i]|` per bin
    pub fn magnitudes(&self) -> Vec<f64> {
        self.coefficients.iter().map(|c| c.norm()).collect()
    }

    /// Number of frequency bins
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }
}

/// Analyze one uniformly sampled run of real values
///
/// # Arguments
/// * `samples` - Time-domain values, uniformly spaced
/// * `dt` - Sampling interval
///
/// # Returns
/// [`Spectrum`] with `len/2 + 1` bins
pub fn analyze_series(samples: &[f64], dt: f64) -> Result<Spectrum, AnalysisError> {
    let n = samples.len();
    let frequencies = fdomain(n as f64 * dt, n)?;
    let spectrum = fft(&to_complex(samples))?;
    let coefficients = fourier_coeffs(&spectrum)?;

    Ok(Spectrum {
        frequencies,
        coefficients,
    })
}
