//! Local-maximum peak search over a magnitude spectrum

use crate::error::AnalysisError;
use num_complex::Complex;

/// One detected spectral peak
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    /// Center frequency of the peak bin
    pub frequency: f64,
    /// Coefficient magnitude at that bin
    pub amplitude: f64,
}

/// Find local maxima in a coefficient spectrum
///
/// # Arguments
/// * `hz` - Frequency per bin
/// * `coeffs` - Complex coefficient per bin, same length as `hz`
/// * `threshold` - Peak floor as a fraction of the DC-bin magnitude
///
/// # Returns
/// Peaks in increasing-frequency order; may be empty
///
/// A bin is a peak when its magnitude exceeds `|coeffs[0]| * threshold`
/// and strictly exceeds its four nearest neighbors. The 5-tap window
/// cannot be centered on the first two or last two bins, so those are
/// never reported. A signal with no DC offset makes `|coeffs[0]|` near
/// zero, and the resulting normalizer admits nearly any local maximum;
/// callers that need an absolute floor must bias their input.
pub fn find_peaks(
    hz: &[f64],
    coeffs: &[Complex<f64>],
    threshold: f64,
) -> Result<Vec<Peak>, AnalysisError> {
    let bins = coeffs.len();
    if hz.len() != bins {
        return Err(AnalysisError::InvalidSize(format!(
            "frequency axis has {} bins but the spectrum has {bins}",
            hz.len()
        )));
    }
    if bins < 5 {
        return Err(AnalysisError::InsufficientBins(bins));
    }

    let normalizer = coeffs[0].norm() * threshold;
    let mags: Vec<f64> = coeffs.iter().map(|c| c.norm()).collect();

    let mut peaks = Vec::new();
    for center in 2..bins - 2 {
        let m3 = mags[center];
        if m3 <= normalizer {
            continue;
        }
        let neighbors = [
            mags[center - 2],
            mags[center - 1],
            mags[center + 1],
            mags[center + 2],
        ];
        if neighbors.iter().all(|&m| m3 > m) {
            peaks.push(Peak {
                frequency: hz[center],
                amplitude: m3,
            });
        }
    }

    Ok(peaks)
}
