//! Frequency-domain mapping and Fourier-series coefficient scaling

use crate::error::AnalysisError;
use num_complex::Complex;

/// Frequency axis for a transform of `n` samples spanning `time_span`
///
/// # Arguments
/// * `time_span` - Duration covered by the samples, `n * dt`
/// * `n` - Number of time-domain samples
///
/// # Returns
/// `n/2 + 1` strictly increasing frequencies `x[i] = i / time_span`, from
/// DC up to the Nyquist frequency `n / (2 * time_span)`
pub fn fdomain(time_span: f64, n: usize) -> Result<Vec<f64>, AnalysisError> {
    if n == 0 {
        return Err(AnalysisError::InvalidSize(
            "frequency axis needs at least one sample".into(),
        ));
    }
    if time_span <= 0.0 {
        return Err(AnalysisError::DegenerateTimeSpan(time_span));
    }

    let df = 1.0 / time_span;
    Ok((0..=n / 2).map(|i| i as f64 * df).collect())
}

/// Fourier-series coefficients of a real-valued signal's spectrum
///
/// # Arguments
/// * `spectrum` - Complex spectrum of `n >= 2` values
///
/// # Returns
/// `n/2 + 1` coefficients `C[i] = (2/n) * spectrum[i]`. `Re(C[i])` is the
/// cosine amplitude and `-Im(C[i])` the sine amplitude at bin `i`.
///
/// The first and last coefficients are halved: the DC and Nyquist bins
/// have no mirror-image counterpart in a real signal's series, so they
/// are not doubled.
pub fn fourier_coeffs(spectrum: &[Complex<f64>]) -> Result<Vec<Complex<f64>>, AnalysisError> {
    let n = spectrum.len();
    if n < 2 {
        return Err(AnalysisError::InvalidSize(format!(
            "coefficient scaling needs at least 2 spectrum values (got {n})"
        )));
    }

    let size = n / 2 + 1;
    let scale = 2.0 / n as f64;
    let mut coeffs: Vec<Complex<f64>> =
        spectrum[..size].iter().map(|&bin| bin * scale).collect();

    coeffs[0] /= 2.0;
    coeffs[size - 1] /= 2.0;

    Ok(coeffs)
}
