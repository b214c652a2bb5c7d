//! Naive and fast discrete Fourier transforms
//!
//! The naive transform is the correctness reference; the fast path splits
//! even- and odd-indexed samples recursively and falls back to the naive
//! algorithm whenever a recursion level hits an odd size.

use crate::error::AnalysisError;
use num_complex::Complex;
use std::f64::consts::PI;

/// Lift real samples into the complex plane for transforming.
pub fn to_complex(samples: &[f64]) -> Vec<Complex<f64>> {
    samples.iter().map(|&v| Complex::new(v, 0.0)).collect()
}

/// Naive discrete Fourier transform
///
/// # Arguments
/// * `x` - Time-domain samples, any length >= 1
///
/// # Returns
/// Complex spectrum `X[k] = sum_i x[i] * e^(-2*pi*I*k*i/N)`, same length
/// as the input
///
/// O(N^2). Valid for every size, which makes it both the correctness
/// reference for [`fft`] and its fallback at odd sizes.
pub fn dft(x: &[Complex<f64>]) -> Result<Vec<Complex<f64>>, AnalysisError> {
    let n = x.len();
    if n == 0 {
        return Err(AnalysisError::InvalidSize(
            "transform input is empty".into(),
        ));
    }

    let mut spectrum = vec![Complex::new(0.0, 0.0); n];
    for (k, bin) in spectrum.iter_mut().enumerate() {
        for (i, &sample) in x.iter().enumerate() {
            let angle = -2.0 * PI * (k as f64) * (i as f64) / (n as f64);
            *bin += sample * Complex::from_polar(1.0, angle);
        }
    }

    Ok(spectrum)
}

/// Fast Fourier transform (recursive radix-2 decimation in time)
///
/// # Arguments
/// * `x` - Time-domain samples, any length >= 1
///
/// # Returns
/// The same spectrum as [`dft`], as a freshly owned vector
///
/// O(N log N) for power-of-two sizes. An odd size > 1 cannot be split in
/// half, so that recursion level degrades to the O(N^2) naive transform;
/// the values still match [`dft`] to floating-point tolerance.
pub fn fft(x: &[Complex<f64>]) -> Result<Vec<Complex<f64>>, AnalysisError> {
    let n = x.len();
    if n == 0 {
        return Err(AnalysisError::InvalidSize(
            "transform input is empty".into(),
        ));
    }
    if n == 1 {
        return Ok(x.to_vec());
    }
    if n % 2 != 0 {
        return dft(x);
    }

    let half = n / 2;
    let evens: Vec<Complex<f64>> = x.iter().step_by(2).copied().collect();
    let odds: Vec<Complex<f64>> = x.iter().skip(1).step_by(2).copied().collect();

    let evens = fft(&evens)?;
    let odds = fft(&odds)?;

    // Recombine: X[k] = E[k] + w*O[k], X[k + N/2] = E[k] - w*O[k]
    let mut spectrum = vec![Complex::new(0.0, 0.0); n];
    for k in 0..half {
        let w = Complex::from_polar(1.0, -2.0 * PI * (k as f64) / (n as f64));
        let twiddled = w * odds[k];
        spectrum[k] = evens[k] + twiddled;
        spectrum[k + half] = evens[k] - twiddled;
    }

    Ok(spectrum)
}
