//! Fourier transforms and frequency-domain mapping

pub mod analysis;
pub mod domain;
pub mod transform;

pub use analysis::{analyze_series, Spectrum};
pub use domain::{fdomain, fourier_coeffs};
pub use transform::{dft, fft, to_complex};
