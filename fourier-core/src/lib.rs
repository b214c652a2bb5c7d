//! Fourier Workbench - Offline Spectral Analysis Core
//!
//! Discrete Fourier transforms and sliding-window peak tracking for
//! uniformly sampled time-series data.

pub mod batch;
pub mod error;
pub mod spectrum;

pub use batch::{BatchAnalyzer, BatchConfig, Peak, WindowRecord};
pub use error::AnalysisError;
pub use spectrum::{analyze_series, Spectrum};
