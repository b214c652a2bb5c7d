//! Sliding-window batch analysis and peak detection

pub mod analyzer;
pub mod peaks;

pub use analyzer::{BatchAnalyzer, BatchConfig, WindowRecord};
pub use peaks::{find_peaks, Peak};
