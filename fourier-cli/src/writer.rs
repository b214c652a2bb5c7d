//! Tabular report output
//!
//! Renders single-shot spectra and batch window records as comma-delimited
//! text.

use fourier_workbench::{Spectrum, WindowRecord};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write one row per frequency bin: frequency, magnitude, real, imaginary
pub fn write_spectrum(path: &Path, spectrum: &Spectrum) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);

    writeln!(out, "frequency,magnitude,real,imaginary")?;
    for (freq, coeff) in spectrum.frequencies.iter().zip(&spectrum.coefficients) {
        writeln!(
            out,
            "{freq:.6},{:.6},{:.6},{:.6}",
            coeff.norm(),
            coeff.re,
            coeff.im
        )?;
    }

    out.flush()
}

/// Write one row per window plus one indented sub-row per peak
///
/// Windows with no peaks get an explicit `none` marker so every window
/// remains visible in the report.
pub fn write_batch(path: &Path, records: &[WindowRecord]) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);

    writeln!(out, "window_start,window_end,peaks")?;
    for record in records {
        if record.peaks.is_empty() {
            writeln!(out, "{:.6},{:.6},none", record.start_time, record.end_time)?;
            continue;
        }
        writeln!(
            out,
            "{:.6},{:.6},{}",
            record.start_time,
            record.end_time,
            record.peaks.len()
        )?;
        for peak in &record.peaks {
            writeln!(out, ",,{:.6},{:.6}", peak.frequency, peak.amplitude)?;
        }
    }

    out.flush()
}
