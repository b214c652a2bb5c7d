//! Delimited-text input
//!
//! Reads `(t, x)` pairs from a configured row range and derives the
//! sampling interval. A malformed row aborts the read with a diagnostic
//! naming the 1-indexed row; rows are never silently substituted.

use crate::config::AnalysisConfig;
use std::path::Path;
use thiserror::Error;

/// Relative tolerance when checking that consecutive time steps match.
const UNIFORMITY_TOLERANCE: f64 = 1e-6;

#[derive(Error, Debug)]
pub enum ReadError {
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("row {row} is missing (file has {available} rows)")]
    MissingRow { row: usize, available: usize },

    #[error("row {row} has {found} columns, need at least {needed}")]
    MissingColumn {
        row: usize,
        found: usize,
        needed: usize,
    },

    #[error("row {row}, column {column}: could not parse '{value}' as a number")]
    BadNumber {
        row: usize,
        column: usize,
        value: String,
    },

    #[error("need at least 2 rows to derive the sampling interval (got {0})")]
    TooFewRows(usize),

    #[error("sampling interval must be positive (got {0})")]
    NonPositiveInterval(f64),

    #[error(
        "non-uniform sampling at row {row}: step {actual} differs from the derived interval {expected}"
    )]
    NonUniformSampling {
        row: usize,
        expected: f64,
        actual: f64,
    },
}

/// Uniformly sampled series extracted from a delimited file
#[derive(Debug, Clone)]
pub struct TimeSeries {
    pub times: Vec<f64>,
    pub values: Vec<f64>,
    /// Sampling interval `t[1] - t[0]`, verified uniform across all rows
    pub dt: f64,
}

impl TimeSeries {
    /// Time of the first sample
    pub fn start_time(&self) -> f64 {
        self.times[0]
    }
}

/// Read the configured row range of a comma-delimited file
pub fn read_series(config: &AnalysisConfig) -> Result<TimeSeries, ReadError> {
    let path: &Path = &config.input;
    let text = std::fs::read_to_string(path).map_err(|source| ReadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let lines: Vec<&str> = text.lines().collect();

    let [first_row, last_row] = config.rows;
    let needed = config.time_column.max(config.value_column);

    let mut times = Vec::with_capacity(last_row - first_row + 1);
    let mut values = Vec::with_capacity(last_row - first_row + 1);
    for row in first_row..=last_row {
        let line = lines.get(row - 1).ok_or(ReadError::MissingRow {
            row,
            available: lines.len(),
        })?;
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() < needed {
            return Err(ReadError::MissingColumn {
                row,
                found: fields.len(),
                needed,
            });
        }
        times.push(parse_field(&fields, row, config.time_column)?);
        values.push(parse_field(&fields, row, config.value_column)?);
    }

    if times.len() < 2 {
        return Err(ReadError::TooFewRows(times.len()));
    }

    let dt = times[1] - times[0];
    if dt <= 0.0 {
        return Err(ReadError::NonPositiveInterval(dt));
    }

    // The whole range must be evenly spaced, not just the first pair.
    for (i, pair) in times.windows(2).enumerate().skip(1) {
        let step = pair[1] - pair[0];
        if (step - dt).abs() > dt * UNIFORMITY_TOLERANCE {
            return Err(ReadError::NonUniformSampling {
                row: first_row + i + 1,
                expected: dt,
                actual: step,
            });
        }
    }

    Ok(TimeSeries { times, values, dt })
}

fn parse_field(fields: &[&str], row: usize, column: usize) -> Result<f64, ReadError> {
    let raw = fields[column - 1].trim();
    raw.parse().map_err(|_| ReadError::BadNumber {
        row,
        column,
        value: raw.to_string(),
    })
}
