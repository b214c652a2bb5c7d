//! TOML configuration for analysis runs
//!
//! The configuration is an explicit value handed to the reader and the
//! analyzer; nothing here is process-wide state.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("could not parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Where the data lives and which slice of it to analyze
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Delimited text file holding the time series
    pub input: PathBuf,

    /// Report destination
    pub output: PathBuf,

    /// 1-indexed column holding the time values
    #[serde(default = "default_time_column")]
    pub time_column: usize,

    /// 1-indexed column holding the signal values
    #[serde(default = "default_value_column")]
    pub value_column: usize,

    /// 1-indexed inclusive row range to analyze
    pub rows: [usize; 2],

    /// Sliding-window batch analysis
    #[serde(default)]
    pub batch: Option<BatchSection>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatchSection {
    /// Run in batch mode without needing --batch on the command line
    #[serde(default)]
    pub enabled: bool,

    /// Samples per window
    pub window_size: usize,

    /// Sample offset between consecutive windows
    pub stride: usize,

    /// Peak floor as a fraction of the DC-bin magnitude
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_time_column() -> usize {
    1
}

fn default_value_column() -> usize {
    2
}

fn default_threshold() -> f64 {
    0.1
}

/// Commented starter configuration, written by `fourier-workbench init`.
const TEMPLATE: &str = r#"# === Fourier Workbench analysis configuration ===

# Delimited text file holding the time series
input = "data.csv"

# Report destination
output = "fourier.csv"

# 1-indexed columns for the time and signal values
time_column = 1
value_column = 2

# 1-indexed inclusive row range to analyze
rows = [1, 8]

# Sliding-window batch analysis
[batch]
enabled = false
window_size = 8
stride = 2
threshold = 0.1
"#;

impl AnalysisConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.time_column == 0 || self.value_column == 0 {
            return Err(ConfigError::Invalid("columns are 1-indexed".into()));
        }
        if self.rows[0] == 0 {
            return Err(ConfigError::Invalid("rows are 1-indexed".into()));
        }
        if self.rows[1] < self.rows[0] {
            return Err(ConfigError::Invalid(format!(
                "row range [{}, {}] is inverted",
                self.rows[0], self.rows[1]
            )));
        }
        if let Some(batch) = &self.batch {
            if batch.window_size == 0 {
                return Err(ConfigError::Invalid("window_size must be at least 1".into()));
            }
            if batch.stride == 0 {
                return Err(ConfigError::Invalid("stride must be at least 1".into()));
            }
            if !batch.threshold.is_finite() || batch.threshold < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "threshold {} is not a non-negative number",
                    batch.threshold
                )));
            }
        }
        Ok(())
    }
}

/// Write the starter configuration to `path`.
pub fn write_template(path: &Path) -> Result<(), ConfigError> {
    std::fs::write(path, TEMPLATE).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_parses_and_validates() {
        let config: AnalysisConfig = toml::from_str(TEMPLATE).unwrap();
        config.validate().unwrap();

        assert_eq!(config.time_column, 1);
        assert_eq!(config.value_column, 2);
        assert_eq!(config.rows, [1, 8]);
        let batch = config.batch.unwrap();
        assert!(!batch.enabled);
        assert_eq!(batch.window_size, 8);
        assert_eq!(batch.stride, 2);
    }

    #[test]
    fn test_minimal_config_defaults() {
        let config: AnalysisConfig = toml::from_str(
            r#"
            input = "in.csv"
            output = "out.csv"
            rows = [1, 16]
            "#,
        )
        .unwrap();
        config.validate().unwrap();

        assert_eq!(config.time_column, 1);
        assert_eq!(config.value_column, 2);
        assert!(config.batch.is_none());
    }

    #[test]
    fn test_inverted_row_range_rejected() {
        let config: AnalysisConfig = toml::from_str(
            r#"
            input = "in.csv"
            output = "out.csv"
            rows = [9, 3]
            "#,
        )
        .unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_zero_column_rejected() {
        let config: AnalysisConfig = toml::from_str(
            r#"
            input = "in.csv"
            output = "out.csv"
            time_column = 0
            rows = [1, 8]
            "#,
        )
        .unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_zero_stride_rejected() {
        let config: AnalysisConfig = toml::from_str(
            r#"
            input = "in.csv"
            output = "out.csv"
            rows = [1, 8]
            [batch]
            window_size = 8
            stride = 0
            "#,
        )
        .unwrap();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_unknown_key_rejected() {
        let parsed: Result<AnalysisConfig, _> = toml::from_str(
            r#"
            input = "in.csv"
            output = "out.csv"
            rows = [1, 8]
            inpath = "legacy.csv"
            "#,
        );
        assert!(parsed.is_err());
    }
}
