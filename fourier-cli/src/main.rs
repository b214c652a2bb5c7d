//! Fourier Workbench CLI - offline spectral analysis of tabular time series.

mod config;
mod reader;
mod writer;

use anyhow::Context;
use clap::{Parser, Subcommand};
use config::AnalysisConfig;
use fourier_workbench::{analyze_series, BatchAnalyzer, BatchConfig};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "fourier-workbench")]
#[command(version, about = "Offline Fourier analysis of tabular time series", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a template configuration file
    Init {
        /// Destination path
        #[arg(default_value = "init.toml")]
        path: PathBuf,
    },

    /// Analyze the configured time series
    Analyze {
        /// Configuration file
        #[arg(short, long, default_value = "init.toml")]
        config: PathBuf,

        /// Run sliding-window batch analysis regardless of the config
        #[arg(long)]
        batch: bool,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Init { path } => {
            config::write_template(&path)?;
            info!(path = %path.display(), "wrote template configuration");
            Ok(())
        }
        Commands::Analyze { config, batch } => run_analysis(&config, batch),
    }
}

fn run_analysis(config_path: &Path, force_batch: bool) -> anyhow::Result<()> {
    let config = AnalysisConfig::load(config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    let series = reader::read_series(&config)?;
    info!(
        rows = series.values.len(),
        dt = series.dt,
        "loaded time series"
    );

    let batch_mode = force_batch || config.batch.as_ref().is_some_and(|b| b.enabled);
    if batch_mode {
        let section = config
            .batch
            .as_ref()
            .context("batch mode requested but the config has no [batch] table")?;
        let analyzer = BatchAnalyzer::new(BatchConfig {
            window_size: section.window_size,
            stride: section.stride,
            threshold: section.threshold,
        });

        // Long runs iterate thousands of windows; Ctrl-C stops cleanly
        // between windows instead of killing the process mid-write.
        let cancel = Arc::new(AtomicBool::new(false));
        let handler_flag = Arc::clone(&cancel);
        ctrlc::set_handler(move || handler_flag.store(true, Ordering::SeqCst))
            .context("installing the interrupt handler")?;

        let records =
            analyzer.run_cancellable(&series.values, series.start_time(), series.dt, &cancel)?;
        writer::write_batch(&config.output, &records)
            .with_context(|| format!("writing {}", config.output.display()))?;
        info!(
            windows = records.len(),
            output = %config.output.display(),
            "wrote batch report"
        );
    } else {
        let spectrum = analyze_series(&series.values, series.dt)?;
        writer::write_spectrum(&config.output, &spectrum)
            .with_context(|| format!("writing {}", config.output.display()))?;
        info!(
            bins = spectrum.len(),
            output = %config.output.display(),
            "wrote spectrum report"
        );
    }

    Ok(())
}
