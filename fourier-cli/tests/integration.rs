//! End-to-end tests driving the `fourier-workbench` binary.

use std::fs;
use std::path::Path;
use std::process::Command;

fn workbench() -> Command {
    Command::new(env!("CARGO_BIN_EXE_fourier-workbench"))
}

/// 16 samples of sin(2*pi*t) at 4 Hz, as `t,x` rows.
fn write_sine_csv(path: &Path) {
    let rows: String = (0..16)
        .map(|i| {
            let t = i as f64 * 0.25;
            let x = [0.0, 1.0, 0.0, -1.0][i % 4];
            format!("{t},{x}\n")
        })
        .collect();
    fs::write(path, rows).unwrap();
}

fn write_config(path: &Path, body: &str) {
    fs::write(path, body).unwrap();
}

#[test]
fn init_writes_a_loadable_template() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("init.toml");

    let output = workbench()
        .arg("init")
        .arg(&config_path)
        .output()
        .expect("failed to run fourier-workbench init");
    assert!(output.status.success());

    let text = fs::read_to_string(&config_path).unwrap();
    assert!(text.contains("input"));
    assert!(text.contains("[batch]"));
}

#[test]
fn single_shot_analysis_writes_a_spectrum_report() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("data.csv");
    let report = dir.path().join("fourier.csv");
    let config = dir.path().join("run.toml");

    write_sine_csv(&data);
    write_config(
        &config,
        &format!(
            r#"
            input = "{}"
            output = "{}"
            rows = [1, 8]
            "#,
            data.display(),
            report.display()
        ),
    );

    let output = workbench()
        .arg("analyze")
        .arg("--config")
        .arg(&config)
        .output()
        .expect("failed to run fourier-workbench analyze");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let text = fs::read_to_string(&report).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    // Header plus 8/2 + 1 bins
    assert_eq!(lines[0], "frequency,magnitude,real,imaginary");
    assert_eq!(lines.len(), 6);

    // Dominant magnitude at the 1 Hz bin
    let magnitudes: Vec<f64> = lines[1..]
        .iter()
        .map(|l| l.split(',').nth(1).unwrap().parse().unwrap())
        .collect();
    let dominant = magnitudes
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap())
        .map(|(i, _)| i)
        .unwrap();
    assert_eq!(dominant, 2);
}

#[test]
fn batch_analysis_reports_every_window() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("data.csv");
    let report = dir.path().join("batch.csv");
    let config = dir.path().join("run.toml");

    write_sine_csv(&data);
    write_config(
        &config,
        &format!(
            r#"
            input = "{}"
            output = "{}"
            rows = [1, 16]

            [batch]
            enabled = true
            window_size = 8
            stride = 2
            threshold = 0.1
            "#,
            data.display(),
            report.display()
        ),
    );

    let output = workbench()
        .arg("analyze")
        .arg("--config")
        .arg(&config)
        .output()
        .expect("failed to run fourier-workbench analyze");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let text = fs::read_to_string(&report).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "window_start,window_end,peaks");
    // 5 windows, each with one 1 Hz peak and its sub-row
    let window_rows: Vec<&&str> = lines[1..].iter().filter(|l| !l.starts_with(",,")).collect();
    let peak_rows: Vec<&&str> = lines[1..].iter().filter(|l| l.starts_with(",,")).collect();
    assert_eq!(window_rows.len(), 5);
    assert_eq!(peak_rows.len(), 5);
    for row in peak_rows {
        assert!(row.starts_with(",,1.000000,"));
    }
}

#[test]
fn malformed_row_aborts_with_a_diagnostic() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("data.csv");
    let report = dir.path().join("fourier.csv");
    let config = dir.path().join("run.toml");

    fs::write(&data, "0.0,1.0\n0.25,broken\n0.5,0.0\n0.75,-1.0\n").unwrap();
    write_config(
        &config,
        &format!(
            r#"
            input = "{}"
            output = "{}"
            rows = [1, 4]
            "#,
            data.display(),
            report.display()
        ),
    );

    let output = workbench()
        .arg("analyze")
        .arg("--config")
        .arg(&config)
        .output()
        .expect("failed to run fourier-workbench analyze");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("row 2"), "stderr: {stderr}");
    assert!(!report.exists(), "no report on failed input");
}

#[test]
fn missing_config_fails_cleanly() {
    let output = workbench()
        .arg("analyze")
        .arg("--config")
        .arg("/nonexistent/run.toml")
        .output()
        .expect("failed to run fourier-workbench analyze");

    assert!(!output.status.success());
}
