//! CLI definition and session wiring

use anyhow::{Context, Result};
use clap::Parser;
use std::cell::RefCell;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use anomaly_shell::config::ShellConfig;
use anomaly_shell::session::is_valid_threshold;
use anomaly_shell::{
    CommandBindings, CommandMenu, DetectorData, IoChannel, ScriptedIo, TerminalIo, UploadPaths,
};

/// Parse and validate a threshold (0-1)
fn parse_threshold(s: &str) -> Result<f32, String> {
    let value: f32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if is_valid_threshold(value) {
        Ok(value)
    } else {
        Err("threshold must be between 0 and 1".to_string())
    }
}

/// Interactive anomaly detection shell
///
/// Upload a train and a test time series, tune the correlation threshold,
/// detect anomalies and list them, all from a numbered menu.
#[derive(Parser, Debug)]
#[command(name = "anomaly-shell")]
#[command(
    version,
    about = "Interactive shell for correlation-based anomaly detection on CSV time series",
    after_help = "\
Examples:
  anomaly-shell                              Start the interactive menu
  anomaly-shell --data-dir /tmp/uploads      Keep uploaded series in /tmp/uploads
  anomaly-shell --threshold 0.8              Start with a 0.8 correlation threshold
  anomaly-shell --script session.txt         Replay a recorded session and print the transcript

Uploads end with a line containing only: done"
)]
pub struct Cli {
    /// Config file (TOML, or JSON with a .json extension)
    #[arg(long, short = 'c', env = "ANOMALY_SHELL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory for the uploaded train/test series
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Starting correlation threshold (0-1)
    #[arg(long, value_parser = parse_threshold)]
    pub threshold: Option<f32>,

    /// Read menu input from a file instead of the terminal
    #[arg(long)]
    pub script: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,
}

pub fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir().context("Could not determine working directory")?;

    let mut config = ShellConfig::load(cli.config.as_deref(), &cwd)?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = Some(dir);
    }
    if let Some(threshold) = cli.threshold {
        config.threshold = Some(threshold);
    }
    debug!("Effective config: {:?}", config);

    let paths = config.upload_paths(&cwd);
    let mut data = DetectorData::default();
    if let Some(threshold) = config.threshold {
        data.set_threshold(threshold)?;
    }

    match cli.script {
        Some(script) => replay(&script, data, &paths, config.greeting()),
        None => {
            let io = RefCell::new(TerminalIo::stdio());
            run_session(&io, data, &paths, config.greeting())
        }
    }
}

/// Run a scripted session and print everything it wrote
fn replay(script: &Path, data: DetectorData, paths: &UploadPaths, greeting: &str) -> Result<()> {
    let file = std::fs::File::open(script)
        .with_context(|| format!("Failed to open script {}", script.display()))?;
    let io = ScriptedIo::from_reader(BufReader::new(file))
        .with_context(|| format!("Failed to read script {}", script.display()))?;
    info!("Replaying {} input lines from {}", io.remaining(), script.display());

    let io = RefCell::new(io);
    let result = run_session(&io, data, paths, greeting);
    print!("{}", io.borrow().output());
    result
}

fn run_session(
    io: &RefCell<dyn IoChannel>,
    data: DetectorData,
    paths: &UploadPaths,
    greeting: &str,
) -> Result<()> {
    let data = RefCell::new(data);
    let bindings = CommandBindings::new(io, &data, paths);
    let menu = CommandMenu::standard(bindings, greeting)?;
    menu.run()?;
    Ok(())
}
