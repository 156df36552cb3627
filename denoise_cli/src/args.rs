use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use common::file_format::ConfigFormat;
use common::log_setup::LogConfig;
use denoise::{DenoiseConfig, Execution, FilterKind};

/// Prepended to the input file name when no output path is given.
pub const OUTPUT_PREFIX: &str = "noiseless_";

/// Filter used when neither `--filter` nor a config file picks one.
pub const DEFAULT_FILTER: FilterKind = FilterKind::Gaussian;

#[derive(Debug, Parser)]
#[command(name = "denoise")]
#[command(about = "Remove noise from a grayscale image with a 3x3 mean, median or Gaussian filter")]
#[command(version)]
pub struct Cli {
    /// Image to filter.
    pub input: PathBuf,

    /// Where to write the result [default: noiseless_<INPUT file name> next to INPUT].
    pub output: Option<PathBuf>,

    /// identity, mean, median or gaussian [default: gaussian]. Overrides the config file.
    #[arg(short, long)]
    pub filter: Option<FilterKind>,

    /// Filter on the calling thread only. Overrides the config file.
    #[arg(long)]
    pub sequential: bool,

    /// YAML (.yaml/.yml) or JSON (.json) denoise configuration.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log filter directive; RUST_LOG takes precedence.
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Also write daily rolling log files into this directory.
    #[arg(long)]
    pub log_dir: Option<PathBuf>,
}

impl Cli {
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input))
    }

    /// Config file (if any) with command-line overrides applied.
    pub fn resolve_config(&self) -> anyhow::Result<DenoiseConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => DenoiseConfig::default().with_filter(DEFAULT_FILTER),
        };
        if let Some(filter) = self.filter {
            config.filter = filter;
        }
        if self.sequential {
            config.execution = Execution::Sequential;
        }
        Ok(config)
    }

    pub fn log_config(&self) -> LogConfig {
        LogConfig {
            base_level: self.log_level.clone(),
            log_dir: self.log_dir.clone(),
            ..LogConfig::default()
        }
    }
}

pub fn default_output_path(input: &Path) -> PathBuf {
    let file_name = input
        .file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default();
    input.with_file_name(format!("{OUTPUT_PREFIX}{file_name}"))
}

pub fn load_config(path: &Path) -> anyhow::Result<DenoiseConfig> {
    let format = ConfigFormat::from_path(path)?;
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config '{}'", path.display()))?;
    format
        .parse(&text)
        .with_context(|| format!("Failed to parse config '{}'", path.display()))
}
