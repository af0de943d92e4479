use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Datelike;
use serde::Deserialize;
use tracing::debug;

use crate::cli::SourceArgs;

/// Configuration file read when `--config` is not given and it exists.
pub const DEFAULT_CONFIG: &str = "captain-pont.toml";

/// Top-level planner configuration.
#[derive(Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PontConfig {
    /// Planning year; the current local year when absent.
    #[serde(default)]
    pub year: Option<i64>,

    /// Paid leave days per year.
    #[serde(default = "default_quota")]
    pub quota: i64,

    /// Built-in calendar used when no holiday file is given.
    #[serde(default = "default_country")]
    pub country: String,

    /// Holiday feed file, overriding `country`.
    #[serde(default)]
    pub holidays: Option<PathBuf>,

    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,
}

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

impl Default for PontConfig {
    fn default() -> Self {
        Self {
            year: None,
            quota: default_quota(),
            country: default_country(),
            holidays: None,
            format: OutputFormat::default(),
        }
    }
}

fn default_quota() -> i64 {
    pont_optimizer::DEFAULT_QUOTA as i64
}
fn default_country() -> String {
    "FR".to_string()
}

impl PontConfig {
    /// Load the configuration for `args`.
    ///
    /// An explicit `--config` must exist; the default file is optional.
    /// Command-line values override file values.
    pub fn resolve(args: &SourceArgs) -> Result<Self> {
        let mut config = match &args.config {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG).is_file() => Self::from_file(Path::new(DEFAULT_CONFIG))?,
            None => Self::default(),
        };
        config.apply(args);
        Ok(config)
    }

    /// Parse a TOML configuration file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        let config: Self = toml::from_str(&text)
            .with_context(|| format!("failed to parse config: {}", path.display()))?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Merge command-line overrides.
    pub fn apply(&mut self, args: &SourceArgs) {
        if let Some(year) = args.year {
            self.year = Some(year);
        }
        if let Some(country) = &args.country {
            self.country = country.clone();
        }
        if let Some(path) = &args.holidays {
            self.holidays = Some(path.clone());
        }
    }

    /// The planning year, defaulting to the current local year.
    pub fn year(&self) -> i64 {
        self.year
            .unwrap_or_else(|| i64::from(chrono::Local::now().year()))
    }
}
