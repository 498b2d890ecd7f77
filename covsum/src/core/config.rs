// src/core/config.rs
pub mod loader;

use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub use loader::{CONFIG_FILE_NAME, find_config, load_config, load_config_file};

/// Report location used when neither the command line nor a config file names one.
pub const DEFAULT_REPORT_PATH: &str = "coverage/lcov.info";

/// Settings read from a `.covsum.toml` file.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// LCOV report to summarize.
    pub report: Option<PathBuf>,
}

impl Config {
    /// Parses config file contents.
    ///
    /// # Errors
    ///
    /// Returns an error if the contents are not valid TOML or contain unknown keys.
    #[inline]
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config")
    }

    /// Anchors a relative `report` at `base`, the directory holding the config file.
    #[must_use]
    pub fn relative_to(mut self, base: &Path) -> Self {
        if let Some(report) = self.report.take() {
            self.report = Some(if report.is_relative() {
                base.join(report)
            } else {
                report
            });
        }
        self
    }

    /// Picks the report path: `explicit` wins, then the configured `report`,
    /// then [`DEFAULT_REPORT_PATH`].
    #[must_use]
    pub fn report_path(&self, explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .or_else(|| self.report.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_PATH))
    }
}
