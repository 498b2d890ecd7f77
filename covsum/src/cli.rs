// src/cli.rs
use anyhow::Result;
use clap::Parser;
use std::env;
use std::path::PathBuf;

use crate::core::config::{Config, load_config, load_config_file};

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// LCOV report to summarize (defaults to coverage/lcov.info)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Config file to use instead of searching for .covsum.toml
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log what is being read to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Works out which report to read. An explicit `--file` skips config loading.
    ///
    /// # Errors
    ///
    /// This function may return an error if:
    /// * The current directory cannot be determined
    /// * A config file exists but cannot be read or parsed
    pub fn resolve_report_path(&self) -> Result<PathBuf> {
        if let Some(file) = &self.file {
            return Ok(file.clone());
        }

        let config: Config = match &self.config {
            Some(path) => load_config_file(path)?,
            None => load_config(&env::current_dir()?)?,
        };
        Ok(config.report_path(None))
    }
}
