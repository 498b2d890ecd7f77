// src/lib.rs
pub mod cli;
pub mod core;
pub mod error;
pub mod logging;
pub mod models;

use anyhow::{Context as _, Result};
use std::io::{self, Write};
use tracing::debug;

pub use cli::Args;
pub use crate::core::config::{
    CONFIG_FILE_NAME, Config, DEFAULT_REPORT_PATH, find_config, load_config, load_config_file,
};
pub use crate::core::scanner::record::{LineRecord, classify_line, parse_hit_count, split_lines};
pub use crate::core::scanner::{scan_reader, scan_report, summarize};
pub use error::ScanError;
pub use logging::init_tracing;
pub use models::{CoverageStats, Summary};

/// Summarizes the report selected by `args` and prints the result to stdout.
///
/// # Errors
///
/// This function may return an error if:
/// * The config file cannot be read or parsed
/// * The report holds a malformed `DA:` record
/// * The report cannot be read
/// * Writing to stdout fails
pub fn run(args: Args) -> Result<()> {
    let stdout = io::stdout();
    run_with_output(&args, &mut stdout.lock())?;
    Ok(())
}

/// Same as [`run`], writing to `out` and handing back the [`Summary`] that was printed.
///
/// # Errors
///
/// See [`run`].
pub fn run_with_output<W: Write>(args: &Args, out: &mut W) -> Result<Summary> {
    let path = args.resolve_report_path()?;
    debug!(path = %path.display(), "summarizing coverage report");

    let summary = summarize(&path)
        .with_context(|| format!("Failed to summarize coverage file: {}", path.display()))?;

    writeln!(out, "{summary}")?;
    Ok(summary)
}
