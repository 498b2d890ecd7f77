// src/core/config/loader.rs
use crate::core::config::Config;
use anyhow::{Context as _, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = ".covsum.toml";

/// Looks for a `.covsum.toml` in `dir`, then in each parent directory, and
/// returns the first one found.
#[inline]
#[must_use]
pub fn find_config(dir: &Path) -> Option<PathBuf> {
    let mut current_dir = dir.to_path_buf();
    let mut visited = HashSet::new();

    while visited.insert(current_dir.clone()) {
        let candidate = current_dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => break,
        }
    }

    None
}

/// Reads one config file. A relative `report` is resolved against the file's directory.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be read
/// * The file is not valid TOML or has unknown keys
#[inline]
pub fn load_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config = Config::from_toml(&content)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;

    let base = path.parent().unwrap_or_else(|| Path::new(""));
    Ok(config.relative_to(base))
}

/// Loads the nearest `.covsum.toml` at or above `dir`, or defaults when there is none.
///
/// # Errors
///
/// Returns an error if a config file is found but cannot be read or parsed.
#[inline]
pub fn load_config(dir: &Path) -> Result<Config> {
    let Some(path) = find_config(dir) else {
        return Ok(Config::default());
    };

    debug!(path = %path.display(), "using config file");
    load_config_file(&path)
}
