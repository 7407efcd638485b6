//! Runtime settings shared by commands
//!
//! Environment variables:
//! - `PORT` - listen port when `--port` is not given
//! - `TXTRACT_ENV` - `production` also writes the access log to a file
//! - `TXTRACT_LOG_DIR` - directory for `access.log` (default `logs`)
//! - `TXTRACT_ALLOWED_ORIGINS` - comma-separated CORS origins

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_LOG_DIR: &str = "logs";
pub const ACCESS_LOG_FILE: &str = "access.log";

/// Whether `TXTRACT_ENV` selects production mode
pub fn is_production(env_value: Option<&str>) -> bool {
    env_value.is_some_and(|v| v.trim().eq_ignore_ascii_case("production"))
}

/// Pick the listen port: flag, then `PORT`, then the default
pub fn resolve_port(flag: Option<u16>, env_value: Option<&str>) -> Result<u16> {
    if let Some(port) = flag {
        return Ok(port);
    }
    match env_value.map(str::trim).filter(|s| !s.is_empty()) {
        Some(value) => value
            .parse()
            .with_context(|| format!("Invalid PORT value: {}", value)),
        None => Ok(DEFAULT_PORT),
    }
}

/// Directory for log files, from `TXTRACT_LOG_DIR` or the default
pub fn log_dir(env_value: Option<&str>) -> PathBuf {
    env_value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_DIR))
}

/// Open `<dir>/access.log` for appending, creating the directory if needed
pub fn open_access_log(dir: &Path) -> Result<File> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
    let path = dir.join(ACCESS_LOG_FILE);
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open access log: {}", path.display()))
}
