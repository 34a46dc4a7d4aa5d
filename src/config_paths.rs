//! Centralized configuration paths for docedit
//!
//! All config files live under:
//! - Unix/macOS: `~/.config/docedit/`
//! - Windows: `%APPDATA%\docedit\`

use std::{env, fs, path::PathBuf};

use anyhow::{Context, Result};

const APP_DIR: &str = "docedit";

/// Base config directory for docedit
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/docedit`
///   - Else: `~/.config/docedit`
///
/// Windows:
///   - `%APPDATA%\docedit`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        unix_config_dir(env::var_os("XDG_CONFIG_HOME").map(PathBuf::from), dirs::home_dir())
    }
}

/// XDG resolution; an empty `XDG_CONFIG_HOME` counts as unset
#[cfg(not(target_os = "windows"))]
fn unix_config_dir(xdg_config_home: Option<PathBuf>, home: Option<PathBuf>) -> Option<PathBuf> {
    xdg_config_home
        .filter(|dir| !dir.as_os_str().is_empty())
        .or_else(|| home.map(|h| h.join(".config")))
        .map(|config| config.join(APP_DIR))
}

/// `~/.config/docedit/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/docedit/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf> {
    let logs = logs_dir().context("no home or config directory to hold logs")?;
    fs::create_dir_all(&logs)
        .with_context(|| format!("Failed to create directory {}", logs.display()))?;
    Ok(logs)
}
