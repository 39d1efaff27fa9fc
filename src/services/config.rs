//! Greeter configuration, read from a JSON file in the cache directory.
//!
//! Every field has a default, so partial or missing files are fine.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_DIR: &str = ".foo-context";
const CONFIG_FILE: &str = "config.json";
const LOG_DIR: &str = "logs";
const CONFIG_ENV: &str = "FOO_CONTEXT_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GreeterConfig {
    /// Message provided when none is given on the command line.
    pub message: String,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_filter: String,
    pub width: u16,
    pub height: u16,
}

impl Default for GreeterConfig {
    fn default() -> Self {
        Self {
            message: "world".to_string(),
            log_filter: "foo_context=info".to_string(),
            width: 40,
            height: 3,
        }
    }
}

pub fn parse_config(data: &str) -> serde_json::Result<GreeterConfig> {
    serde_json::from_str(data)
}

pub fn get_config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }
    get_app_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// A config file that exists but does not parse.
#[derive(Debug)]
pub struct InvalidConfig {
    path: PathBuf,
    error: serde_json::Error,
}

impl InvalidConfig {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl std::fmt::Display for InvalidConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invalid config {}: {}", self.path.display(), self.error)
    }
}

impl std::error::Error for InvalidConfig {}

/// `Ok(None)` when the file cannot be read.
pub fn load_config_from(path: &Path) -> Result<Option<GreeterConfig>, InvalidConfig> {
    let Ok(data) = std::fs::read_to_string(path) else {
        return Ok(None);
    };
    parse_config(&data).map(Some).map_err(|error| InvalidConfig {
        path: path.to_path_buf(),
        error,
    })
}

/// Loads the config file. A missing file yields the defaults; an invalid one is
/// reported so the caller can log it once logging is up.
pub fn load_config() -> Result<GreeterConfig, InvalidConfig> {
    let Some(path) = get_config_path() else {
        return Ok(GreeterConfig::default());
    };
    Ok(load_config_from(&path)?.unwrap_or_default())
}

/// Writes a default config file unless one exists.
pub fn ensure_config_file_at(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    if !path.exists() {
        let content = serde_json::to_string_pretty(&GreeterConfig::default())
            .unwrap_or_else(|_| "{}".to_string());
        std::fs::write(path, content)?;
    }
    Ok(())
}

pub fn ensure_config_file() -> std::io::Result<PathBuf> {
    let path = get_config_path().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine config directory",
        )
    })?;
    ensure_config_file_at(&path)?;
    Ok(path)
}

pub fn get_log_dir() -> Option<PathBuf> {
    get_app_dir().map(|dir| dir.join(LOG_DIR))
}

pub fn ensure_log_dir() -> std::io::Result<PathBuf> {
    let dir = get_log_dir().ok_or_else(|| {
        std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "Cannot determine log directory",
        )
    })?;
    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }
    Ok(dir)
}

fn get_app_dir() -> Option<PathBuf> {
    get_cache_dir().map(|dir| dir.join(APP_DIR))
}

fn get_cache_dir() -> Option<PathBuf> {
    #[cfg(target_os = "macos")]
    {
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Caches"));
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CACHE_HOME") {
            return Some(PathBuf::from(xdg));
        }
        return std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".cache"));
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(local) = std::env::var("LOCALAPPDATA") {
            return Some(PathBuf::from(local));
        }
        return std::env::var("APPDATA").ok().map(PathBuf::from);
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        None
    }
}

#[cfg(test)]
#[path = "../../tests/unit/services/config.rs"]
mod tests;
