//! TOML settings file I/O
//!
//! stunnelctl keeps a small settings file of its own, separate from the
//! stunnel configuration it manages. It names the daemon binary and an
//! optional default stunnel configuration.

use crate::config::ParseMode;
use crate::error::{ConfigError, Result, StunnelError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default daemon executable, looked up on `PATH`
pub const DEFAULT_BINARY: &str = "stunnel";

/// Environment variable overriding the settings directory
pub const CONFIG_DIR_ENV: &str = "STUNNELCTL_CONFIG_DIR";

/// Default settings file name
const CONFIG_FILE_NAME: &str = "config.toml";

/// Settings for the stunnelctl tool itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CtlSettings {
    /// Daemon executable name or path
    pub binary: String,

    /// stunnel configuration used when `-c` is not given
    pub config_file: Option<PathBuf>,

    /// Scanning rules for the stunnel configuration
    pub parse_mode: ParseMode,
}

impl CtlSettings {
    /// Load settings from a TOML file
    ///
    /// A missing file yields the defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("No settings file at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(StunnelError::Config(ConfigError::IoError {
                    message: format!("Failed to read settings file {}: {}", path.display(), e),
                }))
            }
        };

        let settings: CtlSettings = toml::from_str(&contents)?;
        settings
            .validate()
            .map_err(|message| StunnelError::Config(ConfigError::ValidationError { message }))?;

        debug!(
            "Loaded settings from {}: binary={}, parse_mode={:?}",
            path.display(),
            settings.binary,
            settings.parse_mode
        );
        Ok(settings)
    }

    /// Validate the settings
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.binary.trim().is_empty() {
            return Err("Daemon binary cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Default for CtlSettings {
    fn default() -> Self {
        Self {
            binary: DEFAULT_BINARY.to_string(),
            config_file: None,
            parse_mode: ParseMode::default(),
        }
    }
}

/// Get the settings directory
///
/// Returns `$STUNNELCTL_CONFIG_DIR` if set, otherwise `~/.config/stunnelctl`.
pub fn get_config_dir() -> Result<PathBuf> {
    if let Ok(config_dir) = std::env::var(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(config_dir));
    }

    let home = std::env::var("HOME").map_err(|_| {
        StunnelError::Config(ConfigError::IoError {
            message: "HOME environment variable not set".to_string(),
        })
    })?;

    Ok(PathBuf::from(home).join(".config").join("stunnelctl"))
}

/// Get the default settings file path
pub fn get_config_path() -> Result<PathBuf> {
    let config_dir = get_config_dir()?;
    Ok(config_dir.join(CONFIG_FILE_NAME))
}

/// Load settings from the default location
///
/// Falls back to the defaults when no settings directory can be determined.
pub fn load_settings() -> Result<CtlSettings> {
    match get_config_path() {
        Ok(path) => CtlSettings::from_file(&path),
        Err(e) => {
            debug!("Settings location unavailable ({}), using defaults", e);
            Ok(CtlSettings::default())
        }
    }
}
