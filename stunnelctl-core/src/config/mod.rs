//! Configuration module
//!
//! Reads the lifecycle-relevant options out of an stunnel configuration file,
//! and loads the tool's own settings from TOML.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ConfigError, Result, StunnelError};

pub mod scanner;
pub mod toml_config;

use scanner::ConfigScanner;

/// How an stunnel configuration file is scanned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParseMode {
    /// Stop at the first section header and honour `foreground = yes`
    #[default]
    Strict,

    /// Look for `pid` anywhere in the file; `foreground` is never considered
    PidOnly,
}

/// Lifecycle-relevant view of an stunnel configuration file
///
/// The derived fields are computed once when the value is loaded and never
/// change afterwards. Load a new value to pick up edits to the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StunnelConfig {
    config_file: PathBuf,
    pid_file: Option<PathBuf>,
    foreground: bool,
    mode: ParseMode,
}

impl StunnelConfig {
    /// Load a configuration file using the strict scanning rules
    pub fn load<P: AsRef<Path>>(config_file: P) -> Result<Self> {
        Self::load_with_mode(config_file, ParseMode::Strict)
    }

    /// Load a configuration file
    ///
    /// A path that does not name a regular file yields an empty
    /// configuration. Read failures on an existing file are returned.
    pub fn load_with_mode<P: AsRef<Path>>(config_file: P, mode: ParseMode) -> Result<Self> {
        let config_file = config_file.as_ref();
        let mut config = Self {
            config_file: config_file.to_path_buf(),
            pid_file: None,
            foreground: false,
            mode,
        };

        if !config_file.is_file() {
            debug!("Config file {} not found, using empty configuration", config_file.display());
            return Ok(config);
        }

        let bytes = std::fs::read(config_file)?;
        let contents = String::from_utf8_lossy(&bytes);
        let values = ConfigScanner::new().scan(contents.lines(), mode);

        config.pid_file = values.pid_file.map(PathBuf::from);
        config.foreground = values.foreground;

        debug!(
            "Loaded {} ({:?}): pid_file={:?}, foreground={}",
            config_file.display(),
            mode,
            config.pid_file,
            config.foreground
        );

        Ok(config)
    }

    /// Resolve and check the configuration the CLI was pointed at
    ///
    /// Fails when no file was given, the file does not exist, it sets no
    /// pid file, or it asks stunnel to stay in the foreground.
    pub fn resolve(config_file: Option<&Path>, mode: ParseMode) -> Result<Self> {
        let config_file = config_file.ok_or(ConfigError::MissingConfigOption)?;

        if !config_file.is_file() {
            return Err(StunnelError::Config(ConfigError::NoSuchFile {
                path: config_file.display().to_string(),
            }));
        }

        let config = Self::load_with_mode(config_file, mode)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the daemon can be managed through its pid file
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let path = self.config_file.display().to_string();

        if self.pid_file.is_none() {
            return Err(ConfigError::MissingPidFile { path });
        }

        if self.foreground {
            return Err(ConfigError::ForegroundEnabled { path });
        }

        Ok(())
    }

    /// Path of the stunnel configuration file
    pub fn config_file(&self) -> &Path {
        &self.config_file
    }

    /// Pid file named by the `pid` option, if any
    pub fn pid_file(&self) -> Option<&Path> {
        self.pid_file.as_deref()
    }

    /// Whether stunnel is configured to stay in the foreground
    pub fn foreground(&self) -> bool {
        self.foreground
    }

    pub fn mode(&self) -> ParseMode {
        self.mode
    }
}
