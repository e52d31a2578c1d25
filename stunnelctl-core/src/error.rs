//! Error types for the stunnelctl tool
//!
//! Lifecycle precondition failures (starting a running daemon, stopping a
//! stopped one) are not errors; they are reported as a failed [`Status`].
//! Only configuration problems and unexpected I/O end up here.
//!
//! [`Status`]: crate::types::Status

use thiserror::Error;

/// Main error type for the stunnelctl application
#[derive(Error, Debug)]
pub enum StunnelError {
    /// Errors related to the stunnel configuration or the tool's settings
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Unexpected I/O errors while reading configuration or pid files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing errors in the settings file
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Configuration-related errors
///
/// The messages are user-facing and printed verbatim by the CLI.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("option -c is required")]
    MissingConfigOption,

    #[error("no such file: {path}")]
    NoSuchFile { path: String },

    #[error("must set pid = /path/to/pid-file in {path}")]
    MissingPidFile { path: String },

    #[error("must set foreground = no in {path}")]
    ForegroundEnabled { path: String },

    #[error("Configuration validation error: {message}")]
    ValidationError { message: String },

    #[error("I/O error: {message}")]
    IoError { message: String },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, StunnelError>;
