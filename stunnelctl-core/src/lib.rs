//! Core library for the stunnelctl CLI tool
//!
//! This crate reads the parts of an stunnel configuration file that matter
//! for lifecycle management and drives the daemon through its pid file.

pub mod error;
pub mod types;

pub mod config;
pub mod daemon;

/// Environment variable selecting the log level (`error`, `warn`, `info`, ...)
pub const LOG_LEVEL_ENV: &str = "STUNNELCTL_LOG";

/// Initialize logging infrastructure
///
/// Sets up tracing with systemd journal logging when running under systemd.
/// Otherwise logs to stderr, at `warn` unless `STUNNELCTL_LOG` says otherwise,
/// so that command output on stdout stays readable.
pub fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    use tracing_subscriber::filter::LevelFilter;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = std::env::var(LOG_LEVEL_ENV)
        .ok()
        .and_then(|value| value.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::WARN);

    #[cfg(target_os = "linux")]
    {
        if std::env::var("JOURNAL_STREAM").is_ok() {
            let journal_layer = tracing_journald::layer()?;
            tracing_subscriber::registry()
                .with(journal_layer)
                .with(level)
                .init();
            return Ok(());
        }
    }

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(level)
        .init();

    Ok(())
}
