//! stunnel lifecycle controller
//!
//! The controller knows two states. The daemon is *running* when the pid
//! file exists and holds a non-negative integer, and *stopped* otherwise.
//! No process-table lookup is made, so a stale pid file left by a crashed
//! daemon reads as running.

use tracing::{debug, info};

use crate::config::toml_config::DEFAULT_BINARY;
use crate::config::StunnelConfig;
use crate::daemon::pidfile;
use crate::daemon::process::{ProcessControl, SystemProcessControl};
use crate::error::Result;
use crate::types::{Status, NO_PID};

/// Starts, stops, and checks an stunnel instance given its configuration
///
/// ```no_run
/// use stunnelctl_core::config::StunnelConfig;
/// use stunnelctl_core::daemon::Stunnel;
///
/// let config = StunnelConfig::load("/etc/stunnel/stunnel.conf")?;
/// let stunnel = Stunnel::new(config);
///
/// if stunnel.check()?.is_ok() {
///     println!("stunnel is running with pid {}", stunnel.getpid()?);
/// }
/// # Ok::<(), stunnelctl_core::error::StunnelError>(())
/// ```
pub struct Stunnel<P: ProcessControl = SystemProcessControl> {
    config: StunnelConfig,
    binary: String,
    process: P,
}

impl Stunnel<SystemProcessControl> {
    /// Create a controller that launches `stunnel` from `PATH`
    pub fn new(config: StunnelConfig) -> Self {
        Self::with_process_control(config, SystemProcessControl)
    }
}

impl<P: ProcessControl> Stunnel<P> {
    /// Create a controller using a custom [`ProcessControl`]
    pub fn with_process_control(config: StunnelConfig, process: P) -> Self {
        Self {
            config,
            binary: DEFAULT_BINARY.to_string(),
            process,
        }
    }

    /// Use `binary` instead of `stunnel` to launch the daemon
    pub fn with_binary(mut self, binary: impl Into<String>) -> Self {
        self.binary = binary.into();
        self
    }

    pub fn config(&self) -> &StunnelConfig {
        &self.config
    }

    pub fn binary(&self) -> &str {
        &self.binary
    }

    pub fn process_control(&self) -> &P {
        &self.process
    }

    /// Pid recorded in the pid file, or [`NO_PID`]
    pub fn getpid(&self) -> Result<i32> {
        let pid = match self.config.pid_file() {
            Some(pid_file) => pidfile::read_pid(pid_file)?,
            None => NO_PID,
        };
        debug!("Pid file reports {}", pid);
        Ok(pid)
    }

    /// [`Status::Ok`] when the daemon is running
    pub fn check(&self) -> Result<Status> {
        let pid = self.getpid()?;
        Ok(if pid >= 0 { Status::Ok } else { Status::FAILURE })
    }

    /// Launch the daemon
    ///
    /// Refuses without side effects when no pid file is configured, when
    /// stunnel is set to stay in the foreground, or when it already runs.
    /// Otherwise returns the exit status of the launch. The daemon writes
    /// its own pid file.
    pub fn start(&self) -> Result<Status> {
        if self.config.pid_file().is_none() {
            debug!("Refusing to start: no pid file configured");
            return Ok(Status::FAILURE);
        }

        if self.config.foreground() {
            debug!("Refusing to start: foreground mode configured");
            return Ok(Status::FAILURE);
        }

        if self.check()?.is_ok() {
            debug!("Refusing to start: already running");
            return Ok(Status::FAILURE);
        }

        let status = self
            .process
            .spawn(&self.binary, self.config.config_file());
        info!("Start finished with status {}", status);
        Ok(status)
    }

    /// Signal the daemon to terminate
    ///
    /// Refuses without side effects when the daemon is not running.
    /// Otherwise returns the status of the signal delivery. The daemon
    /// removes its own pid file on shutdown.
    pub fn stop(&self) -> Result<Status> {
        let pid = self.getpid()?;
        if pid < 0 {
            debug!("Refusing to stop: not running");
            return Ok(Status::FAILURE);
        }

        let status = self.process.terminate(pid);
        info!("Stop of process {} finished with status {}", pid, status);
        Ok(status)
    }
}
