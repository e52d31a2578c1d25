//! Process spawning and signalling
//!
//! [`ProcessControl`] is the boundary between the lifecycle controller and
//! the operating system. Each call is made exactly once and its outcome is
//! reported as a [`Status`].

use std::path::Path;
use std::process::Command;

use nix::sys::signal::{kill, Signal};
use nix::unistd::Pid;
use tracing::{info, warn};

use crate::types::Status;

/// Exit code used when the daemon binary cannot be found
pub const EXIT_NOT_FOUND: i32 = 127;

/// Exit code used when the daemon binary cannot be executed
pub const EXIT_NOT_EXECUTABLE: i32 = 126;

/// Operations the lifecycle controller needs from the operating system
pub trait ProcessControl {
    /// Run `binary` with `config_file` as its only argument and wait for it
    fn spawn(&self, binary: &str, config_file: &Path) -> Status;

    /// Ask process `pid` to terminate
    fn terminate(&self, pid: i32) -> Status;
}

/// [`ProcessControl`] backed by real processes and signals
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessControl;

impl ProcessControl for SystemProcessControl {
    fn spawn(&self, binary: &str, config_file: &Path) -> Status {
        let program = match which::which(binary) {
            Ok(program) => program,
            Err(e) => {
                warn!("Cannot locate daemon binary '{}': {}", binary, e);
                return Status::Failed(EXIT_NOT_FOUND);
            }
        };

        info!(
            "Launching {} {}",
            program.display(),
            config_file.display()
        );

        match Command::new(&program).arg(config_file).status() {
            Ok(status) => match status.code() {
                Some(code) => {
                    info!("{} exited with code {}", program.display(), code);
                    Status::from_code(code)
                }
                None => {
                    warn!("{} was terminated by a signal", program.display());
                    Status::FAILURE
                }
            },
            Err(e) => {
                warn!("Failed to launch {}: {}", program.display(), e);
                match e.kind() {
                    std::io::ErrorKind::NotFound => Status::Failed(EXIT_NOT_FOUND),
                    std::io::ErrorKind::PermissionDenied => Status::Failed(EXIT_NOT_EXECUTABLE),
                    _ => Status::FAILURE,
                }
            }
        }
    }

    fn terminate(&self, pid: i32) -> Status {
        match kill(Pid::from_raw(pid), Signal::SIGTERM) {
            Ok(()) => {
                info!("Sent SIGTERM to process {}", pid);
                Status::Ok
            }
            Err(e) => {
                warn!("Failed to send SIGTERM to process {}: {}", pid, e);
                Status::FAILURE
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_unknown_binary() {
        let status = SystemProcessControl.spawn(
            "stunnelctl-no-such-daemon-binary",
            Path::new("/nonexistent.conf"),
        );
        assert_eq!(status, Status::Failed(EXIT_NOT_FOUND));
    }

    #[test]
    fn test_spawn_reports_exit_code() {
        // `false` ignores its argument and exits with 1
        let status = SystemProcessControl.spawn("false", Path::new("/nonexistent.conf"));
        assert_eq!(status, Status::Failed(1));

        let status = SystemProcessControl.spawn("true", Path::new("/nonexistent.conf"));
        assert_eq!(status, Status::Ok);
    }

    #[test]
    fn test_terminate_nonexistent_process() {
        // PID 99999999 is above any kernel pid_max
        assert_eq!(SystemProcessControl.terminate(99999999), Status::FAILURE);
    }
}
