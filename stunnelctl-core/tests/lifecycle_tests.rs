//! End-to-end lifecycle test against a stub daemon
//!
//! The stub is a shell script that forks a long sleep, writes its pid to
//! the pid file, and exits, which is how stunnel itself behaves. Kept alone
//! in this file so no other test forks while the script is being written.

#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;

use stunnelctl_core::config::StunnelConfig;
use stunnelctl_core::daemon::Stunnel;
use stunnelctl_core::types::Status;
use tempfile::TempDir;

#[test]
fn test_start_check_stop_with_stub_daemon() {
    let dir = TempDir::new().unwrap();
    let pid_file = dir.path().join("stunnel.pid");
    let config_file = dir.path().join("stunnel.conf");
    let stub = dir.path().join("fake-stunnel");

    std::fs::write(
        &config_file,
        format!("pid = {}\nforeground = no\n\n[echo]\naccept = 127.0.0.1:0\n", pid_file.display()),
    )
    .unwrap();
    std::fs::write(
        &stub,
        format!(
            "#!/bin/sh\nsleep 30 >/dev/null 2>&1 &\necho $! > '{}'\n",
            pid_file.display()
        ),
    )
    .unwrap();
    std::fs::set_permissions(&stub, std::fs::Permissions::from_mode(0o755)).unwrap();

    let config = StunnelConfig::resolve(Some(config_file.as_path()), Default::default()).unwrap();
    let stunnel = Stunnel::new(config).with_binary(stub.to_string_lossy());

    assert_eq!(stunnel.check().unwrap(), Status::FAILURE);
    assert_eq!(stunnel.start().unwrap(), Status::Ok);

    assert_eq!(stunnel.check().unwrap(), Status::Ok);
    let pid = stunnel.getpid().unwrap();
    assert!(pid > 0, "stub daemon should have written a pid, got {}", pid);

    assert_eq!(stunnel.start().unwrap(), Status::FAILURE);
    assert_eq!(stunnel.stop().unwrap(), Status::Ok);
}
