//! Shared value types
//!
//! Lifecycle operations report an integer status in the shell tradition:
//! zero means success, anything else is a failure code.

use std::fmt;

/// Sentinel returned by `getpid` when no daemon process is known
pub const NO_PID: i32 = -1;

/// Outcome of a lifecycle operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The operation succeeded (code 0)
    Ok,

    /// The operation failed with a non-zero code
    Failed(i32),
}

impl Status {
    /// The generic failure used for unmet preconditions
    pub const FAILURE: Status = Status::Failed(1);

    /// Build a status from a raw exit code
    pub fn from_code(code: i32) -> Self {
        if code == 0 {
            Status::Ok
        } else {
            Status::Failed(code)
        }
    }

    /// Raw exit code for this status
    pub fn code(self) -> i32 {
        match self {
            Status::Ok => 0,
            Status::Failed(code) => code,
        }
    }

    pub fn is_ok(self) -> bool {
        matches!(self, Status::Ok)
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Ok
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ok => write!(f, "ok"),
            Status::Failed(code) => write!(f, "failed ({})", code),
        }
    }
}
