//! Daemon lifecycle management
//!
//! Starts, stops, and checks an stunnel process through the pid file named
//! in its configuration.

pub mod controller;
pub mod pidfile;
pub mod process;

// Public re-exports
pub use controller::Stunnel;
pub use process::{ProcessControl, SystemProcessControl};
