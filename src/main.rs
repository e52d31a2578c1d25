//! stunnelctl - start, stop, and check an stunnel instance
//!
//! Drives an stunnel daemon through the pid file named in its
//! configuration file.

use stunnelctl_core::init_logging;

mod cli;

fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(2);
    }

    let exit_code = cli::run(std::env::args_os());
    std::process::exit(exit_code);
}
