//! Lifecycle commands and their user-facing messages

use std::io::Write;

use colored::Colorize;

use stunnelctl_core::daemon::{ProcessControl, Stunnel};
use stunnelctl_core::error::Result;
use stunnelctl_core::types::Status;

/// Commands accepted on the command line and in the shell
pub const VALID_COMMANDS: &str = "start, stop, check, getpid";

/// A lifecycle command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
    Check,
    Getpid,
}

impl Command {
    /// Parse a command name
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "start" => Some(Command::Start),
            "stop" => Some(Command::Stop),
            "check" => Some(Command::Check),
            "getpid" => Some(Command::Getpid),
            _ => None,
        }
    }
}

/// Run `command` and report the outcome on `out`
pub fn perform<P, W>(stunnel: &Stunnel<P>, command: Command, out: &mut W) -> Result<Status>
where
    P: ProcessControl,
    W: Write,
{
    let status = match command {
        Command::Start => {
            let status = stunnel.start()?;
            if status.is_ok() {
                writeln!(out, "{}", "started".green())?;
            } else if stunnel.check()?.is_ok() {
                writeln!(out, "already started ({})", stunnel.getpid()?)?;
            } else {
                writeln!(out, "{}", "not started!".red())?;
            }
            status
        }
        Command::Stop => {
            let status = stunnel.stop()?;
            if status.is_ok() {
                writeln!(out, "{}", "stopped".green())?;
            } else if !stunnel.check()?.is_ok() {
                writeln!(out, "already stopped")?;
            } else {
                writeln!(out, "{}", "not stopped!".red())?;
            }
            status
        }
        Command::Check => {
            let status = stunnel.check()?;
            if status.is_ok() {
                writeln!(out, "running ({})", stunnel.getpid()?)?;
            } else {
                writeln!(out, "not running")?;
            }
            status
        }
        Command::Getpid => {
            let pid = stunnel.getpid()?;
            writeln!(out, "{}", pid)?;
            if pid >= 0 {
                Status::Ok
            } else {
                Status::FAILURE
            }
        }
    };

    Ok(status)
}

/// Run a single command given by name
pub fn single<P, W>(stunnel: &Stunnel<P>, name: &str, out: &mut W) -> Result<Status>
where
    P: ProcessControl,
    W: Write,
{
    match Command::parse(name) {
        Some(command) => perform(stunnel, command, out),
        None => {
            writeln!(out, "valid commands: {}", VALID_COMMANDS)?;
            Ok(Status::FAILURE)
        }
    }
}
