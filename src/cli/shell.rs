//! Interactive shell
//!
//! Reads commands line by line until `quit` or end of input.

use std::io::{BufRead, Write};

use stunnelctl_core::daemon::{ProcessControl, Stunnel};
use stunnelctl_core::error::Result;
use stunnelctl_core::types::Status;

use crate::cli::commands::{perform, Command, VALID_COMMANDS};

pub const PROMPT: &str = "stunnelctl> ";

/// Run the shell and return the status of the last command
pub fn run_shell<P, R, W>(stunnel: &Stunnel<P>, mut input: R, out: &mut W) -> Result<Status>
where
    P: ProcessControl,
    R: BufRead,
    W: Write,
{
    let mut status = Status::Ok;
    let mut line = String::new();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        match line.trim() {
            "" => continue,
            "q" | "quit" => break,
            name => match Command::parse(name) {
                Some(command) => status = perform(stunnel, command, out)?,
                None => {
                    writeln!(out, "valid commands: {}, quit", VALID_COMMANDS)?;
                    status = Status::FAILURE;
                }
            },
        }
    }

    Ok(status)
}
