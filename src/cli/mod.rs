//! Command-line front end
//!
//! Parses options, resolves the stunnel configuration, and then runs a
//! single command or the interactive shell. Every outcome comes back to
//! [`run`] as an exit code; only `main` exits the process.

use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;
use tracing::debug;

use stunnelctl_core::config::toml_config::load_settings;
use stunnelctl_core::config::StunnelConfig;
use stunnelctl_core::daemon::Stunnel;
use stunnelctl_core::error::StunnelError;
use stunnelctl_core::types::Status;

pub mod commands;
pub mod shell;

const COMMANDS_HELP: &str = "\
Commands:
  start   Start the stunnel instance
  stop    Stop the stunnel instance
  check   Check if stunnel is running
  getpid  Print the pid of the running stunnel instance

If the command is omitted, stunnelctl enters an interactive shell.";

#[derive(Parser, Debug)]
#[command(name = "stunnelctl")]
#[command(about = "Start and stop an stunnel instance from the command line")]
#[command(after_help = COMMANDS_HELP)]
#[command(args_override_self = true)]
struct Cli {
    /// Use CONFIG_FILE to drive the stunnel instance (it must set a pid file)
    #[arg(short = 'c', long = "stunnel-config", value_name = "CONFIG_FILE")]
    config: Option<PathBuf>,

    /// Print the version string and exit
    #[arg(short = 'v', long = "version")]
    version: bool,

    /// One of start, stop, check, getpid
    #[arg(value_name = "COMMAND")]
    command: Option<String>,
}

/// Run the CLI with the given arguments and return the exit code
pub fn run<I, T>(args: I) -> i32
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
        }
    };

    if cli.version {
        println!("stunnelctl {}", env!("CARGO_PKG_VERSION"));
        return 0;
    }

    match execute(cli) {
        Ok(status) => status.code(),
        Err(e) => {
            eprintln!("{}", e);
            exit_code(&e)
        }
    }
}

fn execute(cli: Cli) -> Result<Status, StunnelError> {
    let settings = load_settings()?;

    let config_file = cli.config.or(settings.config_file);
    let config = StunnelConfig::resolve(config_file.as_deref(), settings.parse_mode)?;
    debug!("Managing stunnel via {}", config.config_file().display());

    let stunnel = Stunnel::new(config).with_binary(settings.binary);
    let mut stdout = io::stdout().lock();

    match cli.command {
        Some(command) => commands::single(&stunnel, &command, &mut stdout),
        None => shell::run_shell(&stunnel, io::stdin().lock(), &mut stdout),
    }
}

/// Map an error to the process exit code
fn exit_code(error: &StunnelError) -> i32 {
    match error {
        // Configuration errors are reported like any other failure
        StunnelError::Config(_) | StunnelError::Toml(_) => 1,
        // Unexpected I/O is a non-clean failure
        StunnelError::Io(_) => 2,
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_exits_zero() {
        assert_eq!(run(["stunnelctl", "--help"]), 0);
    }

    #[test]
    fn test_version_exits_zero() {
        assert_eq!(run(["stunnelctl", "-v"]), 0);
    }

    #[test]
    fn test_unknown_option_exits_one() {
        assert_eq!(run(["stunnelctl", "--bogus"]), 1);
        assert_eq!(run(["stunnelctl", "-c"]), 1);
    }

    #[test]
    fn test_last_config_option_wins() {
        let cli = Cli::try_parse_from(["stunnelctl", "-c", "a.conf", "-c", "b.conf", "check"])
            .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("b.conf")));
        assert_eq!(cli.command.as_deref(), Some("check"));
    }

    #[test]
    fn test_long_config_option() {
        let cli = Cli::try_parse_from(["stunnelctl", "--stunnel-config=x.conf"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("x.conf")));
        assert_eq!(cli.command, None);
        assert!(!cli.version);
    }

    #[test]
    fn test_exit_codes() {
        let config_error = StunnelError::Config(
            stunnelctl_core::error::ConfigError::MissingConfigOption,
        );
        assert_eq!(exit_code(&config_error), 1);

        let io_error = StunnelError::Io(io::Error::new(io::ErrorKind::Other, "disk"));
        assert_eq!(exit_code(&io_error), 2);
    }
}
