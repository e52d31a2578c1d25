//! Pattern-based scanner for stunnel configuration files
//!
//! Only the global section of an stunnel configuration is of interest here:
//! the `pid` and `foreground` options. Everything else is ignored.

use crate::config::ParseMode;
use regex::Regex;

/// Values pulled out of a configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScannedValues {
    /// Raw value of the first non-empty `pid = ...` line
    pub pid_file: Option<String>,

    /// Whether a `foreground = yes` line was seen
    pub foreground: bool,
}

/// Line scanner for the stunnel configuration syntax
pub struct ConfigScanner {
    /// Pattern for a service section header such as `[https]`
    section_pattern: Regex,
    /// Pattern for `pid = /path/to/file`
    pid_pattern: Regex,
    /// Pattern for `foreground = yes|no|quiet`
    foreground_pattern: Regex,
}

impl ConfigScanner {
    /// Create a new scanner with compiled regex patterns
    pub fn new() -> Self {
        Self {
            section_pattern: Regex::new(r"^\[(.*)\]")
                .expect("Failed to compile section pattern"),
            pid_pattern: Regex::new(r"^pid\s*=\s*(.*)").expect("Failed to compile pid pattern"),
            foreground_pattern: Regex::new(r"^foreground\s*=\s*(.*)")
                .expect("Failed to compile foreground pattern"),
        }
    }

    /// Scan configuration lines according to `mode`
    pub fn scan<'a, I>(&self, lines: I, mode: ParseMode) -> ScannedValues
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut values = ScannedValues::default();

        for line in lines {
            let line = line.trim();

            if mode == ParseMode::Strict && self.section_pattern.is_match(line) {
                // Options after the first section belong to a service
                break;
            }

            if let Some(value) = self.capture(&self.pid_pattern, line) {
                if values.pid_file.is_none() && !value.is_empty() {
                    values.pid_file = Some(value.to_string());
                }
                continue;
            }

            if mode == ParseMode::Strict {
                if let Some(value) = self.capture(&self.foreground_pattern, line) {
                    if value == "yes" {
                        values.foreground = true;
                    }
                }
            }
        }

        values
    }

    fn capture<'l>(&self, pattern: &Regex, line: &'l str) -> Option<&'l str> {
        pattern
            .captures(line)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str())
    }
}

impl Default for ConfigScanner {
    fn default() -> Self {
        Self::new()
    }
}
