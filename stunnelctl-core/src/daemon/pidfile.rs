//! Pid file reading
//!
//! The pid file belongs to the daemon. stunnelctl only ever reads it.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::types::NO_PID;

/// Maximum number of bytes read from a pid file
pub const PID_READ_LIMIT: u64 = 16;

/// Read the pid stored in `path`
///
/// Returns [`NO_PID`] when the file is absent, empty, or does not hold a
/// base-10 integer in its first [`PID_READ_LIMIT`] bytes. Other I/O errors,
/// such as permission problems, are returned to the caller.
pub fn read_pid(path: &Path) -> io::Result<i32> {
    if !path.is_file() {
        return Ok(NO_PID);
    }

    let file = match File::open(path) {
        Ok(file) => file,
        // Removed by the daemon between the check and the open
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(NO_PID),
        Err(e) => return Err(e),
    };

    let mut buffer = Vec::with_capacity(PID_READ_LIMIT as usize);
    file.take(PID_READ_LIMIT).read_to_end(&mut buffer)?;

    Ok(parse_pid(&buffer))
}

/// Parse pid file contents
pub fn parse_pid(bytes: &[u8]) -> i32 {
    std::str::from_utf8(bytes)
        .ok()
        .map(str::trim)
        .and_then(|text| text.parse::<i32>().ok())
        .unwrap_or(NO_PID)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_pid() {
        assert_eq!(parse_pid(b"12345"), 12345);
    }

    #[test]
    fn test_parse_pid_with_newline() {
        assert_eq!(parse_pid(b"4321\n"), 4321);
        assert_eq!(parse_pid(b"  77 \r\n"), 77);
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(parse_pid(b"not a pid"), NO_PID);
        assert_eq!(parse_pid(b"12ab"), NO_PID);
        assert_eq!(parse_pid(b""), NO_PID);
        assert_eq!(parse_pid(&[0xff, 0xfe, 0x31]), NO_PID);
    }

    #[test]
    fn test_parse_signed_values() {
        assert_eq!(parse_pid(b"+42"), 42);
        assert_eq!(parse_pid(b"-7"), -7);
    }

    #[test]
    fn test_read_missing_file() {
        let path = Path::new("/nonexistent/stunnelctl/test.pid");
        assert_eq!(read_pid(path).unwrap(), NO_PID);
    }
}
