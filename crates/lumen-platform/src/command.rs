//! Shell command execution behind a swappable capability trait.
//!
//! Production code runs through [`ShellRunner`]; tests substitute fakes
//! with canned output so no subprocess is ever spawned.

use std::io;
use std::process::Command;

/// Capability to run one shell command and return its stdout.
///
/// Implementations return the raw outcome; the swallow-and-log fallback
/// policy lives in [`crate::probe::PlatformProbe::query`], not here.
pub trait CommandRunner: Send + Sync {
    /// Run `command` through the host shell, block until it exits, and
    /// return captured stdout with lines joined by `\n` (no trailing
    /// newline).
    fn run(&self, command: &str) -> io::Result<String>;
}

/// Runs commands through the platform shell (`sh -c` / `cmd /C`).
#[derive(Debug, Default, Clone, Copy)]
pub struct ShellRunner;

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> io::Result<String> {
        #[cfg(windows)]
        let output = Command::new("cmd").args(["/C", command]).output()?;
        #[cfg(not(windows))]
        let output = Command::new("sh").args(["-c", command]).output()?;

        Ok(join_lines(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// Normalize captured stdout: split on line endings, rejoin with a single
/// `\n`, drop the trailing newline.
fn join_lines(raw: &str) -> String {
    raw.lines().collect::<Vec<_>>().join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_lines_drops_trailing_newline() {
        assert_eq!(join_lines("one\ntwo\n"), "one\ntwo");
        assert_eq!(join_lines("one\r\ntwo\r\n"), "one\ntwo");
        assert_eq!(join_lines(""), "");
        assert_eq!(join_lines("\n"), "");
    }

    #[cfg(unix)]
    #[test]
    fn test_shell_runner_captures_stdout() {
        let out = ShellRunner.run("echo hello").unwrap();
        assert_eq!(out, "hello");
    }

    #[cfg(unix)]
    #[test]
    fn test_shell_runner_multiline_output() {
        let out = ShellRunner.run("printf 'a\\nb\\n'").unwrap();
        assert_eq!(out, "a\nb");
    }
}
