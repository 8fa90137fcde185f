//! Runs SYMCLI and parses its XML output.

use std::process::{Command, Output, Stdio};

use tracing::debug;

use crate::config::Config;
use crate::document::Element;
use crate::error::{Error, Result};

/// Source of the storage group document for an array.
pub trait StructuredQuery {
    fn fetch(&self, sid: &str) -> Result<Element>;
}

/// Queries an array with `symsg -sid <sid> list -v -output xml_e`.
///
/// The program is executed directly, not through a shell, so the array id
/// is passed through as a single argument.
#[derive(Debug, Clone)]
pub struct SymcliAdapter {
    config: Config,
}

impl SymcliAdapter {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Arguments passed to the program for `sid`.
    pub fn command_line(&self, sid: &str) -> Vec<String> {
        ["-sid", sid, "list", "-v", "-output", "xml_e"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }
}

impl StructuredQuery for SymcliAdapter {
    fn fetch(&self, sid: &str) -> Result<Element> {
        let program = self.config.program_path();
        let args = self.command_line(sid);
        let command = format!("{} {}", program.display(), args.join(" "));

        debug!(%command, "running SYMCLI query");
        let output = Command::new(&program)
            .args(&args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| Error::ExternalTool {
                command: command.clone(),
                reason: format!("could not be started: {}", e),
            })?;

        if !output.status.success() {
            return Err(Error::ExternalTool {
                command,
                reason: failure_reason(&output),
            });
        }

        debug!(bytes = output.stdout.len(), "captured SYMCLI output");
        let xml = String::from_utf8(output.stdout)
            .map_err(|e| Error::MalformedOutput(format!("output is not UTF-8: {}", e)))?;
        Element::parse(&xml)
    }
}

/// Exit status plus the last line SYMCLI printed, preferring stderr.
fn failure_reason(output: &Output) -> String {
    let last_line = |bytes: &[u8]| {
        String::from_utf8_lossy(bytes)
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .last()
            .map(str::to_string)
    };

    match last_line(&output.stderr).or_else(|| last_line(&output.stdout)) {
        Some(line) => format!("failed with {}: {}", output.status, line),
        None => format!("failed with {}", output.status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn adapter_for(program: &str, temp: &TempDir) -> SymcliAdapter {
        let mut config = Config::new(temp.path().to_path_buf());
        config.program = program.to_string();
        SymcliAdapter::new(config)
    }

    #[test]
    fn test_command_line() {
        let adapter = SymcliAdapter::new(Config::default());
        assert_eq!(
            adapter.command_line("000197800123"),
            vec!["-sid", "000197800123", "list", "-v", "-output", "xml_e"]
        );
    }

    #[test]
    fn test_sid_is_a_single_argument() {
        let adapter = SymcliAdapter::new(Config::default());
        let args = adapter.command_line("123; rm -rf /");
        assert_eq!(args[1], "123; rm -rf /");
        assert_eq!(args.len(), 6);
    }

    #[test]
    fn test_missing_program() {
        let temp = TempDir::new().unwrap();
        let adapter = adapter_for("hiolreport-test-no-such-symsg", &temp);

        let result = adapter.fetch("123");
        assert!(matches!(result, Err(Error::ExternalTool { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_nonzero_exit() {
        let temp = TempDir::new().unwrap();
        let adapter = adapter_for("false", &temp);

        let err = adapter.fetch("123").unwrap_err();
        assert!(matches!(err, Error::ExternalTool { .. }));
        assert!(err.to_string().contains("-sid 123 list -v -output xml_e"));
    }

    #[cfg(unix)]
    #[test]
    fn test_empty_output_is_malformed() {
        let temp = TempDir::new().unwrap();
        let adapter = adapter_for("true", &temp);

        let result = adapter.fetch("123");
        assert!(matches!(result, Err(Error::MalformedOutput(_))));
    }
}
