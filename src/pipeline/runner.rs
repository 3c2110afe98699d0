//! Narrow seam around spawning the external converter

use std::process::Command;

use super::command::CommandSpec;
use super::error::ConvertError;

/// Captured result of a completed converter run
#[derive(Debug, Clone)]
pub struct ToolOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Executes an assembled command and captures its output.
///
/// Implemented by the real process spawner below and by fakes in tests, so
/// command assembly and error reporting can be exercised without the
/// pandoc/LaTeX toolchain installed.
pub trait ToolRunner {
    fn run(&self, spec: &CommandSpec) -> Result<ToolOutput, ConvertError>;
}

/// Spawns the converter as a child process, blocking until it exits
pub struct SystemRunner;

impl ToolRunner for SystemRunner {
    fn run(&self, spec: &CommandSpec) -> Result<ToolOutput, ConvertError> {
        // Any spawn failure, NotFound or otherwise, means the converter
        // never ran; there is no exit status or stderr to report.
        let output = Command::new(&spec.program)
            .args(&spec.args)
            .output()
            .map_err(|_| ConvertError::ToolNotFound)?;

        Ok(ToolOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}
