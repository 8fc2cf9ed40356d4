//! External command execution with streamed output
//!
//! Scaffolding shells out to `dotnet` and the JS package managers. Output is
//! streamed line-by-line so the underlying tool's own messages reach the
//! terminal verbatim; the exit status is captured in a [`StepOutcome`]
//! instead of aborting the run.

use colored::Colorize;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command as TokioCommand;

/// One shell-out to a build/package tool
#[derive(Debug, Clone)]
pub struct ExternalCommand {
    pub executable: &'static str,
    pub argv: Vec<String>,
    pub working_dir: Option<PathBuf>,
}

impl ExternalCommand {
    pub fn new(executable: &'static str, argv: Vec<String>) -> Self {
        Self {
            executable,
            argv,
            working_dir: None,
        }
    }

    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// The command line as shown to the user
    pub fn rendered(&self) -> String {
        let mut parts = vec![self.executable.to_string()];
        parts.extend(self.argv.iter().cloned());
        parts.join(" ")
    }

    /// Run to completion, streaming stdout/stderr to the terminal.
    pub async fn run(&self) -> StepStatus {
        let mut command = TokioCommand::new(self.executable);
        command
            .args(&self.argv)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(e) => return StepStatus::SpawnFailed(e.to_string()),
        };

        // stdout/stderr are always piped above, so take() cannot miss
        let stdout = child.stdout.take().expect("stdout was piped");
        let stderr = child.stderr.take().expect("stderr was piped");

        let mut stdout_reader = BufReader::new(stdout).lines();
        let mut stderr_reader = BufReader::new(stderr).lines();

        let mut stdout_done = false;
        let mut stderr_done = false;
        while !(stdout_done && stderr_done) {
            tokio::select! {
                line = stdout_reader.next_line(), if !stdout_done => {
                    match line {
                        Ok(Some(line)) => println!("  {}", line),
                        Ok(None) => stdout_done = true,
                        Err(e) => {
                            eprintln!("{} {}", "Error reading stdout:".red(), e);
                            stdout_done = true;
                        }
                    }
                }
                line = stderr_reader.next_line(), if !stderr_done => {
                    match line {
                        Ok(Some(line)) => eprintln!("  {}", line.yellow()),
                        Ok(None) => stderr_done = true,
                        Err(e) => {
                            eprintln!("{} {}", "Error reading stderr:".red(), e);
                            stderr_done = true;
                        }
                    }
                }
            }
        }

        match child.wait().await {
            Ok(status) => StepStatus::Exited(status.code().unwrap_or(-1)),
            Err(e) => StepStatus::SpawnFailed(e.to_string()),
        }
    }
}

/// How an integration step ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepStatus {
    /// The step's precondition made it unnecessary
    Skipped,
    Exited(i32),
    SpawnFailed(String),
}

/// Result of one workflow step, returned to the caller instead of being
/// buried in log output
#[derive(Debug, Clone)]
pub struct StepOutcome {
    pub label: &'static str,
    pub command: String,
    pub status: StepStatus,
}

impl StepOutcome {
    pub fn skipped(label: &'static str, command: String) -> Self {
        Self {
            label,
            command,
            status: StepStatus::Skipped,
        }
    }

    pub fn success(&self) -> bool {
        matches!(self.status, StepStatus::Skipped | StepStatus::Exited(0))
    }
}
