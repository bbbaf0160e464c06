//! Package manager integration for installing gems after the Gemfile changes
//!
//! This module provides:
//! - The `PackageManagerRunner` seam used by the orchestrator
//! - Execution of `bundle install` (or a configured replacement command)

use serde::Serialize;
use std::path::PathBuf;
use std::process::{Command, Output};
use tracing::debug;

/// Installer command run after all specifications are processed
pub const DEFAULT_INSTALL_COMMAND: [&str; 2] = ["bundle", "install"];

/// Result of a package manager installation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstallOutcome {
    /// The command that was executed
    pub command: String,
    /// Whether the command launched and exited successfully
    pub succeeded: bool,
    /// Standard output from the command
    pub stdout: String,
    /// Standard error from the command
    pub stderr: String,
    /// Launch failure or exit status description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl InstallOutcome {
    /// Create a successful install outcome
    pub fn success(command: String, stdout: String, stderr: String) -> Self {
        Self {
            command,
            succeeded: true,
            stdout,
            stderr,
            error_message: None,
        }
    }

    /// Create a failed install outcome
    pub fn failure(command: String, stdout: String, stderr: String, message: String) -> Self {
        Self {
            command,
            succeeded: false,
            stdout,
            stderr,
            error_message: Some(message),
        }
    }

    /// True when the command exited successfully but wrote to stderr
    pub fn has_warnings(&self) -> bool {
        self.succeeded && !self.stderr.trim().is_empty()
    }
}

/// Trait for running the package manager install step
pub trait PackageManagerRunner {
    /// The command line as shown to the user
    fn command_line(&self) -> String;

    /// Run the install command once
    fn run_install(&self) -> InstallOutcome;
}

/// Package manager runner that executes a real command
#[derive(Debug, Clone)]
pub struct SystemPackageManager {
    /// Program followed by its arguments
    command: Vec<String>,
    /// Directory to run in; `None` inherits the current directory
    working_dir: Option<PathBuf>,
}

impl SystemPackageManager {
    /// Create a runner for an arbitrary command
    pub fn new(command: Vec<String>, working_dir: Option<PathBuf>) -> Self {
        Self {
            command,
            working_dir,
        }
    }

    /// Run a command and capture output
    fn run_command(&self) -> std::io::Result<Output> {
        let Some((program, args)) = self.command.split_first() else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Empty command",
            ));
        };

        let mut command = Command::new(program);
        command.args(args);
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }
        command.output()
    }
}

impl PackageManagerRunner for SystemPackageManager {
    fn command_line(&self) -> String {
        self.command.join(" ")
    }

    fn run_install(&self) -> InstallOutcome {
        let command_str = self.command_line();
        debug!(command = %command_str, dir = ?self.working_dir, "running installer");

        match self.run_command() {
            Ok(output) => {
                let stdout = String::from_utf8_lossy(&output.stdout).to_string();
                let stderr = String::from_utf8_lossy(&output.stderr).to_string();

                if output.status.success() {
                    InstallOutcome::success(command_str, stdout, stderr)
                } else {
                    let message = format!("{} failed with {}", command_str, output.status);
                    InstallOutcome::failure(command_str, stdout, stderr, message)
                }
            }
            Err(e) => {
                let message = format!("Failed to execute command: {}", e);
                InstallOutcome::failure(command_str, String::new(), String::new(), message)
            }
        }
    }
}
