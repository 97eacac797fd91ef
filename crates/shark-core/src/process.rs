//! Process invocation capability
//!
//! Every external action the tool performs (git clone/init/remote,
//! package-manager version queries, the final install) goes through the
//! [`ProcessRunner`] trait, so tests can substitute a fake that records
//! invocations instead of spawning real binaries.

use std::process::Stdio;

use async_trait::async_trait;
use camino::Utf8Path;
use tokio::process::Command;
use tracing::debug;

use crate::error::{Error, Result};

/// Captured result of a completed child process
#[derive(Debug, Clone)]
pub struct ProcessOutput {
    /// Whether the child exited with status zero
    pub success: bool,
    /// Decoded stdout
    pub stdout: String,
    /// Decoded stderr
    pub stderr: String,
}

impl ProcessOutput {
    /// Trimmed stdout, the usual shape of a `--version` answer
    pub fn stdout_trimmed(&self) -> &str {
        self.stdout.trim()
    }
}

/// Narrow interface over spawning external programs
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Run a program to completion, capturing its output
    async fn run(
        &self,
        program: &str,
        args: &[&str],
        cwd: Option<&Utf8Path>,
    ) -> Result<ProcessOutput>;

    /// Run a program with stdio inherited from the parent terminal,
    /// returning whether it exited successfully
    async fn run_inherited(
        &self,
        program: &str,
        args: &[&str],
        cwd: Option<&Utf8Path>,
    ) -> Result<bool>;
}

/// [`ProcessRunner`] backed by real child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProcessRunner;

#[async_trait]
impl ProcessRunner for SystemProcessRunner {
    async fn run(
        &self,
        program: &str,
        args: &[&str],
        cwd: Option<&Utf8Path>,
    ) -> Result<ProcessOutput> {
        debug!("Running: {} {}", program, args.join(" "));

        let mut cmd = Command::new(program);
        cmd.args(args).stdin(Stdio::null());
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        let output = cmd
            .output()
            .await
            .map_err(|e| Error::spawn(program, e))?;

        Ok(ProcessOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    async fn run_inherited(
        &self,
        program: &str,
        args: &[&str],
        cwd: Option<&Utf8Path>,
    ) -> Result<bool> {
        debug!("Running (inherited stdio): {} {}", program, args.join(" "));

        let mut cmd = Command::new(program);
        cmd.args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        let status = cmd
            .status()
            .await
            .map_err(|e| Error::spawn(program, e))?;

        Ok(status.success())
    }
}
