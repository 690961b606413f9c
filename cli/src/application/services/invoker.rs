//! Process invoker: runs lifecycle scripts and the status probe.
//!
//! Normalizes every external execution into either a success value or an
//! `ExecutionError` carrying the raw error text. No retries.

use std::process::Output;
use std::time::Duration;

use gamectl_common::ServerStatus;

use crate::application::ports::CommandRunner;
use crate::domain::{ExecutionError, OperationRef};

/// Executes operation references through a `CommandRunner`.
pub struct ProcessInvoker<R> {
    runner: R,
    status_probe: OperationRef,
    script_timeout: Duration,
    probe_timeout: Duration,
}

impl<R: CommandRunner> ProcessInvoker<R> {
    #[must_use]
    pub fn new(runner: R, status_probe: OperationRef, script_timeout: Duration, probe_timeout: Duration) -> Self {
        Self {
            runner,
            status_probe,
            script_timeout,
            probe_timeout,
        }
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Run `op` with `extra_args` appended and wait for it to finish.
    ///
    /// # Errors
    ///
    /// `ExecutionError::Launch` if the program cannot be spawned or times
    /// out; `ExecutionError::NonZeroExit` if it exits unsuccessfully.
    pub async fn run(&self, op: &OperationRef, extra_args: &[&str], timeout: Duration) -> Result<Output, ExecutionError> {
        let args: Vec<&str> = op
            .args
            .iter()
            .map(String::as_str)
            .chain(extra_args.iter().copied())
            .collect();

        let output = self
            .runner
            .run_with_timeout(&op.program, &args, timeout)
            .await
            .map_err(|e| ExecutionError::Launch {
                program: op.program.clone(),
                detail: format!("{e:#}"),
            })?;

        if !output.status.success() {
            return Err(ExecutionError::NonZeroExit {
                program: op.program.clone(),
                status: output.status.to_string(),
                detail: failure_detail(&output),
            });
        }
        Ok(output)
    }

    /// Run a lifecycle script; only success or failure matters.
    ///
    /// # Errors
    ///
    /// See [`ProcessInvoker::run`].
    pub async fn run_operation(&self, op: &OperationRef) -> Result<(), ExecutionError> {
        self.run(op, &[], self.script_timeout).await.map(|_| ())
    }

    /// Ask the container runtime for `container`'s state.
    ///
    /// # Errors
    ///
    /// See [`ProcessInvoker::run`]. An unrecognised token is not an error;
    /// it maps to `ServerStatus::Unknown`.
    pub async fn probe_status(&self, container: &str) -> Result<ServerStatus, ExecutionError> {
        let output = self.run(&self.status_probe, &[container], self.probe_timeout).await?;
        Ok(parse_status(&String::from_utf8_lossy(&output.stdout)))
    }
}

/// Parse the first line of probe output into a status.
#[must_use]
pub fn parse_status(stdout: &str) -> ServerStatus {
    ServerStatus::from_token(stdout.lines().next().unwrap_or_default())
}

/// Prefer stderr; fall back to stdout, then to a placeholder.
fn failure_detail(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    if !stderr.is_empty() {
        return stderr.to_string();
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stdout = stdout.trim();
    if stdout.is_empty() {
        "no output".to_string()
    } else {
        stdout.to_string()
    }
}
