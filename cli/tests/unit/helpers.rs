//! Shared test helpers: output constructors and fleet fixtures.

#![allow(dead_code)]

use std::process::{ExitStatus, Output};
use std::time::Duration;

use gamectl_cli::application::services::dispatch::{DispatchPolicy, Dispatcher};
use gamectl_cli::application::services::invoker::ProcessInvoker;
use gamectl_cli::domain::{ActionRequest, OperationRef, Operations, ServerDefinition, ServerRegistry};

use crate::mocks::RecordingRunner;

pub const CONTROL_CHANNEL: &str = "server-control";
pub const REQUESTER: &str = "alice";
pub const WINDOW: Duration = Duration::from_secs(30);

// ── Cross-platform ExitStatus construction ───────────────────────────────────

/// Build an `ExitStatus` from a logical exit code (0 = success, non-zero = failure).
///
/// On Unix the raw wait-status encodes the exit code in bits 8–15, so we shift.
#[cfg(unix)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::unix::process::ExitStatusExt;
    ExitStatus::from_raw(code << 8)
}

#[cfg(windows)]
pub fn exit_status(code: i32) -> ExitStatus {
    use std::os::windows::process::ExitStatusExt;
    #[allow(clippy::cast_sign_loss)]
    ExitStatus::from_raw(code as u32)
}

// ── Output constructors ──────────────────────────────────────────────────────

pub fn ok_output(stdout: &[u8]) -> Output {
    Output {
        status: exit_status(0),
        stdout: stdout.to_vec(),
        stderr: Vec::new(),
    }
}

pub fn err_output(code: i32, stderr: &[u8]) -> Output {
    Output {
        status: exit_status(code),
        stdout: Vec::new(),
        stderr: stderr.to_vec(),
    }
}

// ── Fleet fixtures ───────────────────────────────────────────────────────────

fn server(key: &str, name: &str, container: &str) -> ServerDefinition {
    let script = |verb: &str| OperationRef::new(format!("/opt/server-control/{key}-{verb}.sh"), &[]);
    ServerDefinition {
        key: key.to_string(),
        name: name.to_string(),
        container: container.to_string(),
        operations: Operations {
            start: script("up"),
            stop: script("down"),
            restart: script("restart"),
        },
    }
}

/// `icarus` and `sotf`, as registered on the production host.
pub fn fleet() -> ServerRegistry {
    ServerRegistry::new([
        server("icarus", "Icarus Dedicated Server", "icarus-dedicated"),
        server("sotf", "Sons of the Forest Server", "sotf"),
    ])
    .expect("fixture registry is valid")
}

pub fn status_probe() -> OperationRef {
    OperationRef::new("docker", &["inspect", "--format={{.State.Status}}"])
}

pub fn dispatcher(registry: &ServerRegistry, runner: RecordingRunner) -> Dispatcher<'_, RecordingRunner> {
    let invoker = ProcessInvoker::new(runner, status_probe(), Duration::from_secs(300), Duration::from_secs(30));
    Dispatcher::new(
        registry,
        invoker,
        DispatchPolicy {
            control_channel: Some(CONTROL_CHANNEL.to_string()),
            confirmation_window: WINDOW,
        },
    )
}

/// A request from the authorized requester in the control channel.
pub fn request(server: &str, action: &str) -> ActionRequest {
    ActionRequest::new(REQUESTER, server, action, CONTROL_CHANNEL)
}
