//! Builders for the reports handed to the presentation layer.

use std::time::Duration;

use gamectl_common::{Action, ActionOutcome, OutcomeKind, ServerStatus};

use crate::domain::error::ExecutionError;
use crate::domain::registry::ServerDefinition;

/// Everything a presenter needs to render a yes/no prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationPrompt {
    pub server: String,
    pub server_name: String,
    pub action: Action,
    /// Consequence of going ahead.
    pub warning: String,
    /// The question itself, e.g. "Are you sure you want to STOP the ...?"
    pub question: String,
    /// The only identity whose answer counts.
    pub requester: String,
    pub expires_in: Duration,
}

impl ConfirmationPrompt {
    #[must_use]
    pub fn new(
        server: &ServerDefinition,
        action: Action,
        warning: &str,
        requester: &str,
        expires_in: Duration,
    ) -> Self {
        Self {
            server: server.key.clone(),
            server_name: server.name.clone(),
            action,
            warning: warning.to_string(),
            question: format!(
                "Are you sure you want to {} the {}?",
                action.as_str().to_ascii_uppercase(),
                server.name
            ),
            requester: requester.to_string(),
            expires_in,
        }
    }
}

fn outcome(
    server: &ServerDefinition,
    action: Action,
    kind: OutcomeKind,
    detail: String,
    status: Option<ServerStatus>,
) -> ActionOutcome {
    ActionOutcome {
        server: server.key.clone(),
        server_name: server.name.clone(),
        action,
        kind,
        detail,
        status,
    }
}

/// Status query answered by the probe.
#[must_use]
pub fn status_reported(server: &ServerDefinition, status: ServerStatus) -> ActionOutcome {
    outcome(
        server,
        Action::Status,
        OutcomeKind::Succeeded,
        format!("{}: {status}", server.name),
        Some(status),
    )
}

/// A lifecycle script exited cleanly.
#[must_use]
pub fn lifecycle_completed(server: &ServerDefinition, action: Action) -> ActionOutcome {
    let detail = match action {
        Action::Start => format!("{} is starting...", server.name),
        Action::Stop => format!("{} stopped...", server.name),
        Action::Restart => format!("{} restarting...", server.name),
        Action::Status => format!("{}: status checked", server.name),
    };
    outcome(server, action, OutcomeKind::Succeeded, detail, None)
}

/// The external program failed; the raw error text is kept.
#[must_use]
pub fn execution_failed(server: &ServerDefinition, action: Action, err: &ExecutionError) -> ActionOutcome {
    outcome(
        server,
        action,
        OutcomeKind::Failed,
        format!("Error running {action} on {}: {err}", server.name),
        None,
    )
}

/// The prompt could not be shown, so nothing ran.
#[must_use]
pub fn prompt_failed(server: &ServerDefinition, action: Action, reason: &str) -> ActionOutcome {
    outcome(
        server,
        action,
        OutcomeKind::Failed,
        format!("Could not ask for confirmation to {action} {}: {reason}", server.name),
        None,
    )
}

#[must_use]
pub fn cancelled(server: &ServerDefinition, action: Action) -> ActionOutcome {
    outcome(server, action, OutcomeKind::Cancelled, "Action cancelled.".to_string(), None)
}

#[must_use]
pub fn timed_out(server: &ServerDefinition, action: Action) -> ActionOutcome {
    outcome(
        server,
        action,
        OutcomeKind::TimedOut,
        "Confirmation timed out. Action cancelled.".to_string(),
        None,
    )
}
