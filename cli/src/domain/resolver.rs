//! Action resolver: validates a request and picks its workflow.
//!
//! `status` and `start` run directly; `stop` and `restart` disconnect
//! players and must pass a confirmation first.

use gamectl_common::Action;

use crate::domain::error::RequestError;
use crate::domain::registry::{OperationRef, ServerDefinition, ServerRegistry};
use crate::domain::request::ActionRequest;

/// What actually runs once a request is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<'a> {
    /// Query the container runtime for the server's state.
    Probe { container: &'a str },
    /// Run a lifecycle script.
    Script(&'a OperationRef),
}

/// A validated request bound to its server and operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan<'a> {
    pub server: &'a ServerDefinition,
    pub action: Action,
    pub step: Step<'a>,
}

/// The workflow a request requires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<'a> {
    DirectExecution(Plan<'a>),
    ConfirmedExecution { plan: Plan<'a>, warning: String },
}

impl<'a> Resolution<'a> {
    #[must_use]
    pub fn plan(&self) -> &Plan<'a> {
        match self {
            Resolution::DirectExecution(plan) | Resolution::ConfirmedExecution { plan, .. } => plan,
        }
    }
}

/// Warning shown before a destructive action.
#[must_use]
pub fn warning_for(action: Action) -> &'static str {
    match action {
        Action::Stop => "This will stop the server and disconnect all players!",
        Action::Restart => "This will restart the server and disconnect all players!",
        Action::Start | Action::Status => "This will affect connected players!",
    }
}

/// Resolve a request against the registry.
///
/// When `control_channel` is set, requests from any other channel are
/// rejected before the registry is consulted.
///
/// # Errors
///
/// Returns `WrongChannel`, `UnknownServer` or `UnknownAction`.
pub fn resolve<'a>(
    registry: &'a ServerRegistry,
    control_channel: Option<&str>,
    request: &ActionRequest,
) -> Result<Resolution<'a>, RequestError> {
    if let Some(expected) = control_channel {
        if request.channel != expected {
            return Err(RequestError::WrongChannel {
                expected: expected.to_string(),
                actual: request.channel.clone(),
            });
        }
    }

    let server = registry.lookup(&request.server)?;
    let unknown_action = || RequestError::UnknownAction {
        server: server.key.clone(),
        action: request.action.clone(),
    };
    let action: Action = request.action.parse().map_err(|_| unknown_action())?;

    let step = match action {
        Action::Status => Step::Probe {
            container: &server.container,
        },
        lifecycle => Step::Script(server.operations.for_action(lifecycle).ok_or_else(unknown_action)?),
    };
    let plan = Plan { server, action, step };

    Ok(if action.is_destructive() {
        Resolution::ConfirmedExecution {
            plan,
            warning: warning_for(action).to_string(),
        }
    } else {
        Resolution::DirectExecution(plan)
    })
}
