//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Request validation errors ─────────────────────────────────────────────────

/// Reasons an action request is rejected before anything runs.
///
/// Always terminal for the request; never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    #[error("Unknown server '{0}'. Run 'gamectl servers' to list registered servers.")]
    UnknownServer(String),

    #[error("Unknown action '{action}' for {server}. Valid actions: start (up), stop (down), restart, status.")]
    UnknownAction { server: String, action: String },

    #[error("This command only works in the #{expected} channel.")]
    WrongChannel { expected: String, actual: String },
}

impl RequestError {
    /// Stable machine-readable code for `--json` output.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownServer(_) => "unknown_server",
            Self::UnknownAction { .. } => "unknown_action",
            Self::WrongChannel { .. } => "wrong_channel",
        }
    }
}

// ── Execution errors ──────────────────────────────────────────────────────────

/// An external program could not be run to a successful exit.
///
/// Carries the raw error text so it can be shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExecutionError {
    #[error("{program} could not be run: {detail}")]
    Launch { program: String, detail: String },

    #[error("{program} failed ({status}): {detail}")]
    NonZeroExit {
        program: String,
        status: String,
        detail: String,
    },
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors raised while building the server registry from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("No servers configured. Add at least one entry under 'servers:'.")]
    NoServers,

    #[error("Invalid server key '{0}': must match ^[a-z0-9][a-z0-9_-]*$")]
    InvalidServerKey(String),

    #[error("Duplicate server key '{0}'.")]
    DuplicateServer(String),

    #[error("Server '{server}' has an empty {field}.")]
    EmptyField { server: String, field: &'static str },

    #[error("{field} must be greater than zero.")]
    ZeroTimeout { field: &'static str },

    #[error("{field} must be at most {max} seconds.")]
    TimeoutTooLarge { field: &'static str, max: u64 },
}
