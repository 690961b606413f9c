use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An operator-issued action against a game server.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Start,
    Stop,
    Restart,
    Status,
}

/// Raised when an action token is not one of the known actions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown action '{0}'")]
pub struct ParseActionError(pub String);

impl Action {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Start => "start",
            Action::Stop => "stop",
            Action::Restart => "restart",
            Action::Status => "status",
        }
    }

    /// Stop and restart disconnect active players.
    #[must_use]
    pub fn is_destructive(self) -> bool {
        matches!(self, Action::Stop | Action::Restart)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = ParseActionError;

    /// Accepts the canonical names plus the `up`/`down` aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "start" | "up" => Ok(Action::Start),
            "stop" | "down" => Ok(Action::Stop),
            "restart" => Ok(Action::Restart),
            "status" => Ok(Action::Status),
            _ => Err(ParseActionError(s.to_string())),
        }
    }
}

/// Container state as reported by the status probe.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ServerStatus {
    Running,
    Exited,
    Restarting,
    Unknown,
}

impl ServerStatus {
    /// Map a single probe token to a status. Unrecognised tokens are `Unknown`.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token.trim() {
            "running" => ServerStatus::Running,
            "exited" => ServerStatus::Exited,
            "restarting" => ServerStatus::Restarting,
            _ => ServerStatus::Unknown,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ServerStatus::Running => "running",
            ServerStatus::Exited => "exited",
            ServerStatus::Restarting => "restarting",
            ServerStatus::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ServerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an action request ended.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Succeeded,
    Failed,
    Cancelled,
    TimedOut,
}

/// The single report produced for each action request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActionOutcome {
    /// Registry key of the target server.
    pub server: String,
    /// Display name of the target server.
    pub server_name: String,
    pub action: Action,
    pub kind: OutcomeKind,
    /// Human-readable description of what happened.
    pub detail: String,
    /// Only set for status queries.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<ServerStatus>,
}

impl ActionOutcome {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.kind == OutcomeKind::Succeeded
    }

    /// `true` for every kind except `Failed`.
    #[must_use]
    pub fn is_clean_exit(&self) -> bool {
        self.kind != OutcomeKind::Failed
    }
}
