//! Confirmation session: the yes/no gate in front of destructive actions.
//!
//! Pure state machine: the caller feeds it responses and the deadline signal
//! and it decides the single terminal state. Time is passed in, never read.
//!
//! ```text
//! Pending ──respond(owner, yes)──▶ Approved
//!    │────respond(owner, no)────▶ Cancelled
//!    └────deadline elapsed──────▶ Expired
//! ```

use std::str::FromStr;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use crate::domain::request::ActionRequest;

/// How long a requester has to answer a confirmation prompt.
pub const DEFAULT_CONFIRMATION_TIMEOUT: Duration = Duration::from_secs(30);

/// A requester's answer to the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Yes,
    No,
}

impl FromStr for Choice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" | "y" | "confirm_yes" => Ok(Choice::Yes),
            "no" | "n" | "confirm_no" => Ok(Choice::No),
            other => Err(format!("expected yes or no, got '{other}'")),
        }
    }
}

/// Session lifecycle state. Every state but `Pending` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Pending,
    Approved,
    Cancelled,
    Expired,
}

/// The terminal state a session settled on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Approved,
    Cancelled,
    Expired,
}

impl From<Verdict> for SessionState {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Verdict::Approved => SessionState::Approved,
            Verdict::Cancelled => SessionState::Cancelled,
            Verdict::Expired => SessionState::Expired,
        }
    }
}

/// Why a signal did not change the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    /// The responder is not the requester who owns the session.
    UnauthorizedResponder,
    /// The session already settled; the first signal won.
    AlreadySettled(Verdict),
}

/// Result of feeding one signal into the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Settled(Verdict),
    Ignored(Ignored),
}

/// A pending destructive action awaiting its requester's yes or no.
#[derive(Debug, Clone)]
pub struct ConfirmationSession {
    request: ActionRequest,
    created_at: DateTime<Utc>,
    deadline: Instant,
    verdict: Option<Verdict>,
}

impl ConfirmationSession {
    /// Open a session for `request`, expiring `window` after `now`.
    ///
    /// A window too large to represent as an `Instant` expires at `now`.
    #[must_use]
    pub fn open(request: ActionRequest, created_at: DateTime<Utc>, now: Instant, window: Duration) -> Self {
        Self {
            request,
            created_at,
            deadline: now.checked_add(window).unwrap_or(now),
            verdict: None,
        }
    }

    #[must_use]
    pub fn request(&self) -> &ActionRequest {
        &self.request
    }

    /// The only identity allowed to resolve this session.
    #[must_use]
    pub fn authorized_requester(&self) -> &str {
        &self.request.requester
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn deadline(&self) -> Instant {
        self.deadline
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.verdict.map_or(SessionState::Pending, SessionState::from)
    }

    #[must_use]
    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.verdict.is_some()
    }

    /// Feed a response observed at `now`.
    ///
    /// A response from anyone other than the requester is dropped. An
    /// authorized response at or past the deadline expires the session.
    pub fn respond(&mut self, responder: &str, choice: Choice, now: Instant) -> Transition {
        if let Some(verdict) = self.verdict {
            return Transition::Ignored(Ignored::AlreadySettled(verdict));
        }
        if responder != self.request.requester {
            return Transition::Ignored(Ignored::UnauthorizedResponder);
        }
        if now >= self.deadline {
            return self.settle(Verdict::Expired);
        }
        match choice {
            Choice::Yes => self.settle(Verdict::Approved),
            Choice::No => self.settle(Verdict::Cancelled),
        }
    }

    /// Feed the deadline-elapsed signal.
    pub fn expire(&mut self) -> Transition {
        match self.verdict {
            Some(verdict) => Transition::Ignored(Ignored::AlreadySettled(verdict)),
            None => self.settle(Verdict::Expired),
        }
    }

    fn settle(&mut self, verdict: Verdict) -> Transition {
        self.verdict = Some(verdict);
        Transition::Settled(verdict)
    }
}
