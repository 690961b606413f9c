//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain` and shared types — never from
//! `crate::infra`, `crate::commands`, or `crate::output`.

use std::process::Output;

use anyhow::Result;
use gamectl_common::ActionOutcome;
use tokio::sync::mpsc;

use crate::domain::{Choice, ConfirmationPrompt, GamectlConfig, RequestError};

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Run a program and capture its output.
    ///
    /// Implementations should delegate to `run_with_timeout` using the
    /// instance's configured default timeout.
    async fn run(&self, program: &str, args: &[&str]) -> Result<Output>;
    /// Run a program with a custom timeout override.
    ///
    /// # Errors
    ///
    /// Returns an error if the process cannot be spawned or exceeds `timeout`.
    /// On timeout, the child process must be killed (not left orphaned).
    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[&str],
        timeout: std::time::Duration,
    ) -> Result<Output>;
}

// ── Presentation Port ─────────────────────────────────────────────────────────

/// Who may see a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    /// Visible to everyone watching the origination channel.
    Public,
    /// Visible only to the requester.
    Private,
}

/// An answer delivered back from the presentation surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationResponse {
    /// Identity of whoever pressed the button / typed the answer.
    pub responder: String,
    pub choice: Choice,
}

impl ConfirmationResponse {
    #[must_use]
    pub fn new(responder: impl Into<String>, choice: Choice) -> Self {
        Self {
            responder: responder.into(),
            choice,
        }
    }
}

/// Renders prompts and outcomes to the requester.
///
/// The dispatcher never formats for a particular surface; it only hands over
/// domain values and a visibility hint.
#[allow(async_fn_in_trait)]
pub trait Presenter {
    /// Show a yes/no prompt and return the stream of answers to it.
    ///
    /// Answers from any identity may arrive; the session filters them.
    async fn show_prompt(&self, prompt: &ConfirmationPrompt) -> Result<mpsc::Receiver<ConfirmationResponse>>;
    /// Replace the previously shown prompt with the final outcome.
    async fn replace_prompt(&self, outcome: &ActionOutcome) -> Result<()>;
    /// Report an outcome that had no prompt.
    async fn report(&self, outcome: &ActionOutcome, visibility: Visibility) -> Result<()>;
    /// Tell the requester their request was rejected.
    async fn reject(&self, error: &RequestError) -> Result<()>;
}

// ── Config Port ───────────────────────────────────────────────────────────────

/// Abstracts loading of the fleet configuration.
pub trait ConfigStore {
    /// Load the configuration.
    fn load(&self) -> Result<GamectlConfig>;
    /// Path the configuration is read from.
    fn path(&self) -> Result<std::path::PathBuf>;
}
