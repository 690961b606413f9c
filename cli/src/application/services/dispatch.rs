//! Application service: action dispatch use-case.
//!
//! Imports only from `crate::domain` and `crate::application`.
//! All I/O is routed through injected port traits.
//!
//! The dispatcher is the one place that decides whether an operation runs,
//! and it runs it at most once per request.

use std::time::Duration;

use chrono::Utc;
use gamectl_common::{Action, ActionOutcome};
use tokio::time::Instant;

use crate::application::ports::{CommandRunner, Presenter, Visibility};
use crate::application::services::confirmation::await_verdict;
use crate::application::services::invoker::ProcessInvoker;
use crate::domain::outcome;
use crate::domain::{
    ActionRequest, ConfirmationPrompt, ConfirmationSession, Plan, RequestError, Resolution,
    ServerRegistry, Step, Verdict, resolve,
};

/// Request-independent dispatch settings.
#[derive(Debug, Clone)]
pub struct DispatchPolicy {
    /// When set, requests from other channels are rejected.
    pub control_channel: Option<String>,
    /// How long a requester has to confirm a destructive action.
    pub confirmation_window: Duration,
}

/// Orchestrates resolve → (confirm) → invoke → report.
pub struct Dispatcher<'a, R> {
    registry: &'a ServerRegistry,
    invoker: ProcessInvoker<R>,
    policy: DispatchPolicy,
}

impl<'a, R: CommandRunner> Dispatcher<'a, R> {
    #[must_use]
    pub fn new(registry: &'a ServerRegistry, invoker: ProcessInvoker<R>, policy: DispatchPolicy) -> Self {
        Self {
            registry,
            invoker,
            policy,
        }
    }

    pub fn invoker(&self) -> &ProcessInvoker<R> {
        &self.invoker
    }

    /// Handle one action request end to end.
    ///
    /// Execution failures, cancellations and timeouts are all returned as an
    /// `ActionOutcome`; only request validation fails the call.
    ///
    /// # Errors
    ///
    /// Returns the `RequestError` after reporting it through `presenter`.
    /// Nothing is executed and no session is opened in that case.
    pub async fn dispatch(
        &self,
        request: ActionRequest,
        presenter: &impl Presenter,
    ) -> Result<ActionOutcome, RequestError> {
        tracing::info!(
            requester = %request.requester,
            server = %request.server,
            action = %request.action,
            channel = %request.channel,
            "action requested",
        );

        let resolution = match resolve(self.registry, self.policy.control_channel.as_deref(), &request) {
            Ok(resolution) => resolution,
            Err(err) => {
                tracing::warn!(code = err.code(), "request rejected: {err}");
                if let Err(e) = presenter.reject(&err).await {
                    tracing::warn!("failed to report rejection: {e:#}");
                }
                return Err(err);
            }
        };

        let outcome = match resolution {
            Resolution::DirectExecution(plan) => {
                let outcome = self.execute(&plan).await;
                let visibility = if outcome.is_success() {
                    Visibility::Public
                } else {
                    Visibility::Private
                };
                if let Err(e) = presenter.report(&outcome, visibility).await {
                    tracing::warn!("failed to report outcome: {e:#}");
                }
                outcome
            }
            Resolution::ConfirmedExecution { plan, warning } => {
                self.confirm_then_execute(request, &plan, &warning, presenter).await
            }
        };

        tracing::info!(
            server = %outcome.server,
            action = %outcome.action,
            kind = ?outcome.kind,
            "action finished",
        );
        Ok(outcome)
    }

    async fn confirm_then_execute(
        &self,
        request: ActionRequest,
        plan: &Plan<'_>,
        warning: &str,
        presenter: &impl Presenter,
    ) -> ActionOutcome {
        let window = self.policy.confirmation_window;
        let mut session = ConfirmationSession::open(request, Utc::now(), Instant::now().into_std(), window);
        let prompt = ConfirmationPrompt::new(
            plan.server,
            plan.action,
            warning,
            session.authorized_requester(),
            window,
        );

        let responses = match presenter.show_prompt(&prompt).await {
            Ok(responses) => responses,
            Err(e) => {
                tracing::warn!(server = %plan.server.key, "could not show confirmation prompt: {e:#}");
                let outcome = outcome::prompt_failed(plan.server, plan.action, &format!("{e:#}"));
                if let Err(e) = presenter.report(&outcome, Visibility::Private).await {
                    tracing::warn!("failed to report outcome: {e:#}");
                }
                return outcome;
            }
        };

        let verdict = await_verdict(&mut session, responses).await;
        let waited = Utc::now() - session.created_at();
        tracing::info!(
            server = %plan.server.key,
            action = %plan.action,
            ?verdict,
            waited_ms = waited.num_milliseconds(),
            "confirmation settled",
        );

        let outcome = match verdict {
            Verdict::Approved => self.execute(plan).await,
            Verdict::Cancelled => outcome::cancelled(plan.server, plan.action),
            Verdict::Expired => outcome::timed_out(plan.server, plan.action),
        };
        if let Err(e) = presenter.replace_prompt(&outcome).await {
            tracing::warn!("failed to replace confirmation prompt: {e:#}");
        }
        outcome
    }

    /// Run the plan's step exactly once.
    async fn execute(&self, plan: &Plan<'_>) -> ActionOutcome {
        match plan.step {
            Step::Probe { container } => match self.invoker.probe_status(container).await {
                Ok(status) => outcome::status_reported(plan.server, status),
                Err(err) => {
                    tracing::error!(server = %plan.server.key, "status probe failed: {err}");
                    outcome::execution_failed(plan.server, Action::Status, &err)
                }
            },
            Step::Script(op) => match self.invoker.run_operation(op).await {
                Ok(()) => outcome::lifecycle_completed(plan.server, plan.action),
                Err(err) => {
                    tracing::error!(server = %plan.server.key, action = %plan.action, "operation failed: {err}");
                    outcome::execution_failed(plan.server, plan.action, &err)
                }
            },
        }
    }
}
