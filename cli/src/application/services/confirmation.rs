//! Confirmation wait: races the requester's answer against the deadline.
//!
//! The session is owned by the waiting task, so whichever signal the
//! `select!` observes first is the one that settles it.

use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::application::ports::ConfirmationResponse;
use crate::domain::session::{ConfirmationSession, Ignored, Transition, Verdict};

/// Wait until `session` settles and return its verdict.
///
/// A closed response stream means no answer can still arrive, so the
/// session is expired right away instead of idling until the deadline.
pub async fn await_verdict(
    session: &mut ConfirmationSession,
    mut responses: mpsc::Receiver<ConfirmationResponse>,
) -> Verdict {
    if let Some(verdict) = session.verdict() {
        return verdict;
    }
    let deadline = Instant::from_std(session.deadline());

    loop {
        tokio::select! {
            biased;
            () = tokio::time::sleep_until(deadline) => {
                tracing::debug!(server = %session.request().server, "confirmation deadline elapsed");
                return settle_expired(session);
            }
            response = responses.recv() => {
                let Some(response) = response else {
                    tracing::debug!(server = %session.request().server, "response stream closed");
                    return settle_expired(session);
                };
                match session.respond(&response.responder, response.choice, Instant::now().into_std()) {
                    Transition::Settled(verdict) => return verdict,
                    Transition::Ignored(Ignored::UnauthorizedResponder) => {
                        tracing::debug!(
                            responder = %response.responder,
                            requester = %session.authorized_requester(),
                            "ignoring response from non-requester",
                        );
                    }
                    Transition::Ignored(Ignored::AlreadySettled(verdict)) => return verdict,
                }
            }
        }
    }
}

fn settle_expired(session: &mut ConfirmationSession) -> Verdict {
    match session.expire() {
        Transition::Settled(verdict) | Transition::Ignored(Ignored::AlreadySettled(verdict)) => verdict,
        Transition::Ignored(Ignored::UnauthorizedResponder) => Verdict::Expired,
    }
}
