//! `TerminalPresenter`: presentation-layer implementation of `Presenter`.
//!
//! Renders prompts and outcomes on the local terminal and collects the yes/no
//! answer from stdin. The local OS user is the only responder, so every
//! answer is attributed to the requester this presenter was built for.

use std::cell::Cell;
use std::io::{BufRead as _, IsTerminal as _};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;
use console::Term;
use gamectl_common::ActionOutcome;
use tokio::sync::mpsc;

use crate::application::ports::{ConfirmationResponse, Presenter, Visibility};
use crate::domain::{Choice, ConfirmationPrompt, RequestError};
use crate::output::{HumanRenderer, OutputContext, OutputMode, json};

/// Terminal presenter wrapping an `OutputContext`.
pub struct TerminalPresenter<'a> {
    ctx: &'a OutputContext,
    mode: OutputMode,
    responder: String,
    auto_approve: bool,
    /// Lines the current prompt occupies on stdout.
    prompt_lines: Cell<usize>,
    /// Set once a typed answer has been echoed by the terminal.
    answer_echoed: Arc<AtomicBool>,
}

impl<'a> TerminalPresenter<'a> {
    /// `responder` is the identity attached to answers typed at this terminal.
    /// With `auto_approve`, every prompt is answered "yes" immediately.
    #[must_use]
    pub fn new(ctx: &'a OutputContext, mode: OutputMode, responder: impl Into<String>, auto_approve: bool) -> Self {
        Self {
            ctx,
            mode,
            responder: responder.into(),
            auto_approve,
            prompt_lines: Cell::new(0),
            answer_echoed: Arc::new(AtomicBool::new(false)),
        }
    }

    fn renderer(&self) -> HumanRenderer<'_> {
        HumanRenderer::new(self.ctx)
    }

    fn print_json(outcome: &ActionOutcome) -> Result<()> {
        println!("{}", json::format_outcome(outcome)?);
        Ok(())
    }

    /// Erase the prompt from stdout. Only lines written to stdout, plus the
    /// echoed answer when one was typed, are cleared.
    fn clear_prompt(&self, lines: usize) {
        let term = Term::stdout();
        let cleared = if self.answer_echoed.swap(false, Ordering::SeqCst) {
            term.clear_last_lines(lines + 1)
        } else {
            // A half-typed answer may sit on the current line.
            term.clear_line().and_then(|()| term.clear_last_lines(lines))
        };
        if let Err(e) = cleared {
            tracing::debug!("could not clear prompt: {e}");
        }
    }
}

/// Read one answer line on a detached thread so the deadline can win the race.
///
/// The terminal stays in cooked mode, so a thread still blocked on stdin when
/// the process exits leaves no terminal state behind. EOF or an unparsable
/// line sends nothing.
fn spawn_stdin_responder(
    responder: String,
    echoed: Option<Arc<AtomicBool>>,
    tx: mpsc::Sender<ConfirmationResponse>,
) {
    std::thread::spawn(move || {
        let mut line = String::new();
        let choice = match std::io::stdin().lock().read_line(&mut line) {
            Ok(n) if n > 0 => {
                if let Some(echoed) = &echoed {
                    echoed.store(true, Ordering::SeqCst);
                }
                line.parse::<Choice>().ok()
            }
            _ => None,
        };
        if let Some(choice) = choice {
            let _ = tx.blocking_send(ConfirmationResponse::new(responder, choice));
        }
    });
}

impl Presenter for TerminalPresenter<'_> {
    async fn show_prompt(&self, prompt: &ConfirmationPrompt) -> Result<mpsc::Receiver<ConfirmationResponse>> {
        let to_stderr = self.mode == OutputMode::Json;
        let interactive = !self.auto_approve && std::io::stdin().is_terminal();
        let lines = self.renderer().render_prompt(prompt, to_stderr, interactive);
        self.answer_echoed.store(false, Ordering::SeqCst);

        let (tx, rx) = mpsc::channel(1);
        if self.auto_approve {
            tx.send(ConfirmationResponse::new(self.responder.clone(), Choice::Yes))
                .await?;
        } else {
            // The typed answer only lands on stdout's terminal when stdin is one.
            let echoed = (interactive && !to_stderr).then(|| Arc::clone(&self.answer_echoed));
            spawn_stdin_responder(self.responder.clone(), echoed, tx);
        }
        if !to_stderr {
            self.prompt_lines.set(lines);
        }
        Ok(rx)
    }

    async fn replace_prompt(&self, outcome: &ActionOutcome) -> Result<()> {
        let lines = self.prompt_lines.replace(0);
        if self.mode == OutputMode::Json {
            return Self::print_json(outcome);
        }
        if self.ctx.is_tty && lines > 0 {
            self.clear_prompt(lines);
        }
        self.renderer().render_outcome(outcome, Visibility::Public);
        Ok(())
    }

    async fn report(&self, outcome: &ActionOutcome, visibility: Visibility) -> Result<()> {
        match self.mode {
            OutputMode::Json => Self::print_json(outcome),
            OutputMode::Human => {
                self.renderer().render_outcome(outcome, visibility);
                Ok(())
            }
        }
    }

    async fn reject(&self, error: &RequestError) -> Result<()> {
        match self.mode {
            OutputMode::Json => println!("{}", json::format_error(&error.to_string(), error.code())?),
            OutputMode::Human => self.ctx.error(&error.to_string()),
        }
        Ok(())
    }
}
