//! Human-readable terminal renderer.

use std::path::Path;

use gamectl_common::{ActionOutcome, OutcomeKind, ServerStatus};
use owo_colors::OwoColorize as _;

use crate::application::ports::Visibility;
use crate::domain::{ConfirmationPrompt, GamectlConfig, ServerRegistry};
use crate::output::OutputContext;

/// Renders domain types as human-readable terminal output using `OutputContext`.
pub struct HumanRenderer<'a> {
    ctx: &'a OutputContext,
}

impl<'a> HumanRenderer<'a> {
    /// Create a new `HumanRenderer` wrapping the given output context.
    #[must_use]
    pub fn new(ctx: &'a OutputContext) -> Self {
        Self { ctx }
    }

    /// Render the CLI version.
    pub fn render_version(&self, version: &str) {
        if self.ctx.quiet {
            return;
        }
        println!("gamectl {version}");
    }

    /// Render an action outcome.
    ///
    /// Failures always go to stderr. Private reports ignore `--quiet`.
    pub fn render_outcome(&self, outcome: &ActionOutcome, visibility: Visibility) {
        let line = outcome_line(outcome);
        match (outcome.kind, visibility) {
            (OutcomeKind::Failed, _) => self.ctx.error(&line),
            (_, Visibility::Private) => self.ctx.private(&line),
            (OutcomeKind::Succeeded, Visibility::Public) => self.ctx.success(&line),
            (OutcomeKind::Cancelled, Visibility::Public) => self.ctx.info(&line),
            (OutcomeKind::TimedOut, Visibility::Public) => self.ctx.warn(&line),
        }
    }

    /// Render a confirmation prompt and return the number of lines written.
    ///
    /// Prompts are never suppressed: the requester has to see the question.
    /// With `to_stderr` the prompt stays off stdout (JSON mode). `ask` adds a
    /// line telling a terminal user how to answer.
    #[must_use]
    pub fn render_prompt(&self, prompt: &ConfirmationPrompt, to_stderr: bool, ask: bool) -> usize {
        let mut lines = vec![
            format!(
                "  {} {}",
                "WARNING:".style(self.ctx.styles.warning),
                prompt.warning
            ),
            String::new(),
            format!("  {}", prompt.question.style(self.ctx.styles.bold)),
            format!(
                "  {}",
                format!(
                    "Only {} can answer. Expires in {}s.",
                    prompt.requester,
                    prompt.expires_in.as_secs()
                )
                .style(self.ctx.styles.dim)
            ),
        ];
        if ask {
            lines.push(format!("  {}", "Answer yes or no, then press Enter:".style(self.ctx.styles.bold)));
        }
        for line in &lines {
            if to_stderr {
                eprintln!("{line}");
            } else {
                println!("{line}");
            }
        }
        lines.len()
    }

    /// Render the registered servers.
    pub fn render_servers(&self, registry: &ServerRegistry) {
        if self.ctx.quiet {
            return;
        }
        self.ctx.header("Servers:");
        for server in registry.iter() {
            self.ctx.kv(
                &format!("{:<12}", server.key),
                &format!("{} ({})", server.name, server.container),
            );
        }
    }

    /// Render the loaded configuration as YAML with its source path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized.
    pub fn render_config(&self, config: &GamectlConfig, path: &Path) -> anyhow::Result<()> {
        self.ctx.kv("Config:", &path.display().to_string());
        println!();
        print!("{}", serde_yaml::to_string(config)?);
        Ok(())
    }
}

fn status_marker(status: ServerStatus) -> &'static str {
    match status {
        ServerStatus::Running => "🟢",
        ServerStatus::Exited => "🔴",
        ServerStatus::Restarting => "🟡",
        ServerStatus::Unknown => "❓",
    }
}

/// One-line rendering of an outcome, e.g. `Icarus: 🟢 running`.
#[must_use]
pub fn outcome_line(outcome: &ActionOutcome) -> String {
    match outcome.status {
        Some(status) => format!("{}: {} {status}", outcome.server_name, status_marker(status)),
        None => outcome.detail.clone(),
    }
}
