//! Application context — unified state passed to every command handler.
//!
//! `AppContext` is built once from the top-level flags. Adding a
//! cross-cutting concern means one field here, not a new parameter on every
//! command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::application::ports::ConfigStore;
use crate::domain::{GamectlConfig, ServerRegistry};
use crate::infra::config::YamlConfigStore;
use crate::output::{HumanRenderer, OutputContext, OutputMode, TerminalPresenter};

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
    /// Enable JSON output mode.
    pub json: bool,
}

/// Behaviour flags.
pub struct BehaviourFlags {
    /// Answer confirmation prompts with "yes" (also set by `GAMECTL_YES`).
    pub yes: bool,
    /// Origination context for requests issued from this terminal.
    pub channel: String,
    /// Explicit config file path.
    pub config: Option<PathBuf>,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Output rendering options.
    pub output: OutputFlags,
    /// Behaviour options.
    pub behaviour: BehaviourFlags,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Output rendering mode (human vs JSON).
    pub mode: OutputMode,
    /// Where the fleet configuration comes from.
    pub config_store: YamlConfigStore,
    /// When `true`, confirmation prompts are answered "yes" without asking.
    pub non_interactive: bool,
    /// Identity of the local operator.
    pub requester: String,
    /// Origination context attached to every request.
    pub channel: String,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    #[must_use]
    pub fn new(flags: AppFlags) -> Self {
        let non_interactive = flags.behaviour.yes || std::env::var("GAMECTL_YES").is_ok();

        let mode = if flags.output.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };

        Self {
            output: OutputContext::new(flags.output.no_color, flags.output.quiet),
            mode,
            config_store: YamlConfigStore::new(flags.behaviour.config),
            non_interactive,
            requester: local_identity(),
            channel: flags.behaviour.channel,
        }
    }

    /// Returns `true` when JSON output mode is active.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.mode == OutputMode::Json
    }

    #[must_use]
    pub fn renderer(&self) -> HumanRenderer<'_> {
        HumanRenderer::new(&self.output)
    }

    /// A presenter answering as the local operator.
    #[must_use]
    pub fn presenter(&self) -> TerminalPresenter<'_> {
        TerminalPresenter::new(&self.output, self.mode, self.requester.clone(), self.non_interactive)
    }

    /// Load the configuration and build the server registry.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unparsable, or invalid.
    pub fn load_fleet(&self) -> Result<(GamectlConfig, ServerRegistry)> {
        let config = self.config_store.load()?;
        let path = self.config_store.path()?;
        let registry = config
            .registry()
            .with_context(|| format!("invalid configuration in {}", path.display()))?;
        Ok((config, registry))
    }
}

/// The OS user running this process.
fn local_identity() -> String {
    ["USER", "USERNAME", "LOGNAME"]
        .iter()
        .find_map(|var| std::env::var(var).ok().filter(|v| !v.is_empty()))
        .unwrap_or_else(|| "operator".to_string())
}
