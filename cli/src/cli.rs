//! CLI argument parsing with clap derive

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use crate::app::{AppContext, AppFlags, BehaviourFlags, OutputFlags};
use crate::commands;

/// Confirm-gated control of containerised game servers
#[derive(Parser)]
#[command(
    name = "gamectl",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    /// Answer confirmation prompts with "yes"
    #[arg(short, long, global = true)]
    pub yes: bool,

    /// Channel the request originates from
    #[arg(long, global = true, env = "GAMECTL_CHANNEL", default_value = "terminal")]
    pub channel: String,

    /// Path to the fleet configuration file
    #[arg(long, global = true, env = "GAMECTL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run an action against a server
    Act(commands::act::ActArgs),

    /// List registered servers
    Servers,

    /// Inspect configuration
    #[command(subcommand)]
    Config(commands::config::ConfigCommand),

    /// Show version
    Version,
}

impl Cli {
    /// Log filter implied by `-v` when `RUST_LOG` is unset.
    #[must_use]
    pub fn default_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "debug",
            _ => "trace",
        }
    }

    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails before it can report an outcome.
    pub async fn run(self) -> Result<ExitCode> {
        let Cli {
            json,
            quiet,
            no_color,
            yes,
            channel,
            config,
            verbose: _,
            command,
        } = self;
        let app = AppContext::new(AppFlags {
            output: OutputFlags {
                no_color,
                quiet,
                json,
            },
            behaviour: BehaviourFlags {
                yes,
                channel,
                config,
            },
        });

        match command {
            Command::Act(args) => commands::act::run(&app, args).await,
            Command::Servers => commands::servers::run(&app),
            Command::Config(cmd) => commands::config::run(&app, &cmd),
            Command::Version => {
                commands::version::run(&app);
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}
