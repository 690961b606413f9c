//! `gamectl config` — inspect the fleet configuration.

use std::process::ExitCode;

use anyhow::Result;
use clap::Subcommand;

use crate::app::AppContext;
use crate::application::ports::ConfigStore;

/// Config subcommands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the loaded configuration
    Show,
    /// Print the configuration file path
    Path,
}

/// Run the config command.
///
/// # Errors
///
/// Returns an error if the path cannot be resolved or, for `show`, the
/// configuration fails to load or validate.
pub fn run(app: &AppContext, cmd: &ConfigCommand) -> Result<ExitCode> {
    match cmd {
        ConfigCommand::Show => show_config(app),
        ConfigCommand::Path => {
            println!("{}", app.config_store.path()?.display());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn show_config(app: &AppContext) -> Result<ExitCode> {
    let (config, _) = app.load_fleet()?;
    if app.is_json() {
        println!("{}", serde_json::to_string_pretty(&config)?);
    } else {
        let path = app.config_store.path()?;
        app.renderer().render_config(&config, &path)?;
    }
    Ok(ExitCode::SUCCESS)
}
