//! `gamectl act`: run an action against a registered server.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::dispatch::{DispatchPolicy, Dispatcher};
use crate::application::services::invoker::ProcessInvoker;
use crate::domain::ActionRequest;
use crate::infra::command_runner::TokioCommandRunner;

/// Arguments for the act command.
#[derive(Args)]
pub struct ActArgs {
    /// Server key, e.g. `icarus`
    pub server: String,

    /// Action: start (up), stop (down), restart, status
    pub action: String,
}

/// Run the act command.
///
/// Validation errors and failed outcomes have already been shown to the
/// operator by the presenter; they only affect the exit code here.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded.
pub async fn run(app: &AppContext, args: ActArgs) -> Result<ExitCode> {
    let (config, registry) = app.load_fleet()?;

    let invoker = ProcessInvoker::new(
        TokioCommandRunner::default(),
        config.status_probe.clone(),
        config.script_timeout(),
        config.probe_timeout(),
    );
    let policy = DispatchPolicy {
        control_channel: config.control_channel.clone(),
        confirmation_window: config.confirmation_window(),
    };
    let dispatcher = Dispatcher::new(&registry, invoker, policy);

    let request = ActionRequest::new(&app.requester, args.server, args.action, &app.channel);
    let presenter = app.presenter();

    match dispatcher.dispatch(request, &presenter).await {
        Ok(outcome) if outcome.is_clean_exit() => Ok(ExitCode::SUCCESS),
        Ok(_) | Err(_) => Ok(ExitCode::FAILURE),
    }
}
