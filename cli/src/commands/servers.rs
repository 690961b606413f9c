//! `gamectl servers`: list the registered servers.

use std::process::ExitCode;

use anyhow::Result;

use crate::app::AppContext;
use crate::output::json;

/// Run the servers command.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded.
pub fn run(app: &AppContext) -> Result<ExitCode> {
    let (_, registry) = app.load_fleet()?;
    if app.is_json() {
        println!("{}", json::format_servers(&registry)?);
    } else {
        app.renderer().render_servers(&registry);
    }
    Ok(ExitCode::SUCCESS)
}
