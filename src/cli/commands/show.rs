//! Show command implementation.

use crate::show;
use crate::store::Store;
use anyhow::Result;
use clap::{Args, Subcommand};
use std::io;

/// Display NTP configuration and state.
#[derive(Args, Debug)]
pub struct ShowArgs {
    #[command(subcommand)]
    pub command: ShowCommand,
}

/// Display targets.
#[derive(Subcommand, Debug)]
pub enum ShowCommand {
    /// NTP association table.
    Associations,
    /// NTP operational status.
    Status,
    /// NTP packet statistics.
    Statistics,
    /// Keys trusted for packet validation.
    TrustedKeys,
    /// Configured authentication keys.
    AuthenticationKeys,
    /// Configuration commands reproducing the current NTP state.
    RunningConfig,
}

/// Run the show command.
pub fn run_show(store: &Store, args: &ShowArgs) -> Result<()> {
    let mut out = io::stdout().lock();
    let data = store.data();

    match args.command {
        ShowCommand::Associations => show::render_associations(data, &mut out)?,
        ShowCommand::Status => show::render_status(data, &mut out)?,
        ShowCommand::Statistics => show::render_statistics(data, &mut out)?,
        ShowCommand::TrustedKeys => show::render_trusted_keys(data, &mut out)?,
        ShowCommand::AuthenticationKeys => show::render_authentication_keys(data, &mut out)?,
        ShowCommand::RunningConfig => show::render_running_config(data, &mut out)?,
    }

    Ok(())
}
