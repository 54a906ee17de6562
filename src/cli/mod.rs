//! Command-line interface.
//!
//! One process invocation carries exactly one command. Configuration
//! commands take their negating ("no") form from the global `--no`
//! flag, mirroring the negate convention of switch shells.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ntpcfg - NTP configuration and display CLI for the switch
/// configuration database.
#[derive(Parser, Debug)]
#[command(name = "ntpcfg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Tool configuration file path.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Configuration database file (overrides the config file setting).
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Apply the negating ("no") form of a configuration command.
    #[arg(long, global = true)]
    pub no: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Configure an NTP server association.
    Server(commands::ServerArgs),
    /// NTP authentication settings.
    Authentication(commands::AuthenticationArgs),
    /// Configure an NTP authentication key.
    AuthenticationKey(commands::AuthKeyArgs),
    /// Mark an authentication key as trusted.
    TrustedKey(commands::TrustedKeyArgs),
    /// Display NTP configuration and state.
    Show(commands::ShowArgs),
}
