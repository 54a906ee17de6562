//! ntpcfg - unified CLI entrypoint.
//!
//! Usage:
//!   ntpcfg server 10.1.1.1 --prefer --version 4 --key-id 10
//!   ntpcfg --no server 10.1.1.1
//!   ntpcfg authentication enable
//!   ntpcfg authentication-key 10 secretword
//!   ntpcfg trusted-key 10
//!   ntpcfg show associations
//!
//! Exit codes: 0 on success, 1 when validation rejected the input
//! without touching the store, 2 when the store transaction failed.

use anyhow::Result;
use clap::Parser;
use ntpcfg::cli::commands::{
    run_auth_key, run_authentication, run_server, run_show, run_trusted_key,
};
use ntpcfg::cli::{Cli, Commands};
use ntpcfg::core::config::{Config, DEFAULT_CONFIG_PATH};
use ntpcfg::core::error::{NtpError, EXIT_STORE_FAILURE};
use ntpcfg::store::Store;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .with(filter)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = Config::load_or_default(&config_path)?;

    let level = cli
        .log_level
        .as_deref()
        .unwrap_or(&config.logging.level)
        .to_string();
    init_tracing(&level);

    let db_path: &Path = cli.db.as_deref().unwrap_or(&config.store.path);
    let mut store = Store::open(db_path)?;

    match &cli.command {
        Commands::Server(args) => run_server(&mut store, args, cli.no),
        Commands::Authentication(args) => run_authentication(&mut store, args, cli.no),
        Commands::AuthenticationKey(args) => run_auth_key(&mut store, args, cli.no),
        Commands::TrustedKey(args) => run_trusted_key(&mut store, args, cli.no),
        Commands::Show(args) => run_show(&store, args),
    }
}

fn exit_code_for(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<NtpError>() {
        Some(ntp_err) => ntp_err.exit_code(),
        None => EXIT_STORE_FAILURE,
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::from(exit_code_for(&err))
        }
    }
}
