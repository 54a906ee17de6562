//! Authentication command implementations: the global enable flag,
//! authentication keys, and the trusted-key flag.

use crate::reconcile::{
    reconcile_auth_enable, reconcile_auth_key, reconcile_trusted_key, AuthEnableParams,
    AuthKeyParams, Outcome, TrustedKeyParams,
};
use crate::store::Store;
use anyhow::Result;
use clap::{Args, Subcommand};

/// NTP authentication settings.
#[derive(Args, Debug)]
pub struct AuthenticationArgs {
    #[command(subcommand)]
    pub command: AuthenticationCommand,
}

/// Authentication subcommands.
#[derive(Subcommand, Debug)]
pub enum AuthenticationCommand {
    /// Enable validation of NTP packets against trusted keys.
    Enable,
}

/// Configure an NTP authentication key.
#[derive(Args, Debug)]
pub struct AuthKeyArgs {
    /// Key identifier.
    #[arg(value_name = "1-65534")]
    pub key_id: String,

    /// MD5 password (8-16 chars). Not used with --no.
    #[arg(value_name = "MD5-PASSWORD")]
    pub password: Option<String>,
}

/// Mark an authentication key as trusted.
#[derive(Args, Debug)]
pub struct TrustedKeyArgs {
    /// Key identifier.
    #[arg(value_name = "1-65534")]
    pub key_id: String,
}

/// Run the authentication command.
pub fn run_authentication(
    store: &mut Store,
    args: &AuthenticationArgs,
    no_form: bool,
) -> Result<()> {
    match args.command {
        AuthenticationCommand::Enable => {
            reconcile_auth_enable(store, &AuthEnableParams { no_form })?;
            Ok(())
        }
    }
}

/// Run the authentication-key command.
pub fn run_auth_key(store: &mut Store, args: &AuthKeyArgs, no_form: bool) -> Result<()> {
    let params = AuthKeyParams {
        key: args.key_id.clone(),
        md5_password: if no_form { None } else { args.password.clone() },
        no_form,
    };

    if let Outcome::Missing = reconcile_auth_key(store, &params)? {
        println!("This key does not exist");
    }

    Ok(())
}

/// Run the trusted-key command.
pub fn run_trusted_key(store: &mut Store, args: &TrustedKeyArgs, no_form: bool) -> Result<()> {
    let params = TrustedKeyParams {
        key: args.key_id.clone(),
        no_form,
    };

    if let Outcome::Missing = reconcile_trusted_key(store, &params)? {
        println!("This key does not exist");
    }

    Ok(())
}
