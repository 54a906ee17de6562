//! CLI command implementations.
//!
//! Each `run_*` function owns the user-facing notices for its command;
//! store mutation is delegated to the reconcilers.

mod auth;
mod server;
mod show;

pub use auth::{
    run_auth_key, run_authentication, run_trusted_key, AuthKeyArgs, AuthenticationArgs,
    TrustedKeyArgs,
};
pub use server::{run_server, ServerArgs};
pub use show::{run_show, ShowArgs};
