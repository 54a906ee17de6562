//! Server command implementation.

use crate::reconcile::{reconcile_server, Outcome, ServerParams};
use crate::store::{schema, Store};
use anyhow::Result;
use clap::Args;

/// Configure an NTP server association.
#[derive(Args, Debug)]
pub struct ServerArgs {
    /// Server IPv4 address or hostname.
    pub name: String,

    /// Request this server be preferred for synchronization.
    #[arg(long)]
    pub prefer: bool,

    /// NTP protocol version to use with this server.
    #[arg(long, value_name = "3-4")]
    pub version: Option<String>,

    /// Authentication key to use with this server.
    #[arg(long, value_name = "1-65534")]
    pub key_id: Option<String>,
}

/// Run the server command.
///
/// The negating form takes only the name; any option flags given
/// alongside `--no` are ignored, matching the negate grammar.
pub fn run_server(store: &mut Store, args: &ServerArgs, no_form: bool) -> Result<()> {
    let params = ServerParams {
        server_name: args.name.clone(),
        vrf_name: schema::DEFAULT_VRF_NAME.to_string(),
        prefer: !no_form && args.prefer,
        version: if no_form { None } else { args.version.clone() },
        key_id: if no_form { None } else { args.key_id.clone() },
        no_form,
    };

    if let Outcome::Missing = reconcile_server(store, &params)? {
        println!("This server does not exist");
    }

    Ok(())
}
