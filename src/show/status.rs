//! Synchronization status presenter.

use crate::store::{schema, StoreData};
use std::io::{self, Write};

/// Render the NTP status summary: the global enable/authentication
/// state, daemon uptime, and synchronization details for any peer the
/// daemon has selected as its system peer.
pub fn render_status(data: &StoreData, out: &mut impl Write) -> io::Result<()> {
    let Ok(system) = data.system() else {
        writeln!(out, "Could not access the System Table")?;
        return Ok(());
    };

    writeln!(out, "NTP is enabled")?;

    let auth_enabled = system
        .ntp_config
        .get(schema::NTP_CONFIG_AUTHENTICATION_ENABLE)
        .is_some_and(|value| value == schema::NTP_TRUE_STR);
    writeln!(
        out,
        "NTP authentication is {}",
        if auth_enabled { "enabled" } else { "disabled" }
    )?;

    let uptime = system
        .ntp_status
        .get(schema::NTP_STATUS_UPTIME)
        .map(String::as_str)
        .unwrap_or(schema::NTP_DEFAULT_STR);
    writeln!(out, "Uptime: {uptime} second(s)")?;

    for row in &data.associations {
        if row.status(schema::ASSOC_STATUS_PEER_STATUS_WORD)
            != Some(schema::PEER_STATUS_WORD_SYSTEMPEER)
        {
            continue;
        }

        writeln!(
            out,
            "Synchronized to NTP Server {} at stratum {}",
            row.address,
            row.status(schema::ASSOC_STATUS_STRATUM).unwrap_or("")
        )?;
        writeln!(
            out,
            "Poll interval = {} seconds",
            row.status(schema::ASSOC_STATUS_POLLING_INTERVAL)
                .unwrap_or("")
        )?;
        writeln!(
            out,
            "Time accuracy is within {} seconds",
            row.status(schema::ASSOC_STATUS_TIME_OFFSET).unwrap_or("")
        )?;
        writeln!(
            out,
            "Reference time: {} (UTC)",
            row.status(schema::ASSOC_STATUS_REFERENCE_TIME)
                .unwrap_or("")
        )?;
    }

    Ok(())
}
