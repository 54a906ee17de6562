//! Running-configuration presenter.
//!
//! Emits the configuration commands that would reproduce the current
//! store state, in replay order: keys before the trusted-key and server
//! commands that reference them. Only non-default values are written,
//! so a freshly seeded database produces no output.

use crate::store::{schema, StoreData};
use std::io::{self, Write};

/// Render the NTP portion of the running configuration.
pub fn render_running_config(data: &StoreData, out: &mut impl Write) -> io::Result<()> {
    for key in &data.keys {
        writeln!(
            out,
            "ntp authentication-key {} md5 {}",
            key.key_id, key.key_password
        )?;
    }

    for key in &data.keys {
        if key.trust_enable {
            writeln!(out, "ntp trusted-key {}", key.key_id)?;
        }
    }

    let auth_enabled = data
        .system
        .as_ref()
        .and_then(|system| system.ntp_config.get(schema::NTP_CONFIG_AUTHENTICATION_ENABLE))
        .is_some_and(|value| value == schema::NTP_TRUE_STR);
    if auth_enabled {
        writeln!(out, "ntp authentication enable")?;
    }

    for row in &data.associations {
        let mut line = format!("ntp server {}", row.address);

        if row.attribute(schema::ASSOC_ATTRIB_PREFER) == Some(schema::NTP_TRUE_STR) {
            line.push_str(" prefer");
        }

        if let Some(version) = row.attribute(schema::ASSOC_ATTRIB_VERSION) {
            if version != schema::ASSOC_ATTRIB_VERSION_DEFAULT {
                line.push_str(&format!(" version {version}"));
            }
        }

        if let Some(key_id) = row.key_id {
            line.push_str(&format!(" key-id {key_id}"));
        }

        writeln!(out, "{line}")?;
    }

    Ok(())
}
