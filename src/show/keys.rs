//! Trusted-key and authentication-key list presenters.

use crate::store::StoreData;
use std::io::{self, Write};

/// Render the ids of all keys marked trusted.
pub fn render_trusted_keys(data: &StoreData, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "------------")?;
    writeln!(out, "Trusted-keys")?;
    writeln!(out, "------------")?;

    for key in &data.keys {
        if key.trust_enable {
            writeln!(out, "{}", key.key_id)?;
        }
    }

    writeln!(out, "------------")?;
    Ok(())
}

/// Render all configured authentication keys.
///
/// Passwords are stored and displayed in clear text; that exposure is a
/// property of the data model, not something this layer can fix.
pub fn render_authentication_keys(data: &StoreData, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "---------------------------")?;
    writeln!(out, "{:>8}   {:>16}", "Auth-key", "MD5 password")?;
    writeln!(out, "---------------------------")?;

    for key in &data.keys {
        writeln!(out, "{:>8}   {:>16}", key.key_id, key.key_password)?;
    }

    writeln!(out, "---------------------------")?;
    Ok(())
}
