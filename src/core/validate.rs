//! Input validation for NTP configuration commands.
//!
//! All validators are pure functions over the command arguments; they
//! run before any store access so a rejected input never leaves partial
//! state behind. Bounds live here as named constants and are the single
//! source for both the checks and the error messages.

use crate::core::error::{NtpError, NtpResult};
use std::net::Ipv4Addr;

/// Longest accepted server name.
pub const MAX_SERVER_NAME_LEN: usize = 57;

/// Smallest valid authentication key id.
pub const KEY_ID_MIN: i64 = 1;
/// Largest valid authentication key id.
pub const KEY_ID_MAX: i64 = 65534;

/// Shortest valid key password.
pub const PASSWORD_LEN_MIN: usize = 8;
/// Longest valid key password.
pub const PASSWORD_LEN_MAX: usize = 16;

/// Oldest supported NTP protocol version.
pub const VERSION_MIN: i64 = 3;
/// Newest supported NTP protocol version.
pub const VERSION_MAX: i64 = 4;

/// Most association rows the store may hold.
pub const MAX_SERVERS: usize = 8;

/// True when the name contains only ASCII digits and punctuation, i.e.
/// the user intended an IPv4 literal rather than a hostname.
fn has_only_digits_and_punct(name: &str) -> bool {
    name.chars()
        .all(|c| c.is_ascii_digit() || c.is_ascii_punctuation())
}

/// Dotted-quad well-formedness plus the reserved-range rules: the
/// literal must not start with '0' and the first octet must not be 0
/// (0.0.0.0/8 is not a usable host range).
fn is_valid_ipv4_literal(address: &str) -> bool {
    let Ok(parsed) = address.parse::<Ipv4Addr>() else {
        return false;
    };

    if address.starts_with('0') {
        return false;
    }

    parsed.octets()[0] != 0
}

/// Validate a server name or address.
///
/// Names made solely of digits and punctuation must be valid IPv4
/// literals; anything else is accepted as an opaque hostname (resolution
/// is the daemon's problem).
pub fn validate_server_name(name: &str) -> NtpResult<()> {
    if name.len() > MAX_SERVER_NAME_LEN {
        return Err(NtpError::ServerNameTooLong { length: name.len() });
    }

    if has_only_digits_and_punct(name) && !is_valid_ipv4_literal(name) {
        return Err(NtpError::InvalidServerAddress {
            address: name.to_string(),
        });
    }

    Ok(())
}

/// Validate and parse a key id argument.
pub fn validate_key_id(text: &str) -> NtpResult<i64> {
    let out_of_range = || NtpError::KeyIdOutOfRange {
        text: text.to_string(),
    };

    let key_id: i64 = text.parse().map_err(|_| out_of_range())?;
    if !(KEY_ID_MIN..=KEY_ID_MAX).contains(&key_id) {
        return Err(out_of_range());
    }

    Ok(key_id)
}

/// Validate a key password.
pub fn validate_password(password: &str) -> NtpResult<()> {
    let length = password.len();
    if !(PASSWORD_LEN_MIN..=PASSWORD_LEN_MAX).contains(&length) {
        return Err(NtpError::PasswordLengthInvalid { length });
    }

    Ok(())
}

/// Validate a protocol version argument.
pub fn validate_version(text: &str) -> NtpResult<()> {
    let out_of_range = || NtpError::VersionOutOfRange {
        text: text.to_string(),
    };

    let version: i64 = text.parse().map_err(|_| out_of_range())?;
    if !(VERSION_MIN..=VERSION_MAX).contains(&version) {
        return Err(out_of_range());
    }

    Ok(())
}

/// Validate that one more association row may be added.
///
/// Callers invoke this only for additions; deletions are always allowed.
pub fn validate_server_capacity(existing: usize) -> NtpResult<()> {
    if existing >= MAX_SERVERS {
        return Err(NtpError::ServerLimitReached);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hostnames_are_accepted_verbatim() {
        assert!(validate_server_name("ntp.example.com").is_ok());
        assert!(validate_server_name("time-a").is_ok());
        // One letter is enough to make it a hostname.
        assert!(validate_server_name("0.0.0.x").is_ok());
    }

    #[test]
    fn numeric_names_must_be_valid_ipv4() {
        assert!(validate_server_name("8.8.8.8").is_ok());
        assert!(validate_server_name("1.2.3").is_err());
        assert!(validate_server_name("256.1.1.1").is_err());
        assert!(validate_server_name("10.0.0").is_err());
    }

    #[test]
    fn zero_network_and_leading_zero_are_rejected() {
        assert!(validate_server_name("0.0.0.1").is_err());
        assert!(validate_server_name("0.255.255.255").is_err());
    }

    #[test]
    fn name_length_boundary() {
        let ok = "a".repeat(MAX_SERVER_NAME_LEN);
        let too_long = "a".repeat(MAX_SERVER_NAME_LEN + 1);
        assert!(validate_server_name(&ok).is_ok());
        assert!(validate_server_name(&too_long).is_err());
    }

    #[test]
    fn key_id_range_boundaries() {
        assert!(validate_key_id("0").is_err());
        assert!(validate_key_id("65535").is_err());
        assert_eq!(validate_key_id("1").unwrap(), 1);
        assert_eq!(validate_key_id("65534").unwrap(), 65534);
        assert!(validate_key_id("garbage").is_err());
    }

    #[test]
    fn password_length_boundaries() {
        assert!(validate_password("seven07").is_err());
        assert!(validate_password("eight008").is_ok());
        assert!(validate_password("sixteen-chars-16").is_ok());
        assert!(validate_password("seventeen-chars17").is_err());
    }

    #[test]
    fn version_range() {
        assert!(validate_version("2").is_err());
        assert!(validate_version("3").is_ok());
        assert!(validate_version("4").is_ok());
        assert!(validate_version("5").is_err());
        assert!(validate_version("four").is_err());
    }

    #[test]
    fn capacity_rejects_at_limit() {
        assert!(validate_server_capacity(MAX_SERVERS - 1).is_ok());
        assert!(validate_server_capacity(MAX_SERVERS).is_err());
    }
}
