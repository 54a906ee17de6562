//! Error types and exit-code mapping.
//!
//! Display strings for user-facing variants are the exact messages the
//! CLI prints, so callers report errors with `{err}` and nothing else.

use crate::core::validate::{
    KEY_ID_MAX, KEY_ID_MIN, MAX_SERVER_NAME_LEN, PASSWORD_LEN_MAX, PASSWORD_LEN_MIN, VERSION_MAX,
    VERSION_MIN,
};
use std::path::PathBuf;
use thiserror::Error;

/// Process exit code for a command that completed.
pub const EXIT_SUCCESS: u8 = 0;
/// Process exit code when validation rejected the input and nothing was
/// attempted against the store.
pub const EXIT_NOTHING_TODO: u8 = 1;
/// Process exit code when the store transaction could not complete.
pub const EXIT_STORE_FAILURE: u8 = 2;

/// Error conditions surfaced by the NTP CLI.
#[derive(Debug, Error)]
pub enum NtpError {
    /// Server name exceeds the maximum length.
    #[error("NTP server name should be less than {} characters", MAX_SERVER_NAME_LEN)]
    ServerNameTooLong { length: usize },

    /// Server name looked like an IPv4 literal but is not a usable host
    /// address.
    #[error("Invalid IP address")]
    InvalidServerAddress { address: String },

    /// Key id outside [1, 65534] (or unparsable).
    #[error("KeyID should lie between [{}-{}]", KEY_ID_MIN, KEY_ID_MAX)]
    KeyIdOutOfRange { text: String },

    /// Password length outside [8, 16].
    #[error(
        "Password length should be between {} & {} chars",
        PASSWORD_LEN_MIN,
        PASSWORD_LEN_MAX
    )]
    PasswordLengthInvalid { length: usize },

    /// Protocol version outside [3, 4] (or unparsable).
    #[error("NTP version should lie between [{}-{}]", VERSION_MIN, VERSION_MAX)]
    VersionOutOfRange { text: String },

    /// The association table already holds the maximum number of
    /// servers.
    #[error("Maximum number of configurable NTP server limit has been reached")]
    ServerLimitReached,

    /// A command referenced an authentication key that has not been
    /// configured.
    #[error("This key does not exist")]
    KeyDoesNotExist { key_id: i64 },

    /// The System singleton is missing from the store. Expected to
    /// always exist; treated as an unrecoverable store-invariant
    /// violation.
    #[error("Could not access the System Table")]
    SystemRowMissing,

    /// The database file could not be read.
    #[error("could not read configuration database {path}")]
    StoreRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The database file is not a valid store document.
    #[error("configuration database {path} is malformed")]
    StoreDecode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The database file could not be written.
    #[error("could not write configuration database {path}")]
    StoreWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store contents could not be serialized.
    #[error("could not encode configuration database")]
    StoreEncode {
        #[source]
        source: serde_json::Error,
    },
}

/// How a failed command is classified toward the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Input was rejected before any store mutation was attempted.
    NothingToDo,
    /// The store transaction could not complete.
    StoreFailure,
}

impl NtpError {
    /// Classify this error for exit-code reporting.
    pub fn disposition(&self) -> Disposition {
        match self {
            Self::ServerNameTooLong { .. }
            | Self::InvalidServerAddress { .. }
            | Self::KeyIdOutOfRange { .. }
            | Self::PasswordLengthInvalid { .. }
            | Self::VersionOutOfRange { .. }
            | Self::ServerLimitReached
            | Self::KeyDoesNotExist { .. } => Disposition::NothingToDo,

            Self::SystemRowMissing
            | Self::StoreRead { .. }
            | Self::StoreDecode { .. }
            | Self::StoreWrite { .. }
            | Self::StoreEncode { .. } => Disposition::StoreFailure,
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self.disposition() {
            Disposition::NothingToDo => EXIT_NOTHING_TODO,
            Disposition::StoreFailure => EXIT_STORE_FAILURE,
        }
    }
}

/// Result type using NtpError.
pub type NtpResult<T> = Result<T, NtpError>;
