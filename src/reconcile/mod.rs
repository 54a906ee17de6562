//! Reconciliation of CLI-specified state with stored rows.
//!
//! Each configurable entity (server association, authentication key,
//! trusted-key flag, authentication enable flag) gets one reconciler:
//! look up the existing row by natural key, branch on (exists?,
//! negate?), then create, update or delete accordingly. Immutable fields
//! are written only when a row is created; validation always runs before
//! the transaction is opened.
//!
//! Reconcilers return an [`Outcome`] rather than printing: the command
//! layer owns the user-facing notices, the reconcilers own the store.

mod auth_enable;
mod auth_key;
mod server;
mod trusted_key;

pub use auth_enable::{reconcile_auth_enable, AuthEnableParams};
pub use auth_key::{reconcile_auth_key, AuthKeyParams};
pub use server::{reconcile_server, ServerParams};
pub use trusted_key::{reconcile_trusted_key, TrustedKeyParams};

/// What a reconciler did to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A new row was inserted.
    Created,
    /// An existing row's mutable fields were updated.
    Updated,
    /// The row was deleted.
    Deleted,
    /// The target row does not exist; nothing was changed. Benign:
    /// the command layer prints a notice and reports success.
    Missing,
}
