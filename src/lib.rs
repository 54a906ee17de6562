//! ntpcfg - NTP configuration and display CLI for the switch
//! configuration database.
//!
//! ntpcfg sits between the operator and the shared network-element
//! configuration store: it validates NTP parameters (server
//! associations, authentication keys, trusted keys, the authentication
//! enable flag), reconciles them against store rows inside atomic
//! transactions, and renders the status and statistics tables the
//! daemon reports back.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        CLI (clap commands)                      │
//! │      server │ authentication │ authentication-key │ show        │
//! └─────────────────────────────────────────────────────────────────┘
//!                                  │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                 Validators + Reconcilers                        │
//! │   pure input checks │ upsert/delete against natural keys        │
//! └─────────────────────────────────────────────────────────────────┘
//!                                  │
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Configuration Store                          │
//! │   System │ VRF │ NTP_Association │ NTP_Key │ transactions       │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Presenters read the same store and format the association table,
//! sync status, packet counters, key lists, and the replayable running
//! configuration.
//!
//! # Module Organization
//!
//! ## Core
//! - [`core::config`] - Tool configuration parsing and validation
//! - [`core::error`] - Error types and exit-code mapping
//! - [`core::validate`] - Pure input validators
//!
//! ## Store
//! - [`store`] - Typed rows, natural-key lookups, atomic transactions
//! - [`store::schema`] - Table/field names and enumerated values
//!
//! ## Reconcile
//! - [`reconcile`] - Upsert/delete logic for the four configurable
//!   entities
//!
//! ## Show
//! - [`show`] - Read-only presenters for the display commands
//!
//! ## CLI
//! - [`cli`] - clap surface and command implementations
//!
//! # Key Invariants
//!
//! - An association's address and VRF, and a key's id, are written only
//!   when their row is created; later commands never touch them.
//! - At most 8 association rows exist; the capacity check runs inside
//!   the transaction that would insert the 9th.
//! - Validation precedes store access: a rejected input never leaves
//!   partial state behind.
//! - Daemon-owned operational fields (status, statistics) are written
//!   by the CLI exactly once, to default sentinels, at row creation.
//! - Every mutating command is one atomic transaction: commit persists
//!   the whole change or none of it.

// Core infrastructure
pub mod core;

// Configuration-store access
pub mod store;

// Reconcilers for config commands
pub mod reconcile;

// Display presenters
pub mod show;

// CLI
pub mod cli;

// Re-exports for convenience
pub use self::core::{config, error, validate};
pub use reconcile::{
    reconcile_auth_enable, reconcile_auth_key, reconcile_server, reconcile_trusted_key, Outcome,
};
pub use store::{schema, Store, StoreData};
