//! Common test utilities.
//!
//! Shared helpers for integration tests. Import with `mod common;` in
//! test files.

#![allow(dead_code)]

use ntpcfg::reconcile::{reconcile_auth_key, reconcile_server, AuthKeyParams, ServerParams};
use ntpcfg::store::{schema, Store, StoreData};
use std::path::PathBuf;
use tempfile::TempDir;

/// A store backed by a file inside a fresh temp directory. Keep the
/// `TempDir` alive for as long as the store is used.
pub fn temp_store() -> (TempDir, PathBuf, Store) {
    let dir = tempfile::tempdir().expect("failed to create temp directory");
    let path = dir.path().join("config-db.json");
    let store = Store::open(&path).expect("failed to open store");
    (dir, path, store)
}

/// In-memory store with one association per name, in the default VRF.
pub fn store_with_servers(names: &[&str]) -> Store {
    let mut store = Store::in_memory();
    for name in names {
        reconcile_server(&mut store, &ServerParams::new(name)).expect("failed to add server");
    }
    store
}

/// Configure an authentication key.
pub fn add_key(store: &mut Store, key_id: &str, password: &str) {
    reconcile_auth_key(store, &AuthKeyParams::new(key_id, password)).expect("failed to add key");
}

/// Overwrite daemon-owned status fields on an association, simulating
/// the NTP daemon reporting operational data between CLI invocations.
pub fn simulate_daemon_status(store: &mut Store, address: &str, fields: &[(&str, &str)]) {
    store
        .transaction(|data| {
            let index = data
                .association_index(schema::DEFAULT_VRF_NAME, address)
                .expect("association not found");
            for (key, value) in fields {
                data.associations[index]
                    .association_status
                    .insert(key.to_string(), value.to_string());
            }
            Ok(())
        })
        .expect("failed to update status fields");
}

/// Run a presenter against the store and capture its output.
pub fn render<F>(data: &StoreData, render_fn: F) -> String
where
    F: FnOnce(&StoreData, &mut Vec<u8>) -> std::io::Result<()>,
{
    let mut buf = Vec::new();
    render_fn(data, &mut buf).expect("presenter failed");
    String::from_utf8(buf).expect("presenter produced invalid utf-8")
}
