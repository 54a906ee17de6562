//! Presenter tests: layouts, glyphs, labels and running-config replay.

mod common;

use common::{add_key, render, simulate_daemon_status, store_with_servers};
use ntpcfg::reconcile::{
    reconcile_auth_enable, reconcile_server, reconcile_trusted_key, AuthEnableParams, ServerParams,
    TrustedKeyParams,
};
use ntpcfg::show::{
    render_associations, render_authentication_keys, render_running_config, render_statistics,
    render_status, render_trusted_keys,
};
use ntpcfg::store::{schema, Store};

// ============================================================================
// Associations table
// ============================================================================

#[test]
fn associations_table_has_header_and_rules() {
    let store = store_with_servers(&["10.1.1.1"]);
    let out = render(store.data(), |d, w| render_associations(d, w));

    let lines: Vec<&str> = out.lines().collect();
    assert!(lines[0].chars().all(|c| c == '-'));
    assert!(lines[1].contains("NAME"));
    assert!(lines[1].contains("REACH"));
    assert!(lines[1].contains("JITTER"));
    assert!(lines[2].chars().all(|c| c == '-'));
    // One data row plus the closing rule.
    assert_eq!(lines.len(), 5);
    assert!(lines[3].contains("10.1.1.1"));
}

#[test]
fn system_peer_gets_the_star_glyph() {
    let mut store = store_with_servers(&["10.1.1.1"]);
    simulate_daemon_status(
        &mut store,
        "10.1.1.1",
        &[(schema::ASSOC_STATUS_PEER_STATUS_WORD, "system_peer")],
    );

    let out = render(store.data(), |d, w| render_associations(d, w));
    let row = out.lines().nth(3).unwrap();
    assert!(row.starts_with("*  1"));
}

#[test]
fn unselected_peer_renders_a_blank_tally() {
    let store = store_with_servers(&["10.1.1.1"]);
    let out = render(store.data(), |d, w| render_associations(d, w));

    let row = out.lines().nth(3).unwrap();
    assert!(row.starts_with("   1"));
}

#[test]
fn unreferenced_key_column_shows_the_sentinel() {
    let mut store = Store::in_memory();
    add_key(&mut store, "10", "password1");

    let mut with_key = ServerParams::new("10.1.1.1");
    with_key.key_id = Some("10".to_string());
    reconcile_server(&mut store, &with_key).unwrap();
    reconcile_server(&mut store, &ServerParams::new("10.1.1.2")).unwrap();

    let out = render(store.data(), |d, w| render_associations(d, w));
    // Fields: ID NAME REMOTE VER KEYID REF-ID ...
    let keyid_of = |line: &str| {
        line.split_whitespace()
            .nth(4)
            .map(str::to_string)
            .unwrap_or_default()
    };
    assert_eq!(keyid_of(out.lines().nth(3).unwrap()), "10");
    assert_eq!(keyid_of(out.lines().nth(4).unwrap()), "-");
}

// ============================================================================
// Status
// ============================================================================

#[test]
fn status_reports_auth_and_uptime_defaults() {
    let store = Store::in_memory();
    let out = render(store.data(), |d, w| render_status(d, w));

    assert!(out.contains("NTP is enabled"));
    assert!(out.contains("NTP authentication is disabled"));
    assert!(out.contains("Uptime: - second(s)"));
    assert!(!out.contains("Synchronized"));
}

#[test]
fn status_reports_synchronization_to_the_system_peer() {
    let mut store = store_with_servers(&["10.1.1.1", "10.1.1.2"]);
    reconcile_auth_enable(&mut store, &AuthEnableParams { no_form: false }).unwrap();
    simulate_daemon_status(
        &mut store,
        "10.1.1.2",
        &[
            (schema::ASSOC_STATUS_PEER_STATUS_WORD, "system_peer"),
            (schema::ASSOC_STATUS_STRATUM, "2"),
            (schema::ASSOC_STATUS_POLLING_INTERVAL, "64"),
            (schema::ASSOC_STATUS_TIME_OFFSET, "0.025"),
            (schema::ASSOC_STATUS_REFERENCE_TIME, "Tue Jan 5 11:32:04"),
        ],
    );

    let out = render(store.data(), |d, w| render_status(d, w));
    assert!(out.contains("NTP authentication is enabled"));
    assert!(out.contains("Synchronized to NTP Server 10.1.1.2 at stratum 2"));
    assert!(out.contains("Poll interval = 64 seconds"));
    assert!(out.contains("Time accuracy is within 0.025 seconds"));
    assert!(out.contains("Reference time: Tue Jan 5 11:32:04 (UTC)"));
}

// ============================================================================
// Statistics
// ============================================================================

#[test]
fn statistics_lists_all_counters_with_sentinels() {
    let store = Store::in_memory();
    let out = render(store.data(), |d, w| render_statistics(d, w));

    for label in [
        "Rx-pkts",
        "Cur Ver Rx-pkts",
        "Old Ver Rx-pkts",
        "Error pkts",
        "Auth-failed pkts",
        "Declined pkts",
        "Restricted pkts",
        "Rate-limited pkts",
        "KOD pkts",
    ] {
        assert!(out.contains(label), "missing counter label {label}");
    }

    // Nothing reported yet: every value is the sentinel.
    assert_eq!(out.lines().count(), 9);
    for line in out.lines() {
        assert!(line.ends_with("    -"));
    }
}

#[test]
fn statistics_shows_daemon_counters() {
    let mut store = Store::in_memory();
    store
        .transaction(|data| {
            data.system_mut()?.ntp_statistics.insert(
                schema::NTP_STATS_PKTS_RECEIVED.to_string(),
                "1234".to_string(),
            );
            Ok(())
        })
        .unwrap();

    let out = render(store.data(), |d, w| render_statistics(d, w));
    assert!(out.contains("Rx-pkts    1234"));
}

// ============================================================================
// Key lists
// ============================================================================

#[test]
fn trusted_keys_lists_only_trusted_ids() {
    let mut store = Store::in_memory();
    add_key(&mut store, "10", "password10");
    add_key(&mut store, "20", "password20");
    reconcile_trusted_key(&mut store, &TrustedKeyParams::new("20")).unwrap();

    let out = render(store.data(), |d, w| render_trusted_keys(d, w));
    assert!(out.contains("Trusted-keys"));
    assert!(out.contains("20"));
    assert!(!out.contains("10"));
}

#[test]
fn authentication_keys_lists_ids_and_passwords() {
    let mut store = Store::in_memory();
    add_key(&mut store, "10", "password10");

    let out = render(store.data(), |d, w| render_authentication_keys(d, w));
    assert!(out.contains("Auth-key"));
    assert!(out.contains("MD5 password"));
    assert!(out.contains("10"));
    assert!(out.contains("password10"));
}

// ============================================================================
// Running config
// ============================================================================

#[test]
fn fresh_store_produces_no_running_config() {
    let store = Store::in_memory();
    let out = render(store.data(), |d, w| render_running_config(d, w));
    assert!(out.is_empty());
}

#[test]
fn running_config_replays_the_configured_state() {
    let mut store = Store::in_memory();
    add_key(&mut store, "10", "password10");
    reconcile_trusted_key(&mut store, &TrustedKeyParams::new("10")).unwrap();
    reconcile_auth_enable(&mut store, &AuthEnableParams { no_form: false }).unwrap();

    let mut server = ServerParams::new("10.1.1.1");
    server.prefer = true;
    server.version = Some("4".to_string());
    server.key_id = Some("10".to_string());
    reconcile_server(&mut store, &server).unwrap();
    reconcile_server(&mut store, &ServerParams::new("ntp.example.com")).unwrap();

    let out = render(store.data(), |d, w| render_running_config(d, w));
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(
        lines,
        vec![
            "ntp authentication-key 10 md5 password10",
            "ntp trusted-key 10",
            "ntp authentication enable",
            "ntp server 10.1.1.1 prefer version 4 key-id 10",
            "ntp server ntp.example.com",
        ]
    );
}

#[test]
fn default_version_is_not_emitted() {
    let mut store = Store::in_memory();
    let mut server = ServerParams::new("10.1.1.1");
    server.version = Some("3".to_string());
    reconcile_server(&mut store, &server).unwrap();

    let out = render(store.data(), |d, w| render_running_config(d, w));
    assert_eq!(out.trim_end(), "ntp server 10.1.1.1");
}

#[test]
fn disabled_authentication_is_not_emitted() {
    let mut store = Store::in_memory();
    reconcile_auth_enable(&mut store, &AuthEnableParams { no_form: true }).unwrap();

    let out = render(store.data(), |d, w| render_running_config(d, w));
    assert!(out.is_empty());
}
