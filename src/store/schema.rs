//! Table and field names of the configuration database.
//!
//! The CLI touches four tables: System (singleton), VRF, NTP_Association
//! and NTP_Key. String-map fields are free-form key/value pairs shared
//! with the NTP daemon, so every key and every enumerated value the CLI
//! reads or writes is declared here. This module is the registration
//! contract between the CLI and the store.

/// Placeholder shown for operational fields the daemon has not filled in.
pub const NTP_DEFAULT_STR: &str = "-";

/// Boolean values as stored in string maps.
pub const NTP_TRUE_STR: &str = "true";
pub const NTP_FALSE_STR: &str = "false";

/// Name of the default (and currently only) VRF.
pub const DEFAULT_VRF_NAME: &str = "vrf_default";

// System.ntp_config
pub const NTP_CONFIG_AUTHENTICATION_ENABLE: &str = "authentication_enable";

// System.ntp_status
pub const NTP_STATUS_UPTIME: &str = "uptime";

// System.ntp_statistics
pub const NTP_STATS_PKTS_RECEIVED: &str = "ntp_pkts_received";
pub const NTP_STATS_PKTS_CUR_VER: &str = "ntp_pkts_with_current_version";
pub const NTP_STATS_PKTS_OLD_VER: &str = "ntp_pkts_with_older_version";
pub const NTP_STATS_PKTS_BAD_LEN_OR_FORMAT: &str = "ntp_pkts_with_bad_length_or_format";
pub const NTP_STATS_PKTS_AUTH_FAILED: &str = "ntp_pkts_with_auth_failed";
pub const NTP_STATS_PKTS_DECLINED: &str = "ntp_pkts_declined";
pub const NTP_STATS_PKTS_RESTRICTED: &str = "ntp_pkts_restricted";
pub const NTP_STATS_PKTS_RATE_LIMITED: &str = "ntp_pkts_rate_limited";
pub const NTP_STATS_PKTS_KOD_RESPONSES: &str = "ntp_pkts_kod_responses";

// NTP_Association.association_attributes
pub const ASSOC_ATTRIB_REF_CLOCK_ID: &str = "ref_clock_id";
pub const ASSOC_ATTRIB_PREFER: &str = "prefer";
pub const ASSOC_ATTRIB_VERSION: &str = "ntp_version";

/// Protocol version written to new association rows.
pub const ASSOC_ATTRIB_VERSION_DEFAULT: &str = "3";

// NTP_Association.association_status: operational fields owned by the
// daemon. The CLI writes them exactly once, to the default sentinel, when
// a row is created.
pub const ASSOC_STATUS_REMOTE_PEER_ADDRESS: &str = "remote_peer_address";
pub const ASSOC_STATUS_REMOTE_PEER_REF_ID: &str = "remote_peer_ref_id";
pub const ASSOC_STATUS_STRATUM: &str = "stratum";
pub const ASSOC_STATUS_PEER_TYPE: &str = "peer_type";
pub const ASSOC_STATUS_LAST_POLLED: &str = "last_polled";
pub const ASSOC_STATUS_POLLING_INTERVAL: &str = "polling_interval";
pub const ASSOC_STATUS_REACHABILITY_REGISTER: &str = "reachability_register";
pub const ASSOC_STATUS_NETWORK_DELAY: &str = "network_delay";
pub const ASSOC_STATUS_TIME_OFFSET: &str = "time_offset";
pub const ASSOC_STATUS_JITTER: &str = "jitter";
pub const ASSOC_STATUS_ROOT_DISPERSION: &str = "root_dispersion";
pub const ASSOC_STATUS_REFERENCE_TIME: &str = "reference_time";
pub const ASSOC_STATUS_PEER_STATUS_WORD: &str = "peer_status_word";
pub const ASSOC_STATUS_ASSOCID: &str = "associd";

/// Every association_status field, in display order.
pub const ASSOC_STATUS_FIELDS: [&str; 14] = [
    ASSOC_STATUS_REMOTE_PEER_ADDRESS,
    ASSOC_STATUS_REMOTE_PEER_REF_ID,
    ASSOC_STATUS_STRATUM,
    ASSOC_STATUS_PEER_TYPE,
    ASSOC_STATUS_LAST_POLLED,
    ASSOC_STATUS_POLLING_INTERVAL,
    ASSOC_STATUS_REACHABILITY_REGISTER,
    ASSOC_STATUS_NETWORK_DELAY,
    ASSOC_STATUS_TIME_OFFSET,
    ASSOC_STATUS_JITTER,
    ASSOC_STATUS_ROOT_DISPERSION,
    ASSOC_STATUS_REFERENCE_TIME,
    ASSOC_STATUS_PEER_STATUS_WORD,
    ASSOC_STATUS_ASSOCID,
];

// peer_status_word values reported by the daemon.
pub const PEER_STATUS_WORD_REJECT: &str = "reject";
pub const PEER_STATUS_WORD_FALSETICK: &str = "falsetick";
pub const PEER_STATUS_WORD_EXCESS: &str = "excess";
pub const PEER_STATUS_WORD_OUTLIER: &str = "outlier";
pub const PEER_STATUS_WORD_CANDIDATE: &str = "candidate";
pub const PEER_STATUS_WORD_BACKUP: &str = "backup";
pub const PEER_STATUS_WORD_SYSTEMPEER: &str = "system_peer";
pub const PEER_STATUS_WORD_PPSPEER: &str = "pps_peer";

// peer_type values reported by the daemon.
pub const PEER_TYPE_UNI_MANY_CAST: &str = "uni_or_many_cast";
pub const PEER_TYPE_B_M_CAST: &str = "bcst_or_mcst_client";
pub const PEER_TYPE_LOCAL_REF_CLOCK: &str = "local_ref_clock";
pub const PEER_TYPE_SYMM_PEER: &str = "symm_peer";
pub const PEER_TYPE_MANYCAST: &str = "manycast_server";
pub const PEER_TYPE_BROADCAST: &str = "bcast_server";
pub const PEER_TYPE_MULTICAST: &str = "mcast_server";
