//! Packet-counter presenter.

use crate::store::{schema, StoreData};
use std::io::{self, Write};

/// Counter rows in display order: label, statistics field.
const COUNTERS: [(&str, &str); 9] = [
    ("Rx-pkts", schema::NTP_STATS_PKTS_RECEIVED),
    ("Cur Ver Rx-pkts", schema::NTP_STATS_PKTS_CUR_VER),
    ("Old Ver Rx-pkts", schema::NTP_STATS_PKTS_OLD_VER),
    ("Error pkts", schema::NTP_STATS_PKTS_BAD_LEN_OR_FORMAT),
    ("Auth-failed pkts", schema::NTP_STATS_PKTS_AUTH_FAILED),
    ("Declined pkts", schema::NTP_STATS_PKTS_DECLINED),
    ("Restricted pkts", schema::NTP_STATS_PKTS_RESTRICTED),
    ("Rate-limited pkts", schema::NTP_STATS_PKTS_RATE_LIMITED),
    ("KOD pkts", schema::NTP_STATS_PKTS_KOD_RESPONSES),
];

/// Render the daemon's packet counters.
pub fn render_statistics(data: &StoreData, out: &mut impl Write) -> io::Result<()> {
    let Ok(system) = data.system() else {
        writeln!(out, "Could not access the System Table")?;
        return Ok(());
    };

    for (label, field) in COUNTERS {
        let value = system
            .ntp_statistics
            .get(field)
            .map(String::as_str)
            .unwrap_or(schema::NTP_DEFAULT_STR);
        writeln!(out, "{label:>20}    {value}")?;
    }

    Ok(())
}
