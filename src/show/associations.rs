//! Association table presenter.

use crate::store::{schema, StoreData};
use std::io::{self, Write};

/// Total width of the horizontal rule lines.
const RULE_WIDTH: usize = 142;

/// NAME column content limit (column width 39).
const NAME_WIDTH: usize = 38;

/// REMOTE / REF-ID column content limit.
const REMOTE_WIDTH: usize = 15;

/// Single-character tally code summarizing the daemon's selection
/// verdict for a peer. Unknown or unset status words render like
/// "reject".
fn tally_glyph(status_word: Option<&str>) -> char {
    match status_word {
        Some(schema::PEER_STATUS_WORD_REJECT) => ' ',
        Some(schema::PEER_STATUS_WORD_FALSETICK) => 'x',
        Some(schema::PEER_STATUS_WORD_EXCESS) => '.',
        Some(schema::PEER_STATUS_WORD_OUTLIER) => '-',
        Some(schema::PEER_STATUS_WORD_CANDIDATE) => '+',
        Some(schema::PEER_STATUS_WORD_BACKUP) => '#',
        Some(schema::PEER_STATUS_WORD_SYSTEMPEER) => '*',
        Some(schema::PEER_STATUS_WORD_PPSPEER) => 'o',
        _ => ' ',
    }
}

/// Single-character peer type code.
fn peer_type_char(peer_type: Option<&str>) -> char {
    match peer_type {
        Some(schema::PEER_TYPE_UNI_MANY_CAST) => 'U',
        Some(schema::PEER_TYPE_B_M_CAST) => 'b',
        Some(schema::PEER_TYPE_LOCAL_REF_CLOCK) => 'L',
        Some(schema::PEER_TYPE_SYMM_PEER) => 'S',
        Some(schema::PEER_TYPE_MANYCAST) => 'm',
        Some(schema::PEER_TYPE_BROADCAST) => 'B',
        Some(schema::PEER_TYPE_MULTICAST) => 'M',
        _ => '-',
    }
}

fn truncated(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

/// Render the association table, one row per configured peer.
pub fn render_associations(data: &StoreData, out: &mut impl Write) -> io::Result<()> {
    let rule = "-".repeat(RULE_WIDTH);

    writeln!(out, "{rule}")?;
    writeln!(
        out,
        " {:>3}  {:>39}  {:>15}  {:>3}  {:>5}  {:>15}  {:>2}  {:>1}  {:>4}  {:>4}  {:>5}  {:>7}  {:>6}  {:>6}",
        "ID",
        "NAME",
        "REMOTE",
        "VER",
        "KEYID",
        "REF-ID",
        "ST",
        "T",
        "LAST",
        "POLL",
        "REACH",
        "DELAY",
        "OFFSET",
        "JITTER"
    )?;
    writeln!(out, "{rule}")?;

    for (i, row) in data.associations.iter().enumerate() {
        let glyph = tally_glyph(row.status(schema::ASSOC_STATUS_PEER_STATUS_WORD));
        let name = truncated(&row.address, NAME_WIDTH);
        let remote = truncated(
            row.status(schema::ASSOC_STATUS_REMOTE_PEER_ADDRESS)
                .unwrap_or(schema::NTP_DEFAULT_STR),
            REMOTE_WIDTH,
        );
        let version = row.attribute(schema::ASSOC_ATTRIB_VERSION).unwrap_or("");
        let key = row
            .key_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| schema::NTP_DEFAULT_STR.to_string());
        let ref_id = truncated(
            row.status(schema::ASSOC_STATUS_REMOTE_PEER_REF_ID)
                .unwrap_or(schema::NTP_DEFAULT_STR),
            REMOTE_WIDTH,
        );
        let stratum = row.status(schema::ASSOC_STATUS_STRATUM).unwrap_or("");
        let peer_type = peer_type_char(row.status(schema::ASSOC_STATUS_PEER_TYPE));
        let last = row.status(schema::ASSOC_STATUS_LAST_POLLED).unwrap_or("");
        let poll = row
            .status(schema::ASSOC_STATUS_POLLING_INTERVAL)
            .unwrap_or("");
        let reach = row
            .status(schema::ASSOC_STATUS_REACHABILITY_REGISTER)
            .unwrap_or("");
        let delay = row.status(schema::ASSOC_STATUS_NETWORK_DELAY).unwrap_or("");
        let offset = row.status(schema::ASSOC_STATUS_TIME_OFFSET).unwrap_or("");
        let jitter = row.status(schema::ASSOC_STATUS_JITTER).unwrap_or("");

        writeln!(
            out,
            "{glyph}{:>3}  {:>39}  {:>15}  {:>3}  {:>5}  {:>15}  {:>2}  {:>1}  {:>4}  {:>4}  {:>5}  {:>7}  {:>6}  {:>6}",
            i + 1,
            name,
            remote,
            version,
            key,
            ref_id,
            stratum,
            peer_type,
            last,
            poll,
            reach,
            delay,
            offset,
            jitter
        )?;
    }

    writeln!(out, "{rule}")?;
    Ok(())
}
