//! Configuration-store access layer.
//!
//! The switch keeps its running configuration in a small relational
//! database shared with the platform daemons. This module is the CLI's
//! view of it: typed rows for the four tables the CLI registers interest
//! in ([`schema`] declares the field names), natural-key lookups, and an
//! atomic transaction wrapper.
//!
//! # Transaction discipline
//!
//! Every mutating command runs inside exactly one [`Store::transaction`]
//! call. The closure mutates a staged copy of the data; the copy is
//! persisted with a write-to-temp-then-rename and only then swapped into
//! memory. Any error inside the closure or during persist aborts the
//! whole operation; no partial field updates are ever observable, on
//! disk or in memory.
//!
//! # Ownership of operational fields
//!
//! `System.ntp_status`, `System.ntp_statistics` and
//! `NTP_Association.association_status` are written by the NTP daemon
//! between CLI invocations. The CLI reads them for display and writes
//! them exactly once (to default sentinels) when it creates a row, so a
//! concurrent daemon update is never clobbered by a config change.

pub mod schema;

use crate::core::error::{NtpError, NtpResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// The singleton System row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SystemRow {
    /// NTP configuration knobs (authentication enable flag).
    #[serde(default)]
    pub ntp_config: BTreeMap<String, String>,

    /// Operational status written by the daemon. Read-only here.
    #[serde(default)]
    pub ntp_status: BTreeMap<String, String>,

    /// Packet counters written by the daemon. Read-only here.
    #[serde(default)]
    pub ntp_statistics: BTreeMap<String, String>,
}

/// A VRF row. Only the name is registered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VrfRow {
    pub name: String,
}

/// A configured NTP server peer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssociationRow {
    /// Server address or hostname. Immutable once set; natural key
    /// together with the VRF reference.
    pub address: String,

    /// Name of the owning VRF. Immutable. `None` models an orphaned row
    /// left behind by an out-of-band VRF deletion; such rows are never
    /// matched by lookups.
    pub vrf: Option<String>,

    /// Reference to an NTP key row, by key id.
    #[serde(default)]
    pub key_id: Option<i64>,

    /// Configurable attributes (prefer flag, protocol version,
    /// reference-clock id).
    #[serde(default)]
    pub association_attributes: BTreeMap<String, String>,

    /// Operational fields owned by the daemon. Read-only here.
    #[serde(default)]
    pub association_status: BTreeMap<String, String>,
}

impl AssociationRow {
    /// New row with both maps initialized to the documented defaults, so
    /// operational data the daemon has not reported yet displays as the
    /// sentinel rather than as missing keys.
    pub fn with_defaults(address: &str, vrf: Option<String>) -> Self {
        let mut attributes = BTreeMap::new();
        attributes.insert(
            schema::ASSOC_ATTRIB_REF_CLOCK_ID.to_string(),
            schema::NTP_DEFAULT_STR.to_string(),
        );
        attributes.insert(
            schema::ASSOC_ATTRIB_PREFER.to_string(),
            schema::NTP_FALSE_STR.to_string(),
        );
        attributes.insert(
            schema::ASSOC_ATTRIB_VERSION.to_string(),
            schema::ASSOC_ATTRIB_VERSION_DEFAULT.to_string(),
        );

        let association_status = schema::ASSOC_STATUS_FIELDS
            .iter()
            .map(|field| (field.to_string(), schema::NTP_DEFAULT_STR.to_string()))
            .collect();

        Self {
            address: address.to_string(),
            vrf,
            key_id: None,
            association_attributes: attributes,
            association_status,
        }
    }

    /// Attribute value, if set.
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.association_attributes.get(key).map(String::as_str)
    }

    /// Operational status value, if set.
    pub fn status(&self, key: &str) -> Option<&str> {
        self.association_status.get(key).map(String::as_str)
    }
}

/// An NTP authentication key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyRow {
    /// Key identifier. Immutable natural key.
    pub key_id: i64,

    /// MD5 password, stored in clear text by the data model.
    pub key_password: String,

    /// Whether the key is trusted for packet validation.
    #[serde(default)]
    pub trust_enable: bool,
}

/// The tables the CLI registers interest in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreData {
    /// Singleton System row. Seeded at database creation; commands never
    /// create or delete it.
    pub system: Option<SystemRow>,

    /// VRF rows. Seeded with the default VRF.
    #[serde(default)]
    pub vrfs: Vec<VrfRow>,

    /// NTP server associations.
    #[serde(default)]
    pub associations: Vec<AssociationRow>,

    /// NTP authentication keys.
    #[serde(default)]
    pub keys: Vec<KeyRow>,
}

impl StoreData {
    /// Contents of a freshly created database: the System singleton and
    /// the default VRF. In production these rows are owned by the
    /// platform daemons; seeding them here keeps the CLI usable
    /// standalone.
    pub fn bootstrap() -> Self {
        Self {
            system: Some(SystemRow::default()),
            vrfs: vec![VrfRow {
                name: schema::DEFAULT_VRF_NAME.to_string(),
            }],
            associations: Vec::new(),
            keys: Vec::new(),
        }
    }

    /// The singleton System row. Its absence is a store-invariant
    /// violation, not a user error.
    pub fn system(&self) -> NtpResult<&SystemRow> {
        self.system.as_ref().ok_or(NtpError::SystemRowMissing)
    }

    /// Mutable access to the System row.
    pub fn system_mut(&mut self) -> NtpResult<&mut SystemRow> {
        self.system.as_mut().ok_or(NtpError::SystemRowMissing)
    }

    /// The VRF a new association gets attached to.
    ///
    /// Exactly one VRF is supported today, so the requested name is not
    /// consulted and the first row wins. When multiple VRFs arrive this
    /// is the one place that needs a real name match.
    pub fn first_vrf(&self) -> Option<&VrfRow> {
        self.vrfs.first()
    }

    /// Key row with the given id, by linear scan.
    pub fn find_key(&self, key_id: i64) -> Option<&KeyRow> {
        self.key_index(key_id).map(|i| &self.keys[i])
    }

    /// Index of the key row with the given id.
    pub fn key_index(&self, key_id: i64) -> Option<usize> {
        for (i, row) in self.keys.iter().enumerate() {
            if row.key_id == key_id {
                tracing::debug!(key_id, row = i, "auth-key match found");
                return Some(i);
            }
        }

        tracing::debug!(key_id, "no matching auth-key found");
        None
    }

    /// Association row matching (vrf, address), by linear scan.
    pub fn find_association(&self, vrf_name: &str, address: &str) -> Option<&AssociationRow> {
        self.association_index(vrf_name, address)
            .map(|i| &self.associations[i])
    }

    /// Index of the association matching (vrf, address).
    ///
    /// The address must match and the row's VRF reference must be
    /// present and equal to `vrf_name`. A matching-address row with no
    /// VRF reference is an orphan: it is reported and skipped.
    pub fn association_index(&self, vrf_name: &str, address: &str) -> Option<usize> {
        for (i, row) in self.associations.iter().enumerate() {
            if row.address != address {
                continue;
            }

            match row.vrf.as_deref() {
                None => {
                    tracing::error!(address, row = i, "no VRF associated with server");
                }
                Some(row_vrf) if row_vrf == vrf_name => {
                    tracing::debug!(address, vrf = vrf_name, row = i, "server record found");
                    return Some(i);
                }
                Some(row_vrf) => {
                    tracing::debug!(
                        address,
                        row_vrf,
                        wanted = vrf_name,
                        "address matches but VRF differs"
                    );
                }
            }
        }

        tracing::debug!(address, vrf = vrf_name, "no matching server record found");
        None
    }
}

/// Handle on the configuration database.
///
/// A `Store` opened from a path persists every committed transaction back
/// to that path. An in-memory store (tests, dry runs) commits to memory
/// only.
#[derive(Debug)]
pub struct Store {
    path: Option<PathBuf>,
    data: StoreData,
}

impl Store {
    /// Open the database file, seeding a fresh one if it does not exist.
    pub fn open(path: &Path) -> NtpResult<Self> {
        let data = if path.exists() {
            let file = fs::File::open(path).map_err(|source| NtpError::StoreRead {
                path: path.to_path_buf(),
                source,
            })?;
            serde_json::from_reader(BufReader::new(file)).map_err(|source| {
                NtpError::StoreDecode {
                    path: path.to_path_buf(),
                    source,
                }
            })?
        } else {
            tracing::debug!(path = %path.display(), "seeding new configuration database");
            StoreData::bootstrap()
        };

        Ok(Self {
            path: Some(path.to_path_buf()),
            data,
        })
    }

    /// Store with no backing file, seeded with the bootstrap contents.
    pub fn in_memory() -> Self {
        Self {
            path: None,
            data: StoreData::bootstrap(),
        }
    }

    /// Read-only view of the current contents.
    pub fn data(&self) -> &StoreData {
        &self.data
    }

    /// Run `op` against a staged copy of the store and commit the result
    /// atomically.
    ///
    /// On `Err` from the closure or from persistence the staged copy is
    /// dropped and the store is left exactly as it was.
    pub fn transaction<T, F>(&mut self, op: F) -> NtpResult<T>
    where
        F: FnOnce(&mut StoreData) -> NtpResult<T>,
    {
        let mut staged = self.data.clone();
        let out = op(&mut staged)?;

        self.persist(&staged)?;
        self.data = staged;
        Ok(out)
    }

    fn persist(&self, data: &StoreData) -> NtpResult<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let encoded =
            serde_json::to_vec_pretty(data).map_err(|source| NtpError::StoreEncode { source })?;

        // Write the whole document beside the target, then rename over
        // it; readers never observe a half-written database.
        let tmp_path = path.with_extension("tmp");
        let write_err = |source| NtpError::StoreWrite {
            path: path.clone(),
            source,
        };

        let file = fs::File::create(&tmp_path).map_err(write_err)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(&encoded).map_err(write_err)?;
        writer.flush().map_err(write_err)?;

        fs::rename(&tmp_path, path).map_err(write_err)
    }
}
