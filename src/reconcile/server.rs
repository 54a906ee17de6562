//! Reconciler for NTP server associations.

use crate::core::error::{NtpError, NtpResult};
use crate::core::validate;
use crate::reconcile::Outcome;
use crate::store::{schema, AssociationRow, Store};

/// Arguments of one "ntp server" invocation.
#[derive(Debug, Clone)]
pub struct ServerParams {
    /// Server address or hostname.
    pub server_name: String,

    /// Owning VRF. Always the default VRF today.
    pub vrf_name: String,

    /// Mark this server preferred for synchronization.
    pub prefer: bool,

    /// Protocol version, as typed ("3" or "4").
    pub version: Option<String>,

    /// Authentication key reference, as typed.
    pub key_id: Option<String>,

    /// The negating form was invoked.
    pub no_form: bool,
}

impl ServerParams {
    /// Params for configuring `server_name` in the default VRF with no
    /// options set.
    pub fn new(server_name: &str) -> Self {
        Self {
            server_name: server_name.to_string(),
            vrf_name: schema::DEFAULT_VRF_NAME.to_string(),
            prefer: false,
            version: None,
            key_id: None,
            no_form: false,
        }
    }

    /// Params for the "no ntp server" form.
    pub fn delete(server_name: &str) -> Self {
        Self {
            no_form: true,
            ..Self::new(server_name)
        }
    }
}

/// Upsert or delete the association for (vrf, server name).
pub fn reconcile_server(store: &mut Store, params: &ServerParams) -> NtpResult<Outcome> {
    validate::validate_server_name(&params.server_name)?;

    if let Some(version) = &params.version {
        validate::validate_version(version)?;
    }

    // A referenced key must already have been configured.
    let key_id = match &params.key_id {
        Some(text) => {
            let key_id = validate::validate_key_id(text)?;
            if store.data().find_key(key_id).is_none() {
                return Err(NtpError::KeyDoesNotExist { key_id });
            }
            Some(key_id)
        }
        None => None,
    };

    store.transaction(|data| {
        let existing = data.association_index(&params.vrf_name, &params.server_name);

        match (existing, params.no_form) {
            (None, true) => Ok(Outcome::Missing),

            (None, false) => {
                validate::validate_server_capacity(data.associations.len())?;

                tracing::debug!(
                    server = %params.server_name,
                    vrf = %params.vrf_name,
                    "inserting a row into the association table"
                );

                // address and vrf are immutable: written here, at row
                // creation, and never again.
                let vrf = data.first_vrf().map(|vrf| vrf.name.clone());
                let mut row = AssociationRow::with_defaults(&params.server_name, vrf);
                apply_mutable_fields(&mut row, params, key_id);
                data.associations.push(row);
                Ok(Outcome::Created)
            }

            (Some(index), true) => {
                tracing::debug!(
                    server = %params.server_name,
                    "deleting a row from the association table"
                );
                data.associations.remove(index);
                Ok(Outcome::Deleted)
            }

            (Some(index), false) => {
                tracing::debug!(
                    server = %params.server_name,
                    "server already exists, replacing parameters"
                );
                apply_mutable_fields(&mut data.associations[index], params, key_id);
                Ok(Outcome::Updated)
            }
        }
    })
}

/// Apply the mutable subset of the parameters to a row.
///
/// `prefer` is only ever raised here: a later command without the flag
/// leaves it set, and clearing it requires deleting the association.
/// Daemon-owned status fields are never touched.
fn apply_mutable_fields(row: &mut AssociationRow, params: &ServerParams, key_id: Option<i64>) {
    if params.prefer {
        row.association_attributes.insert(
            schema::ASSOC_ATTRIB_PREFER.to_string(),
            schema::NTP_TRUE_STR.to_string(),
        );
    }

    if let Some(version) = &params.version {
        row.association_attributes
            .insert(schema::ASSOC_ATTRIB_VERSION.to_string(), version.clone());
    }

    if key_id.is_some() {
        row.key_id = key_id;
    }
}
