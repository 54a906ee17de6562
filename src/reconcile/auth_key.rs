//! Reconciler for NTP authentication keys.

use crate::core::error::NtpResult;
use crate::core::validate;
use crate::reconcile::Outcome;
use crate::store::{KeyRow, Store};

/// Arguments of one "ntp authentication-key" invocation.
#[derive(Debug, Clone)]
pub struct AuthKeyParams {
    /// Key id, as typed.
    pub key: String,

    /// MD5 password. Absent in the negating form.
    pub md5_password: Option<String>,

    /// The negating form was invoked.
    pub no_form: bool,
}

impl AuthKeyParams {
    /// Params for configuring a key.
    pub fn new(key: &str, md5_password: &str) -> Self {
        Self {
            key: key.to_string(),
            md5_password: Some(md5_password.to_string()),
            no_form: false,
        }
    }

    /// Params for the "no ntp authentication-key" form.
    pub fn delete(key: &str) -> Self {
        Self {
            key: key.to_string(),
            md5_password: None,
            no_form: true,
        }
    }
}

/// Upsert or delete the key row for a key id.
pub fn reconcile_auth_key(store: &mut Store, params: &AuthKeyParams) -> NtpResult<Outcome> {
    let key_id = validate::validate_key_id(&params.key)?;

    let password = params.md5_password.as_deref().unwrap_or_default();
    if !params.no_form {
        validate::validate_password(password)?;
    }

    store.transaction(|data| match (data.key_index(key_id), params.no_form) {
        (None, true) => Ok(Outcome::Missing),

        (None, false) => {
            tracing::debug!(key_id, "inserting a row into the keys table");
            data.keys.push(KeyRow {
                // key_id is immutable: set only during row creation.
                key_id,
                key_password: password.to_string(),
                trust_enable: false,
            });
            Ok(Outcome::Created)
        }

        (Some(index), true) => {
            tracing::debug!(key_id, "deleting a row from the keys table");
            data.keys.remove(index);
            Ok(Outcome::Deleted)
        }

        (Some(index), false) => {
            tracing::debug!(key_id, "key already exists, replacing password");
            data.keys[index].key_password = password.to_string();
            Ok(Outcome::Updated)
        }
    })
}
