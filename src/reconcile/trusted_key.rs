//! Reconciler for the trusted-key flag.

use crate::core::error::NtpResult;
use crate::core::validate;
use crate::reconcile::Outcome;
use crate::store::Store;

/// Arguments of one "ntp trusted-key" invocation.
#[derive(Debug, Clone)]
pub struct TrustedKeyParams {
    /// Key id, as typed.
    pub key: String,

    /// The negating form was invoked.
    pub no_form: bool,
}

impl TrustedKeyParams {
    pub fn new(key: &str) -> Self {
        Self {
            key: key.to_string(),
            no_form: false,
        }
    }

    pub fn delete(key: &str) -> Self {
        Self {
            key: key.to_string(),
            no_form: true,
        }
    }
}

/// Toggle `trust_enable` on an existing key row.
///
/// This command never creates or deletes key rows: the key must have
/// been configured via "ntp authentication-key" first, otherwise the
/// result is a benign no-op.
pub fn reconcile_trusted_key(store: &mut Store, params: &TrustedKeyParams) -> NtpResult<Outcome> {
    let key_id = validate::validate_key_id(&params.key)?;

    store.transaction(|data| match data.key_index(key_id) {
        None => Ok(Outcome::Missing),

        Some(index) => {
            let trusted = !params.no_form;
            if trusted {
                tracing::debug!(key_id, "marking key as trusted");
            } else {
                tracing::debug!(key_id, "unmarking key as trusted");
            }
            data.keys[index].trust_enable = trusted;
            Ok(Outcome::Updated)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reconcile::{reconcile_auth_key, AuthKeyParams};

    #[test]
    fn trusting_an_absent_key_creates_nothing() {
        let mut store = Store::in_memory();
        let outcome = reconcile_trusted_key(&mut store, &TrustedKeyParams::new("10")).unwrap();

        assert_eq!(outcome, Outcome::Missing);
        assert!(store.data().keys.is_empty());
    }

    #[test]
    fn trust_flag_round_trip() {
        let mut store = Store::in_memory();
        reconcile_auth_key(&mut store, &AuthKeyParams::new("10", "password1")).unwrap();

        reconcile_trusted_key(&mut store, &TrustedKeyParams::new("10")).unwrap();
        assert!(store.data().find_key(10).unwrap().trust_enable);

        reconcile_trusted_key(&mut store, &TrustedKeyParams::delete("10")).unwrap();
        assert!(!store.data().find_key(10).unwrap().trust_enable);

        // The row itself survives both toggles.
        assert_eq!(store.data().keys.len(), 1);
    }
}
