//! Reconciler for the global authentication-enable flag.

use crate::core::error::NtpResult;
use crate::reconcile::Outcome;
use crate::store::{schema, Store};

/// Arguments of one "ntp authentication enable" invocation.
#[derive(Debug, Clone, Default)]
pub struct AuthEnableParams {
    /// The negating form was invoked.
    pub no_form: bool,
}

/// Set the authentication-enable flag on the System singleton.
///
/// The System row is owned by the platform; if it cannot be located the
/// transaction aborts with a store-invariant error.
pub fn reconcile_auth_enable(store: &mut Store, params: &AuthEnableParams) -> NtpResult<Outcome> {
    store.transaction(|data| {
        let system = data.system_mut()?;

        let value = if params.no_form {
            schema::NTP_FALSE_STR
        } else {
            schema::NTP_TRUE_STR
        };
        system.ntp_config.insert(
            schema::NTP_CONFIG_AUTHENTICATION_ENABLE.to_string(),
            value.to_string(),
        );

        Ok(Outcome::Updated)
    })
}
