//! Read-only display formatters.
//!
//! Presenters read the store and emit fixed-width text on an explicit
//! output sink; they never mutate anything. Column layouts match the
//! switch CLI conventions the operators already know from other
//! platforms.

mod associations;
mod keys;
mod running_config;
mod statistics;
mod status;

pub use associations::render_associations;
pub use keys::{render_authentication_keys, render_trusted_keys};
pub use running_config::render_running_config;
pub use statistics::render_statistics;
pub use status::render_status;
