//! Logging initialisation for the binary and for host programs.

use crate::settings::Settings;
use captain_core::BoxError;
use tracing_subscriber::EnvFilter;

/// Install a `fmt` subscriber writing to standard error.
///
/// `RUST_LOG` takes precedence; otherwise the filter comes from `settings`.
/// Fails if a global subscriber is already installed.
pub fn init(settings: &Settings) -> Result<(), BoxError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.log_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
}
