//! Logging bootstrap for the service binaries.

use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

/// Install the JSON `tracing` subscriber filtered by `RUST_LOG`.
///
/// A second installation attempt (for example from tests) is logged and
/// otherwise ignored.
pub fn init_tracing() {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}
