// ============================================================================
// Logging Setup
// Installs a tracing subscriber for binaries and examples
// ============================================================================

use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing output to stdout.
///
/// `RUST_LOG` takes precedence over `default_directive` (e.g.
/// `"money_measure=debug"`).
///
/// # Errors
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(default_directive: &str) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive.into()))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
}
