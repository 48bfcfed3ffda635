//! Diagnostic stream setup.
//!
//! All informational and error messages go to stderr so that stdout
//! carries nothing but the converted index lines and stays clean under
//! redirection.

use tracing_subscriber::EnvFilter;

/// Install the tracing subscriber. `RUST_LOG` is honored; the default
/// level is `info`.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init()
}
