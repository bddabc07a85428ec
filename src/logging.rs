//! Logging setup.

/// Initialize the tracing subscriber for logging.
///
/// Only logs from this crate at info level by default; override with
/// `RUST_LOG`.
pub fn init() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("emome=info"));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .try_init();
}
