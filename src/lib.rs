// Mojifix - one-shot anchored text patcher
// Fixes a garbled comment by replacing an exact literal in a single file

pub mod error;
pub mod patch;

use tracing::info;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Initialize logging for the patcher binary
///
/// Logs go to stderr so they never mix with anything a caller pipes from
/// stdout. Level is controlled through RUST_LOG as usual.
pub fn init_logging() {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    fmt::Subscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    info!("mojifix v{} starting", version());
}
