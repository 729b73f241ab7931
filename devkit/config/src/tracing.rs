use tracing_subscriber::{EnvFilter, fmt};

/// Install the fmt subscriber used by every devkit binary. `RUST_LOG`
/// overrides the `info` default.
pub fn init_tracing() {
    let filter = devkit_env::rust_log()
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("info"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
