use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize tracing for the current process.
/// Priority: LINKCARD_LOG env > default (info)
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("LINKCARD_LOG")
        .unwrap_or_else(|_| EnvFilter::new("linkcard=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .init();
}
