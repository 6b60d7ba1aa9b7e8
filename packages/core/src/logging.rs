use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "koreanit_server=info,tower_http=info";

/// Initialize structured logging for the application.
///
/// This must be called once at startup (in main.rs). `RUST_LOG` overrides
/// the default filter.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    info!("Logging initialized");
}
