use tracing_subscriber::EnvFilter;


pub const DEFAULT_FILTER: &str = "info";

/// `RUST_LOG` when set and valid, otherwise [`DEFAULT_FILTER`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global JSON subscriber. Timestamps are left to the log sink,
/// which stamps every line on ingestion.
pub fn init() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter())
        .with_target(false)
        .with_current_span(false)
        .without_time()
        .try_init()
}
