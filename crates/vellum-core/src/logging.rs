use tracing_subscriber::EnvFilter;

/// Default filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

pub fn init() {
    init_with_filter(DEFAULT_FILTER);
}

/// Install a fmt subscriber, preferring `RUST_LOG` over `fallback`.
///
/// Calling this more than once is harmless; later calls leave the first
/// subscriber in place.
pub fn init_with_filter(fallback: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
