use tracing_subscriber::EnvFilter;

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `default_directive` is used.
pub fn init_logging(default_directive: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with_target(true)
        .init();
}
