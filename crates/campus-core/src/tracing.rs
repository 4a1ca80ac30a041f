use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Set up JSON tracing to stdout, filtered by `RUST_LOG`. Called from
/// `main` before anything else logs; calling again later is a no-op
/// rather than an error, which keeps test binaries from fighting over
/// the global subscriber.
pub fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().json())
        .try_init();
}
