/// Initializes the tracing/logging infrastructure for the application.
///
/// Set `RUST_LOG` to control log verbosity:
/// - `RUST_LOG=info` - Orders placed and fulfilled, open/close
/// - `RUST_LOG=debug` - Queue creation, drain detection
/// - `RUST_LOG=trace` - Every enqueue and dequeue
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
