//! Shared test infrastructure.


/// Installs a test-writer tracing subscriber, once per process.
///
/// Honors `RUST_LOG` so a failing hardware test can be rerun with the raise
/// routine's trace events visible.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
