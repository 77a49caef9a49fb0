use once_cell::sync::OnceCell;
use tracing_subscriber::{EnvFilter, fmt};

static TRACING_INIT: OnceCell<()> = OnceCell::new();

/// Installs the global tracing subscriber once; later calls are no-ops.
///
/// Filtering follows `RUST_LOG`. Output goes to stderr so embedding
/// applications keep stdout for their own use.
pub fn init_tracing() {
    TRACING_INIT.get_or_init(|| {
        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set global tracing subscriber");
    });
}
