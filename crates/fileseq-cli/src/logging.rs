//! Structured logging with environment variable configuration.
//!
//! Logs are written to stderr so the expanded paths on stdout stay
//! machine-readable.

use tracing_subscriber::EnvFilter;

/// Environment variable consulted before the generic `RUST_LOG`.
const LOG_ENV: &str = "FILESEQ_LOG";

/// Initialise the logging subsystem.
///
/// The filter comes from `FILESEQ_LOG`, then `RUST_LOG`, then defaults to
/// `warn`. The library reports literal-fallback decisions at debug level, so
/// `FILESEQ_LOG=debug` shows why a token was not treated as a sequence.
pub(crate) fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();

    // The first subscriber wins; later initialisations are ignored.
    let _ = tracing::subscriber::set_global_default(subscriber);
}
