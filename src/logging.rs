//! Diagnostic logging to stderr. `RUST_LOG` wins over the configured level.

use tracing_subscriber::EnvFilter;

pub fn init(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("shiftboard={level}")));

    // A second init (tests calling run() twice) is not an error worth failing on.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
