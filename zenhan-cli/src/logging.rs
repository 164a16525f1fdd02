use std::sync::Once;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

static INIT_LOGGING: Once = Once::new();

/// Filter directives for our crates at `level`
pub fn default_filter(level: &str) -> String {
    format!("zenhan={level},zenhan_cli={level},zenhan_engine={level}")
}

/// Install the global subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over `level`. Later calls are no-ops.
pub fn init_logging(level: &str) {
    let default_filter = default_filter(level);
    INIT_LOGGING.call_once(|| {
        tracing_subscriber::registry()
            .with(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new(&default_filter)),
            )
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(
            default_filter("debug"),
            "zenhan=debug,zenhan_cli=debug,zenhan_engine=debug"
        );
    }
}
