//! Logging initialization and configuration.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Filter directives for the configured level, with the chattiest
/// dependencies turned down so request logs stay readable at `debug`.
fn default_directives(level: &str) -> String {
    format!("{level},sqlx=warn,hyper=warn,tower_http=info")
}

/// Initializes the logging subsystem based on configuration.
///
/// `RUST_LOG` overrides the configured level entirely when set. Span
/// lifecycle events are left off: the request middleware emits one
/// completion line per request already.
pub fn init_logging(config: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(&config.level)));

    let registry = tracing_subscriber::registry().with(filter);

    if config.format == "json" {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_target(true),
            )
            .init();
    } else {
        registry
            .with(fmt::layer().compact().with_target(true))
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_quiet_noisy_deps() {
        let directives = default_directives("debug");
        assert!(directives.starts_with("debug,"));
        assert!(directives.contains("sqlx=warn"));
        assert!(directives.contains("tower_http=info"));
    }

    #[test]
    fn test_default_directives_parse_as_filter() {
        assert!(EnvFilter::try_new(default_directives("info")).is_ok());
    }
}
