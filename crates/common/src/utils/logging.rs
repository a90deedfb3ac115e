use std::io;

use configs::{LogFormat, LoggingConfig};
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info";

/// Resolve the filter: `RUST_LOG` first, then the configured directive, then `info`.
fn env_filter(configured: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .ok()
        .or_else(|| configured.and_then(|f| EnvFilter::try_new(f).ok()))
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize tracing subscriber with compact, human-readable output on stdout.
/// - Respects `RUST_LOG` if set
/// - Falls back to `info`
pub fn init_logging_default() {
    let _ = fmt()
        .with_env_filter(env_filter(None))
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}

/// Initialize tracing subscriber with JSON structured output.
/// - Respects `RUST_LOG` if set, defaults to `info`
/// - Writes to stdout for consistent container logging behavior
pub fn init_logging_json() {
    let _ = fmt()
        .with_env_filter(env_filter(None))
        .with_target(false)
        .json()
        .with_writer(io::stdout)
        .try_init();
}

/// Initialize the global subscriber from `[logging]` settings.
///
/// Calling it more than once is harmless; only the first call installs a subscriber.
pub fn init_from_config(cfg: &LoggingConfig) {
    let filter = env_filter(cfg.filter.as_deref());
    let _ = match cfg.format {
        LogFormat::Compact => fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .with_writer(io::stdout)
            .try_init(),
        LogFormat::Json => fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_writer(io::stdout)
            .try_init(),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_does_not_panic() {
        let cfg = LoggingConfig { format: LogFormat::Json, filter: Some("debug".into()) };
        init_from_config(&cfg);
        init_from_config(&cfg);
        init_logging_default();
    }

    #[test]
    fn json_init_after_another_subscriber_is_harmless() {
        init_logging_default();
        init_logging_json();
    }

    #[test]
    fn invalid_directive_falls_back() {
        // an unparsable directive must not prevent subscriber construction
        let _ = env_filter(Some("=[=bad"));
    }
}
