//! Logging and tracing utilities

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Filter used when `RUST_LOG` is not set
pub fn default_filter(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "warn,trustreg=info,trustreg_core=info,trustreg_dashboard=info",
        _ => "info,trustreg=debug,trustreg_core=debug,trustreg_dashboard=debug,trustreg_utils=debug",
    }
}

/// Initialize the tracing subscriber
///
/// Events go to stderr; stdout carries rendered dashboard output.
pub fn init_tracing(verbosity: u8) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity))),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        for verbosity in 0..4 {
            assert!(EnvFilter::try_new(default_filter(verbosity)).is_ok());
        }
    }

    #[test]
    fn test_verbosity_raises_level() {
        assert_eq!(default_filter(0), "warn");
        assert!(default_filter(1).contains("trustreg=info"));
        assert!(default_filter(5).contains("trustreg=debug"));
    }
}
