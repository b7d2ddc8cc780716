use std::sync::Once;

use tracing_forest::ForestLayer;
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry,
};

static INIT: Once = Once::new();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoggerType {
    Forest,
    Flat,
}

impl LoggerType {
    /// Unknown names fall back to `forest`; the second field reports whether they did.
    fn from_name(name: Option<&str>) -> (Self, bool) {
        match name {
            None | Some("forest") => (LoggerType::Forest, false),
            Some("flat") => (LoggerType::Flat, false),
            Some(_) => (LoggerType::Forest, true),
        }
    }
}

/// A simple logger.
///
/// Set the `RUST_LOG` environment variable to `info` or `debug` to see output, and
/// `RUST_LOGGER` to `forest` (default) or `flat` to pick the format.
pub fn setup_logger() {
    INIT.call_once(|| {
        let default_filter = "off";
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

        let logger_name = std::env::var("RUST_LOGGER").ok();
        let (logger_type, unknown) = LoggerType::from_name(logger_name.as_deref());
        match logger_type {
            LoggerType::Forest => {
                Registry::default()
                    .with(env_filter)
                    .with(ForestLayer::default())
                    .init();
            }
            LoggerType::Flat => {
                tracing_subscriber::fmt::Subscriber::builder()
                    .compact()
                    .with_file(false)
                    .with_target(false)
                    .with_thread_names(false)
                    .with_env_filter(env_filter)
                    .with_span_events(FmtSpan::CLOSE)
                    .with_writer(std::io::stderr)
                    .finish()
                    .init();
            }
        }

        if unknown {
            tracing::warn!(
                "unknown logger type {:?}, using forest",
                logger_name.unwrap_or_default()
            );
        }
    });
}
