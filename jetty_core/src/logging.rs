//! Logging utilities for Jetty-wide output to stdout.
//!

// Re-exports for convenience
pub use tracing::metadata::LevelFilter;
pub use tracing::{debug, error, info, warn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{util::SubscriberInitExt, Layer};

/// Filter used when RUST_LOG isn't set.
const DEFAULT_FILTER: &str = "jetty_core=info,jetty_materialize=info";

/// Set up basic logging
pub fn setup(level: Option<LevelFilter>) {
    let layers = logging_layers(level);

    // A second call is a no-op.
    if tracing_subscriber::registry().with(layers).try_init().is_ok() {
        debug!("logging set up");
    }
}

fn logging_layers<S>(level: Option<LevelFilter>) -> Vec<Box<dyn Layer<S> + Send + Sync>>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    // The user can specify a log level via an env var
    // (such as for testing).
    let env = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.into());

    // The input level overrides any env vars.
    let level = level.unwrap_or(LevelFilter::INFO);

    vec![
        tracing_subscriber::EnvFilter::new(env).boxed(),
        tracing_subscriber::fmt::layer().with_filter(level).boxed(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_twice_does_not_panic() {
        setup(Some(LevelFilter::DEBUG));
        setup(None);
        info!("still logging");
    }
}
