//! Tracing and logging configuration
//!
//! Development gets human-readable logs, production gets JSON lines for log
//! aggregation.

use tracing_subscriber::{
    EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt,
    util::TryInitError,
};

use crate::config::Environment;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Install the global subscriber for `env`.
///
/// # Development Mode
/// - Pretty-printed output with file locations and line numbers
/// - Default level: DEBUG
///
/// # Production Mode
/// - JSON lines, span fields flattened into each event
/// - Default level: INFO
///
/// `RUST_LOG` overrides the default level in both modes
/// (e.g. `RUST_LOG=bb_practice=trace`).
///
/// Fails instead of panicking if a global subscriber is already installed,
/// so hosts and tests may call it more than once.
pub fn init_tracing(env: &Environment) -> Result<(), TryInitError> {
    let (default_level, layer) = match env {
        Environment::Development => ("debug", pretty_layer()),
        Environment::Production => ("info", json_layer()),
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(layer.with_filter(filter))
        .try_init()?;

    tracing::info!(?env, "Tracing initialized");
    Ok(())
}

fn pretty_layer() -> BoxedLayer {
    tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .pretty()
        .boxed()
}

fn json_layer() -> BoxedLayer {
    tracing_subscriber::fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .flatten_event(true)
        .boxed()
}
