//! Tracing subscriber setup.
//!
//! - `RUST_LOG`: filter directives (default: `entangle_server=info,tower_http=info`)
//! - `ENTANGLE_LOG_FORMAT`: `console` or `json` (default: `console`)

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

const DEFAULT_FILTER: &str = "entangle_server=info,tower_http=info";

/// Tracing output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracingFormat {
    /// Human-readable console output (for development).
    Console,
    /// JSON structured logging (for production).
    Json,
}

impl TracingFormat {
    /// Parse a format name; anything but `json` means console.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "json" => TracingFormat::Json,
            _ => TracingFormat::Console,
        }
    }
}

/// Read the output format from `ENTANGLE_LOG_FORMAT`.
pub fn format_from_env() -> TracingFormat {
    std::env::var("ENTANGLE_LOG_FORMAT").map_or(TracingFormat::Console, |f| {
        TracingFormat::from_name(&f)
    })
}

/// Install the global subscriber.
pub fn init_tracing(format: TracingFormat) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = match format {
        TracingFormat::Console => fmt::layer().with_target(true).boxed(),
        TracingFormat::Json => fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .json()
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::debug!(?format, "Tracing initialized");
    Ok(())
}
