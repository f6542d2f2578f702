//! Tracing subscriber for the storefront server.
//!
//! `RUST_LOG` wins when it parses. Otherwise the configured level applies to
//! the storefront crates only and every dependency logs at `warn`.

use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::trace::SdkTracerProvider;
use tracing_subscriber::{
    EnvFilter, fmt,
    layer::SubscriberExt as _,
    util::SubscriberInitExt as _,
};

use crate::config::{ServerConfig, observability::LogFormat};

use super::ObservabilityError;

/// Crates that follow the configured log level.
const STOREFRONT_TARGETS: [&str; 2] = ["storefront_json", "storefront_app"];

pub(super) fn init_subscriber(
    config: &ServerConfig,
    tracer_provider: Option<&SdkTracerProvider>,
) -> Result<(), ObservabilityError> {
    let otel = tracer_provider.map(|provider| {
        tracing_opentelemetry::layer()
            .with_tracer(provider.tracer(config.observability.otel_service_name.clone()))
    });

    let (compact, json) = match config.logging.log_format {
        LogFormat::Compact => (
            Some(fmt::layer().compact().with_file(true).with_line_number(true)),
            None,
        ),
        LogFormat::Json => (
            None,
            Some(fmt::layer().json().with_current_span(true).with_span_list(true)),
        ),
    };

    tracing_subscriber::registry()
        .with(env_filter(&config.logging.log_level))
        .with(otel)
        .with(compact)
        .with(json)
        .try_init()?;

    Ok(())
}

fn env_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(level)))
}

/// `sqlx` is named so per-query logging stays off even at `debug`.
fn default_directives(level: &str) -> String {
    let storefront = STOREFRONT_TARGETS
        .iter()
        .map(|target| format!("{target}={level}"))
        .collect::<Vec<_>>()
        .join(",");

    format!("warn,{storefront},sqlx=warn")
}
