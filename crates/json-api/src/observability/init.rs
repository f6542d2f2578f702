//! Startup and shutdown of the storefront's telemetry.

use opentelemetry::global;
use opentelemetry_sdk::{propagation::TraceContextPropagator, trace::SdkTracerProvider};
use tracing::{error, info};

use crate::config::ServerConfig;

use super::{ObservabilityError, logging, otel, settings};

/// Keeps the OTLP pipeline alive for as long as the server runs.
#[derive(Debug)]
pub(crate) struct Observability {
    tracer_provider: Option<SdkTracerProvider>,
}

impl Observability {
    /// Install the global subscriber. With `OTEL_ENABLED` the W3C propagator
    /// and a batching OTLP exporter come up first.
    pub(crate) fn init(config: &ServerConfig) -> Result<Self, ObservabilityError> {
        settings::apply_runtime_config(config);

        let tracer_provider = config
            .observability
            .otel_enabled
            .then(|| otlp_pipeline(config))
            .transpose()?;

        logging::init_subscriber(config, tracer_provider.as_ref())?;

        if tracer_provider.is_some() {
            info!(
                endpoint = %config.observability.otel_exporter_otlp_endpoint,
                service = %config.observability.otel_service_name,
                "exporting storefront spans over OTLP"
            );
        }

        Ok(Self { tracer_provider })
    }

    /// Flush buffered spans once the server has stopped taking requests.
    pub(crate) fn shutdown(self) {
        if let Some(provider) = self.tracer_provider
            && let Err(source) = provider.shutdown()
        {
            error!("failed to flush spans on shutdown: {source}");
        }
    }
}

fn otlp_pipeline(config: &ServerConfig) -> Result<SdkTracerProvider, ObservabilityError> {
    global::set_text_map_propagator(TraceContextPropagator::new());

    otel::build_tracer_provider(config)
}
