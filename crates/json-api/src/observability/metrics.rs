//! Prometheus HTTP metrics for the storefront routes, served at `/metrics`.

use std::sync::OnceLock;

use prometheus::{
    Encoder as _, HistogramOpts, HistogramVec, IntCounterVec, IntGauge, Opts, Registry,
    TEXT_FORMAT, TextEncoder,
};
use salvo::{
    Response, handler,
    http::{
        StatusCode,
        header::{CONTENT_TYPE, HeaderValue},
    },
};
use tracing::error;

/// Prepended to every metric name on export.
const METRIC_PREFIX: &str = "storefront_json";

/// Seconds. Product and cart routes are one or two queries each.
const LATENCY_BUCKETS: [f64; 10] = [0.002, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5];

static HTTP_METRICS: OnceLock<Option<HttpMetrics>> = OnceLock::new();

#[derive(Debug)]
struct HttpMetrics {
    registry: Registry,
    requests: IntCounterVec,
    latency: HistogramVec,
    in_flight: IntGauge,
}

impl HttpMetrics {
    fn register() -> prometheus::Result<Self> {
        let registry = Registry::new_custom(Some(METRIC_PREFIX.to_owned()), None)?;

        let requests = IntCounterVec::new(
            Opts::new(
                "http_requests_total",
                "Storefront HTTP requests by method, route and response status.",
            ),
            &["method", "route", "status_class", "status_code"],
        )?;

        let latency = HistogramVec::new(
            HistogramOpts::new(
                "http_request_duration_seconds",
                "Storefront HTTP request latency by method and route.",
            )
            .buckets(LATENCY_BUCKETS.to_vec()),
            &["method", "route"],
        )?;

        let in_flight = IntGauge::new(
            "http_requests_in_flight",
            "Storefront HTTP requests currently being served.",
        )?;

        registry.register(Box::new(requests.clone()))?;
        registry.register(Box::new(latency.clone()))?;
        registry.register(Box::new(in_flight.clone()))?;

        Ok(Self {
            registry,
            requests,
            latency,
            in_flight,
        })
    }

    fn render(&self) -> prometheus::Result<String> {
        let mut encoded = Vec::new();

        TextEncoder::new().encode(&self.registry.gather(), &mut encoded)?;

        Ok(String::from_utf8_lossy(&encoded).into_owned())
    }
}

fn metrics() -> Option<&'static HttpMetrics> {
    HTTP_METRICS
        .get_or_init(|| {
            HttpMetrics::register()
                .inspect_err(|source| error!("failed to register HTTP metrics: {source}"))
                .ok()
        })
        .as_ref()
}

/// Counts a request as in flight until dropped.
#[derive(Debug)]
pub(super) struct InFlightRequestGuard(Option<&'static IntGauge>);

impl InFlightRequestGuard {
    pub(super) fn track() -> Self {
        let gauge = metrics().map(|metrics| &metrics.in_flight);

        if let Some(gauge) = gauge {
            gauge.inc();
        }

        Self(gauge)
    }
}

impl Drop for InFlightRequestGuard {
    fn drop(&mut self) {
        if let Some(gauge) = self.0 {
            gauge.dec();
        }
    }
}

pub(super) fn observe_request(method: &str, route: &str, status_code: u16, duration_seconds: f64) {
    let Some(metrics) = metrics() else {
        return;
    };

    let status = status_code.to_string();

    metrics
        .requests
        .with_label_values(&[method, route, status_class(status_code), status.as_str()])
        .inc();

    metrics
        .latency
        .with_label_values(&[method, route])
        .observe(duration_seconds);
}

#[handler]
pub(crate) async fn metrics_handler(res: &mut Response) {
    match metrics().map(HttpMetrics::render) {
        Some(Ok(body)) => {
            res.headers_mut()
                .insert(CONTENT_TYPE, HeaderValue::from_static(TEXT_FORMAT));
            res.render(body);
        }
        Some(Err(source)) => {
            error!("failed to encode metrics: {source}");
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
        }
        None => {
            res.status_code(StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}

fn status_class(status_code: u16) -> &'static str {
    match status_code {
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "other",
    }
}
