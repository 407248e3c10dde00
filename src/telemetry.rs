//! Request metrics and the middleware that records them.
//! Used by: handlers::metrics, server, state.

use std::time::{Duration, Instant};

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use prometheus::{Histogram, HistogramOpts, IntCounterVec, Opts, Registry, TextEncoder};

use crate::error::Result;
use crate::model::Resource;
use crate::state::AppState;

pub const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Per-service request counter and duration histogram, backed by an explicit
/// registry so two services in one process never share metric state.
pub struct HttpMetrics {
    registry: Registry,
    requests: IntCounterVec,
    duration: Histogram,
}

impl HttpMetrics {
    /// Metric names are prefixed with the service name, `-` mapped to `_`,
    /// e.g. `product_service_requests_total`.
    pub fn new(service: &str) -> Result<Self> {
        let prefix = service.replace('-', "_");
        let registry = Registry::new();
        let requests = IntCounterVec::new(
            Opts::new(format!("{prefix}_requests_total"), "Total requests"),
            &["method", "endpoint"],
        )?;
        let duration = Histogram::with_opts(HistogramOpts::new(
            format!("{prefix}_request_duration_seconds"),
            "Request duration",
        ))?;
        registry.register(Box::new(requests.clone()))?;
        registry.register(Box::new(duration.clone()))?;
        Ok(Self {
            registry,
            requests,
            duration,
        })
    }

    /// One counter increment for the (method, endpoint) pair and one duration
    /// observation, regardless of how the request turned out.
    pub fn record(&self, method: &str, endpoint: &str, elapsed: Duration) {
        self.requests.with_label_values(&[method, endpoint]).inc();
        self.duration.observe(elapsed.as_secs_f64());
    }

    /// Current state in the Prometheus text exposition format.
    pub fn render(&self) -> Result<String> {
        let encoder = TextEncoder::new();
        Ok(encoder.encode_to_string(&self.registry.gather())?)
    }
}

/// Wraps every route. The sample is recorded after the handler returns, so
/// the `/metrics` response body never includes the call that produced it.
/// The endpoint label is the raw request path, ids included.
pub async fn track_requests<T: Resource>(
    State(state): State<AppState<T>>,
    request: Request,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let endpoint = request.uri().path().to_owned();
    let start = Instant::now();
    let response = next.run(request).await;
    state.metrics.record(method.as_str(), &endpoint, start.elapsed());
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metric_names_use_service_prefix() -> Result<()> {
        let metrics = HttpMetrics::new("product-service")?;
        metrics.record("GET", "/products", Duration::from_millis(5));
        let body = metrics.render()?;
        assert!(body.contains("product_service_requests_total"));
        assert!(body.contains("product_service_request_duration_seconds"));
        Ok(())
    }

    #[test]
    fn counter_is_labeled_by_method_and_endpoint() -> Result<()> {
        let metrics = HttpMetrics::new("user-service")?;
        metrics.record("GET", "/users", Duration::from_millis(1));
        metrics.record("POST", "/users", Duration::from_millis(1));
        metrics.record("GET", "/users", Duration::from_millis(1));
        let body = metrics.render()?;
        assert!(body.contains(r#"endpoint="/users",method="GET"} 2"#));
        assert!(body.contains(r#"endpoint="/users",method="POST"} 1"#));
        Ok(())
    }

    #[test]
    fn every_record_adds_one_histogram_observation() -> Result<()> {
        let metrics = HttpMetrics::new("product-service")?;
        metrics.record("GET", "/products/99", Duration::from_millis(1));
        metrics.record("GET", "/health", Duration::from_millis(1));
        let body = metrics.render()?;
        assert!(body.contains("product_service_request_duration_seconds_count 2"));
        Ok(())
    }

    #[test]
    fn registries_are_independent_per_service() -> Result<()> {
        let products = HttpMetrics::new("product-service")?;
        let users = HttpMetrics::new("user-service")?;
        products.record("GET", "/products", Duration::from_millis(1));
        let body = users.render()?;
        assert!(!body.contains("product_service_requests_total"));
        Ok(())
    }
}
