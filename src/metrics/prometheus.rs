use std::time::Duration;

use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};
use tracing::error;

/// Prometheus metrics state for the gateway
pub struct MetricsState {
    registry: Registry,
    pub requests_total: IntCounterVec,
    pub request_duration_seconds: HistogramVec,
}

impl Default for MetricsState {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsState {
    pub fn new() -> Self {
        let registry = Registry::new();

        let requests_total = IntCounterVec::new(
            Opts::new(
                "chain_backup_gateway_requests_total",
                "Total number of resource requests handled",
            ),
            &["kind", "operation", "outcome"],
        )
        .expect("metric creation");
        registry
            .register(Box::new(requests_total.clone()))
            .expect("metric registration");

        let request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "chain_backup_gateway_request_duration_seconds",
                "Time spent waiting on the Kubernetes API per request",
            )
            .buckets(vec![0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0]),
            &["kind", "operation"],
        )
        .expect("metric creation");
        registry
            .register(Box::new(request_duration_seconds.clone()))
            .expect("metric registration");

        Self {
            registry,
            requests_total,
            request_duration_seconds,
        }
    }

    /// Gather all metrics and encode as Prometheus text format
    pub fn gather(&self) -> String {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
            error!(error = %e, "Failed to encode metrics");
        }
        String::from_utf8_lossy(&buffer).into_owned()
    }

    /// Record one handled request; `outcome` is `success`, `not_found`, `invalid` or `error`
    pub fn record_request(&self, kind: &str, operation: &str, outcome: &str, elapsed: Duration) {
        self.requests_total
            .with_label_values(&[kind, operation, outcome])
            .inc();
        self.request_duration_seconds
            .with_label_values(&[kind, operation])
            .observe(elapsed.as_secs_f64());
    }
}
