pub mod prometheus;

use std::sync::Arc;

use axum::{routing::get, Router};

use self::prometheus::MetricsState;

/// Health and metrics endpoints, served on their own port
pub fn router(state: Arc<MetricsState>) -> Router {
    Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .route("/readyz", get(|| async { "ok" }))
        .route(
            "/metrics",
            get(move || {
                let state = Arc::clone(&state);
                async move { state.gather() }
            }),
        )
}
