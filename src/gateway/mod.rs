//! HTTP gateway translating REST calls into Backup/Restore operations.

pub mod envelope;
pub mod handlers;
pub mod wire;

use std::any::Any;
use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tracing::error;

use crate::crd::{Backup, Restore};
use crate::metrics::prometheus::MetricsState;
use crate::store::ResourceStore;

use self::envelope::Envelope;
use self::handlers::{create_object, delete_object, get_object, ping, KindState};
use self::wire::{BackupObject, RestoreObject, WireObject};

/// Build the gateway router.
///
/// Both stores are normally the same `KubeStore`, created once at startup and
/// shared by every request.
pub fn router(
    backups: Arc<dyn ResourceStore<Backup>>,
    restores: Arc<dyn ResourceStore<Restore>>,
    metrics: Arc<MetricsState>,
) -> Router {
    Router::new()
        .route("/ping", get(ping))
        .merge(kind_routes::<BackupObject>(KindState::new(
            backups,
            Arc::clone(&metrics),
        )))
        .merge(kind_routes::<RestoreObject>(KindState::new(restores, metrics)))
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
}

fn kind_routes<V: WireObject>(state: KindState<V>) -> Router {
    Router::new()
        .route(&format!("/{}", V::PLURAL), post(create_object::<V>))
        .route(
            &format!("/{}/{{namespace}}/{{name}}", V::PLURAL),
            get(get_object::<V>).delete(delete_object::<V>),
        )
        .with_state(state)
}

fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(panic = %detail, "Handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Envelope::fail("internal server error"),
    )
        .into_response()
}
