use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::Bytes,
    extract::{Path, State},
};
use kube::Resource;
use tracing::{error, info, instrument, warn};

use crate::error::{Error, Result};
use crate::metrics::prometheus::MetricsState;
use crate::store::ResourceStore;

use super::envelope::Envelope;
use super::wire::WireObject;

/// Resources are removed immediately; the controller copes with interrupted jobs.
pub const DELETE_GRACE_PERIOD_SECONDS: u32 = 0;

/// Router state for one resource kind
pub struct KindState<V: WireObject> {
    pub store: Arc<dyn ResourceStore<V::Resource>>,
    pub metrics: Arc<MetricsState>,
}

impl<V: WireObject> Clone for KindState<V> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            metrics: Arc::clone(&self.metrics),
        }
    }
}

impl<V: WireObject> KindState<V> {
    pub fn new(store: Arc<dyn ResourceStore<V::Resource>>, metrics: Arc<MetricsState>) -> Self {
        Self { store, metrics }
    }

    fn observe(&self, operation: &str, started: Instant, error: Option<&Error>) {
        let outcome = match error {
            None => "success",
            Some(e) if e.is_not_found() => "not_found",
            Some(Error::InvalidBody(_)) => "invalid",
            Some(_) => "error",
        };
        self.metrics
            .record_request(V::PLURAL, operation, outcome, started.elapsed());
    }
}

fn log_failure(kind: &str, operation: &str, namespace: &str, name: &str, err: &Error) {
    let reason = err.reason();
    if err.is_not_found() {
        warn!(%kind, %operation, %namespace, %name, %reason, "Resource not found");
    } else {
        error!(%kind, %operation, %namespace, %name, %reason, error = %err, "Request failed");
    }
}

pub async fn ping() -> Envelope<&'static str> {
    Envelope::success("pong")
}

/// GET /{kind}s/{namespace}/{name}
#[instrument(skip(state), fields(kind = V::PLURAL))]
pub async fn get_object<V: WireObject>(
    State(state): State<KindState<V>>,
    Path((namespace, name)): Path<(String, String)>,
) -> Result<Envelope<V>> {
    let started = Instant::now();
    let result = state.store.get(&namespace, &name).await;
    state.observe("get", started, result.as_ref().err());

    match result {
        Ok(resource) => Ok(Envelope::success(V::from_resource(resource))),
        Err(e) => {
            log_failure(V::PLURAL, "get", &namespace, &name, &e);
            Err(e)
        }
    }
}

/// POST /{kind}s
///
/// The body is decoded by hand so callers that omit `Content-Type` still work.
#[instrument(skip_all, fields(kind = V::PLURAL))]
pub async fn create_object<V: WireObject>(
    State(state): State<KindState<V>>,
    body: Bytes,
) -> Result<Envelope<V>> {
    let started = Instant::now();
    let mut object = match serde_json::from_slice::<V>(&body) {
        Ok(object) => object,
        Err(e) => {
            warn!(kind = V::PLURAL, error = %e, "Rejected malformed request body");
            let err = Error::InvalidBody(e.to_string());
            state.observe("create", started, Some(&err));
            return Err(err);
        }
    };

    let resource = object.to_resource();
    let result = state.store.create(&resource).await;
    state.observe("create", started, result.as_ref().err());

    let namespace = resource.meta().namespace.clone().unwrap_or_default();
    let name = resource.meta().name.clone().unwrap_or_default();
    if let Err(e) = result {
        log_failure(V::PLURAL, "create", &namespace, &name, &e);
        return Err(e);
    }
    info!(kind = V::PLURAL, %namespace, %name, "Created resource");

    object.mark_active();
    Ok(Envelope::success(object))
}

/// DELETE /{kind}s/{namespace}/{name}
#[instrument(skip(state), fields(kind = V::PLURAL))]
pub async fn delete_object<V: WireObject>(
    State(state): State<KindState<V>>,
    Path((namespace, name)): Path<(String, String)>,
) -> Result<Envelope<()>> {
    let started = Instant::now();
    let result = async {
        let resource = state.store.get(&namespace, &name).await?;
        state
            .store
            .delete(&resource, DELETE_GRACE_PERIOD_SECONDS)
            .await
    }
    .await;
    state.observe("delete", started, result.as_ref().err());

    match result {
        Ok(()) => {
            info!(kind = V::PLURAL, %namespace, %name, "Deleted resource");
            Ok(Envelope::empty())
        }
        Err(e) => {
            log_failure(V::PLURAL, "delete", &namespace, &name, &e);
            Err(e)
        }
    }
}
