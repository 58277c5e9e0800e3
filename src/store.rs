//! Access to the cluster resource store.
//!
//! Handlers talk to the API server through [`ResourceStore`] so the HTTP layer
//! can be exercised without a cluster. [`KubeStore`] is the production
//! implementation on top of a shared `kube::Client`.

use std::fmt::Debug;

use async_trait::async_trait;
use k8s_openapi::NamespaceResourceScope;
use kube::{
    api::{Api, DeleteParams, PostParams},
    Client, Resource, ResourceExt,
};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::error::{Error, Result};

/// Typed get/create/delete over one namespaced resource kind
#[async_trait]
pub trait ResourceStore<K>: Send + Sync {
    /// Fetch the object stored under `namespace/name`
    async fn get(&self, namespace: &str, name: &str) -> Result<K>;

    /// Create `resource` in the namespace named by its metadata
    async fn create(&self, resource: &K) -> Result<K>;

    /// Delete `resource`, allowing `grace_period_seconds` for finalization
    async fn delete(&self, resource: &K, grace_period_seconds: u32) -> Result<()>;
}

/// Store backed by the Kubernetes API server
#[derive(Clone)]
pub struct KubeStore {
    client: Client,
}

impl KubeStore {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<K> ResourceStore<K> for KubeStore
where
    K: Resource<Scope = NamespaceResourceScope, DynamicType = ()>
        + Clone
        + Debug
        + DeserializeOwned
        + Serialize
        + Send
        + Sync
        + 'static,
{
    async fn get(&self, namespace: &str, name: &str) -> Result<K> {
        let api: Api<K> = Api::namespaced(self.client.clone(), namespace);
        api.get(name)
            .await
            .map_err(|e| classify::<K>(e, namespace, name))
    }

    async fn create(&self, resource: &K) -> Result<K> {
        let namespace = resource.namespace().unwrap_or_default();
        let api: Api<K> = Api::namespaced(self.client.clone(), &namespace);
        let created = api.create(&PostParams::default(), resource).await?;
        debug!(kind = %K::kind(&()), name = %created.name_any(), %namespace, "Created resource");
        Ok(created)
    }

    async fn delete(&self, resource: &K, grace_period_seconds: u32) -> Result<()> {
        let name = resource.name_any();
        let namespace = resource.namespace().unwrap_or_default();
        let api: Api<K> = Api::namespaced(self.client.clone(), &namespace);
        let params = DeleteParams {
            grace_period_seconds: Some(grace_period_seconds),
            ..DeleteParams::default()
        };
        api.delete(&name, &params)
            .await
            .map_err(|e| classify::<K>(e, &namespace, &name))?;
        Ok(())
    }
}

/// Split API-server 404s out of the generic client error
fn classify<K>(error: kube::Error, namespace: &str, name: &str) -> Error
where
    K: Resource<DynamicType = ()>,
{
    match error {
        kube::Error::Api(response) if response.code == 404 => Error::NotFound {
            kind: K::kind(&()).into_owned(),
            namespace: namespace.to_string(),
            name: name.to_string(),
        },
        other => Error::Kube(other),
    }
}
