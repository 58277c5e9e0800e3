//! JSON shapes exchanged with HTTP callers.
//!
//! The wire objects carry only the identity fields of the Kubernetes metadata
//! plus the spec and status of the custom resource. `kind` and `apiVersion`
//! are passed through untouched.

use kube::{api::ObjectMeta, Resource};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::crd::{Backup, BackupSpec, BackupStatus, JobStatus, Restore, RestoreSpec, RestoreStatus};

/// Identity of an object on the wire
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObjectKey {
    pub name: String,
    pub namespace: String,
}

impl ObjectKey {
    fn from_meta(meta: &ObjectMeta) -> Self {
        Self {
            name: meta.name.clone().unwrap_or_default(),
            namespace: meta.namespace.clone().unwrap_or_default(),
        }
    }

    /// Empty fields stay unset rather than becoming `""` in the request
    fn to_meta(&self) -> ObjectMeta {
        ObjectMeta {
            name: non_empty(&self.name),
            namespace: non_empty(&self.namespace),
            ..ObjectMeta::default()
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Mapping between a wire object and the custom resource it stands for
pub trait WireObject: Serialize + DeserializeOwned + Send + Sync + 'static {
    type Resource: Resource<DynamicType = ()> + Send + Sync + 'static;

    /// Path segment and metrics label, e.g. `backups`
    const PLURAL: &'static str;

    fn from_resource(resource: Self::Resource) -> Self;

    /// Builds the object to submit. Any caller-supplied status is dropped.
    fn to_resource(&self) -> Self::Resource;

    /// Local feedback after a successful create; never written to the cluster
    fn mark_active(&mut self);
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct BackupObject {
    pub kind: String,
    pub api_version: String,
    pub metadata: ObjectKey,
    pub spec: BackupSpec,
    pub status: BackupStatus,
}

impl WireObject for BackupObject {
    type Resource = Backup;

    const PLURAL: &'static str = "backups";

    fn from_resource(backup: Backup) -> Self {
        Self {
            kind: Backup::kind(&()).into_owned(),
            api_version: Backup::api_version(&()).into_owned(),
            metadata: ObjectKey::from_meta(&backup.metadata),
            spec: backup.spec,
            status: backup.status.unwrap_or_default(),
        }
    }

    fn to_resource(&self) -> Backup {
        Backup {
            metadata: self.metadata.to_meta(),
            spec: self.spec.clone(),
            status: None,
        }
    }

    fn mark_active(&mut self) {
        self.status.status = Some(JobStatus::Active);
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RestoreObject {
    pub kind: String,
    pub api_version: String,
    pub metadata: ObjectKey,
    pub spec: RestoreSpec,
    pub status: RestoreStatus,
}

impl WireObject for RestoreObject {
    type Resource = Restore;

    const PLURAL: &'static str = "restores";

    fn from_resource(restore: Restore) -> Self {
        Self {
            kind: Restore::kind(&()).into_owned(),
            api_version: Restore::api_version(&()).into_owned(),
            metadata: ObjectKey::from_meta(&restore.metadata),
            spec: restore.spec,
            status: restore.status.unwrap_or_default(),
        }
    }

    fn to_resource(&self) -> Restore {
        Restore {
            metadata: self.metadata.to_meta(),
            spec: self.spec.clone(),
            status: None,
        }
    }

    fn mark_active(&mut self) {
        self.status.status = Some(JobStatus::Active);
    }
}
