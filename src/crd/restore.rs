use chrono::{DateTime, Utc};
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{Action, DeployMethod, JobStatus, PullPolicy};

/// Restore asks the chain node controller to load a previous Backup into a node.
#[derive(CustomResource, Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[kube(
    group = "citacloud.rivtower.com",
    version = "v1",
    kind = "Restore",
    plural = "restores",
    status = "RestoreStatus",
    namespaced,
    printcolumn = r#"{"name":"Chain","type":"string","jsonPath":".spec.chain"}"#,
    printcolumn = r#"{"name":"Node","type":"string","jsonPath":".spec.node"}"#,
    printcolumn = r#"{"name":"Backup","type":"string","jsonPath":".spec.backup"}"#,
    printcolumn = r#"{"name":"Status","type":"string","jsonPath":".status.status"}"#,
    printcolumn = r#"{"name":"Age","type":"date","jsonPath":".metadata.creationTimestamp"}"#
)]
#[serde(default, rename_all = "camelCase")]
pub struct RestoreSpec {
    /// Name of the chain the node belongs to
    pub chain: String,

    /// Namespace the chain is deployed in
    #[serde(skip_serializing_if = "String::is_empty")]
    pub namespace: String,

    /// Name of the node to restore into
    pub node: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub deploy_method: Option<DeployMethod>,

    /// Name of the Backup to restore from
    pub backup: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,

    /// Container image for the restore job
    #[serde(skip_serializing_if = "String::is_empty")]
    pub image: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_policy: Option<PullPolicy>,
}

/// Status of a Restore, written by the controller
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RestoreStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
}
