use chrono::{DateTime, Utc};
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::common::{is_zero, Action, DeployMethod, JobStatus, PullPolicy};

/// Backup asks the chain node controller to snapshot the data of one node.
/// The gateway only creates, reads and deletes these objects; the controller
/// runs the job and owns `.status`.
#[derive(CustomResource, Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[kube(
    group = "citacloud.rivtower.com",
    version = "v1",
    kind = "Backup",
    plural = "backups",
    status = "BackupStatus",
    namespaced,
    printcolumn = r#"{"name":"Chain","type":"string","jsonPath":".spec.chain"}"#,
    printcolumn = r#"{"name":"Node","type":"string","jsonPath":".spec.node"}"#,
    printcolumn = r#"{"name":"Status","type":"string","jsonPath":".status.status"}"#,
    printcolumn = r#"{"name":"Age","type":"date","jsonPath":".metadata.creationTimestamp"}"#
)]
#[serde(default, rename_all = "camelCase")]
pub struct BackupSpec {
    /// Name of the chain the node belongs to
    pub chain: String,

    /// Namespace the chain is deployed in
    #[serde(skip_serializing_if = "String::is_empty")]
    pub namespace: String,

    /// Name of the node to back up
    pub node: String,

    /// How the chain was deployed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deploy_method: Option<DeployMethod>,

    /// Storage class for the backup volume
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_class: Option<String>,

    /// Whether the node is stopped while the backup runs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,

    /// Container image for the backup job
    #[serde(skip_serializing_if = "String::is_empty")]
    pub image: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_policy: Option<PullPolicy>,
}

/// Status of a Backup, written by the controller
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct BackupStatus {
    /// Bytes requested for the backup volume
    #[serde(skip_serializing_if = "is_zero")]
    pub allocate: i64,

    /// Bytes the backup actually used
    #[serde(skip_serializing_if = "is_zero")]
    pub actual: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
}
