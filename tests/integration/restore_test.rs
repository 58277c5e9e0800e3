mod common;

use assert_json_diff::{assert_json_eq, assert_json_include};
use axum::http::StatusCode;
use chrono::{TimeZone, Utc};
use serde_json::{json, Value};

use chain_backup_gateway::crd::{Action, JobStatus, Restore, RestoreSpec, RestoreStatus};

use common::{send, test_gateway};

fn restore_body() -> Value {
    json!({
        "metadata": {"name": "r1", "namespace": "ns1"},
        "spec": {
            "chain": "test-chain",
            "node": "test-chain-node1",
            "deployMethod": "helm",
            "backup": "nightly",
            "action": "Direct",
            "image": "registry.devops.rivtower.com/cita-cloud/cita-node-job:v0.0.2",
            "pullPolicy": "Always"
        }
    })
}

#[tokio::test]
async fn test_restore_lifecycle() {
    let gw = test_gateway();
    let submitted = restore_body();

    let (status, body) = send(&gw.router, "POST", "/restores", Some(&submitted.to_string())).await;
    assert_eq!(status, StatusCode::OK);
    assert_json_include!(
        actual: body,
        expected: json!({
            "msg": null,
            "status": "success",
            "data": {
                "metadata": {"name": "r1", "namespace": "ns1"},
                "status": {"status": "active"}
            }
        })
    );

    let stored = gw.restores.stored("ns1", "r1").expect("restore created");
    assert_eq!(stored.spec.backup, "nightly");
    assert_eq!(stored.spec.action, Some(Action::Direct));

    let (status, body) = send(&gw.router, "GET", "/restores/ns1/r1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["kind"], "Restore");
    assert_json_eq!(body["data"]["spec"], submitted["spec"]);

    let (status, body) = send(&gw.router, "DELETE", "/restores/ns1/r1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], Value::Null);
    assert_eq!(gw.restores.deletes()[0].1, 0);

    let (status, body) = send(&gw.router, "GET", "/restores/ns1/r1", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["msg"],
        "Restore 'r1' not found in namespace 'ns1'"
    );
}

#[tokio::test]
async fn test_restore_status_has_no_backup_fields() {
    let gw = test_gateway();
    let mut restore = Restore::new(
        "r2",
        RestoreSpec {
            chain: "c1".to_string(),
            node: "n1".to_string(),
            backup: "b1".to_string(),
            ..RestoreSpec::default()
        },
    );
    restore.metadata.namespace = Some("ns1".to_string());
    restore.status = Some(RestoreStatus {
        status: Some(JobStatus::Failed),
        start_time: Some(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()),
        end_time: None,
    });
    gw.restores.insert(restore);

    let (status, body) = send(&gw.router, "GET", "/restores/ns1/r2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_json_eq!(
        body["data"]["status"],
        json!({"status": "failed", "startTime": "2024-06-01T00:00:00Z"})
    );
}

#[tokio::test]
async fn test_backups_and_restores_are_separate() {
    let gw = test_gateway();
    send(&gw.router, "POST", "/restores", Some(&restore_body().to_string())).await;

    let (status, _) = send(&gw.router, "GET", "/backups/ns1/r1", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(gw.backups.len(), 0);
    assert_eq!(gw.restores.len(), 1);
}

#[tokio::test]
async fn test_restore_malformed_json() {
    let gw = test_gateway();
    let (status, body) = send(&gw.router, "POST", "/restores", Some("not json")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "fail");
}

#[tokio::test]
async fn test_second_delete_fails() {
    let gw = test_gateway();
    let mut restore = Restore::new("r3", RestoreSpec::default());
    restore.metadata.namespace = Some("ns1".to_string());
    gw.restores.insert(restore);

    let (status, _) = send(&gw.router, "DELETE", "/restores/ns1/r3", None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, body) = send(&gw.router, "DELETE", "/restores/ns1/r3", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], "fail");
    assert_eq!(gw.restores.deletes().len(), 1);
}
