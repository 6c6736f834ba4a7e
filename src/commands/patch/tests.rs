//! Tests for the patch command.

use super::report::write_error;
use super::*;
use crate::events::read_events;
use crate::exit_codes;
use crate::lock_table::{LockKey, RemoteFailureKind};
use crate::test_support::FakeLockTable;
use tempfile::TempDir;

fn output_of(buf: Vec<u8>) -> String {
    String::from_utf8(buf).unwrap()
}

#[tokio::test]
async fn test_success_reports_table_key_and_digest() {
    let table = FakeLockTable::accepting();
    let config = Config::default();
    let mut out = Vec::new();

    let report = cmd_patch(&table, &config, &mut out).await.unwrap();

    let output = output_of(out);
    assert!(output.starts_with("✅"));
    assert!(output.contains("Successfully updated DynamoDB lock"));
    assert!(output.contains(&format!("Table: {}", config.table_name)));
    assert!(output.contains(&format!("LockID: {}", config.lock_id)));
    assert!(output.contains(&format!("New Digest: {}", config.digest)));
    assert_eq!(report.digest, config.digest);
}

#[tokio::test]
async fn test_success_sends_exactly_one_request() {
    let table = FakeLockTable::accepting();
    let config = Config::default();

    cmd_patch(&table, &config, &mut Vec::new()).await.unwrap();

    let requests = table.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].key,
        LockKey::new(&config.table_name, &config.lock_id)
    );
    assert_eq!(requests[0].digest, config.digest);
    assert_eq!(requests[0].update_expression(), "SET Digest = :digest");
}

#[tokio::test]
async fn test_access_denied_exits_one_with_description() {
    let table = FakeLockTable::failing(RemoteFailureKind::AccessDenied, "access denied");
    let mut out = Vec::new();

    let err = cmd_patch(&table, &Config::default(), &mut out)
        .await
        .unwrap_err();

    // No success report on failure
    assert!(out.is_empty());
    assert_eq!(err.exit_code(), exit_codes::REMOTE_FAILURE);

    let mut report = Vec::new();
    write_error(&mut report, &err).unwrap();
    let report = output_of(report);
    assert!(report.starts_with("❌ Error updating DynamoDB: "));
    assert!(report.contains("access denied"));
    assert_eq!(report.lines().count(), 1);
}

#[tokio::test]
async fn test_timeout_exits_one_with_description() {
    let table = FakeLockTable::failing(
        RemoteFailureKind::Timeout,
        "request has timed out: connect timeout after 3.1s",
    );

    let err = cmd_patch(&table, &Config::default(), &mut Vec::new())
        .await
        .unwrap_err();

    assert_eq!(err.exit_code(), 1);
    let mut report = Vec::new();
    write_error(&mut report, &err).unwrap();
    assert!(output_of(report).contains("connect timeout after 3.1s"));
}

#[tokio::test]
async fn test_failure_still_sends_exactly_one_request() {
    let table = FakeLockTable::failing(RemoteFailureKind::Transport, "dispatch failure");

    let _ = cmd_patch(&table, &Config::default(), &mut Vec::new()).await;

    assert_eq!(table.requests().len(), 1);
}

#[tokio::test]
async fn test_failure_kind_is_preserved() {
    let table = FakeLockTable::failing(RemoteFailureKind::TableNotFound, "table missing");

    let err = patch_digest(&table, &Config::default().digest_update())
        .await
        .unwrap_err();

    match err {
        PatchError::RemoteOperationFailed { kind, message } => {
            assert_eq!(kind, RemoteFailureKind::TableNotFound);
            assert_eq!(message, "table missing");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_configured_target_is_used() {
    let table = FakeLockTable::accepting();
    let config = Config {
        table_name: "other-locks".to_string(),
        lock_id: "bucket/prod/terraform.tfstate-md5".to_string(),
        digest: "ffffffffffffffffffffffffffffffff".to_string(),
        ..Config::default()
    };

    let report = cmd_patch(&table, &config, &mut Vec::new()).await.unwrap();

    assert_eq!(report.table_name, "other-locks");
    assert_eq!(report.lock_id, "bucket/prod/terraform.tfstate-md5");
    assert_eq!(table.requests()[0].key.table_name, "other-locks");
}

#[tokio::test]
async fn test_audit_log_records_success() {
    let temp_dir = TempDir::new().unwrap();
    let audit_log = temp_dir.path().join("audit.ndjson");
    let config = Config {
        audit_log: Some(audit_log.clone()),
        ..Config::default()
    };

    cmd_patch(&FakeLockTable::accepting(), &config, &mut Vec::new())
        .await
        .unwrap();

    let events = read_events(&audit_log).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].table, config.table_name);
    assert_eq!(events[0].lock_id, config.lock_id);
    assert_eq!(events[0].details["outcome"], "succeeded");
    assert_eq!(events[0].details["digest"], config.digest.as_str());
}

#[tokio::test]
async fn test_audit_log_records_failure() {
    let temp_dir = TempDir::new().unwrap();
    let audit_log = temp_dir.path().join("audit.ndjson");
    let config = Config {
        audit_log: Some(audit_log.clone()),
        ..Config::default()
    };
    let table = FakeLockTable::failing(RemoteFailureKind::AccessDenied, "access denied");

    let _ = cmd_patch(&table, &config, &mut Vec::new()).await;

    let events = read_events(&audit_log).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].details["outcome"], "failed");
    assert_eq!(events[0].details["failure_kind"], "access_denied");
    assert_eq!(events[0].details["error"], "access denied");
}

#[tokio::test]
async fn test_audit_log_failure_does_not_change_outcome() {
    let temp_dir = TempDir::new().unwrap();
    // A directory cannot be opened for appending
    let config = Config {
        audit_log: Some(temp_dir.path().to_path_buf()),
        ..Config::default()
    };

    let result = cmd_patch(&FakeLockTable::accepting(), &config, &mut Vec::new()).await;

    assert!(result.is_ok());
}

#[test]
fn test_dry_run_describes_request_without_sending() {
    let config = Config {
        endpoint_url: Some("http://localhost:8000".to_string()),
        ..Config::default()
    };
    let mut out = Vec::new();

    cmd_dry_run(&config, &mut out).unwrap();

    let output = output_of(out);
    assert!(output.starts_with("Dry run: no request sent"));
    assert!(output.contains("Region: ap-south-1"));
    assert!(output.contains("Endpoint: http://localhost:8000"));
    assert!(output.contains(&format!("LockID: {}", config.lock_id)));
    assert!(output.contains("UpdateExpression: SET Digest = :digest"));
    assert!(output.contains(&format!(":digest = {}", config.digest)));
}

#[test]
fn test_config_error_report_shape() {
    let err = PatchError::ConfigError("digest must not be empty".to_string());
    let mut out = Vec::new();

    write_error(&mut out, &err).unwrap();

    assert_eq!(output_of(out), "Error: digest must not be empty\n");
}
