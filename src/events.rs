//! Audit log for tflock-patch.
//!
//! Patching a lock digest bypasses Terraform's own bookkeeping, so every
//! attempt can be recorded in an append-only NDJSON file (one JSON object per
//! line) chosen with `--audit-log` or `audit_log` in the config file.
//!
//! # Event Format
//!
//! Each event is a JSON object with the following fields:
//! - `ts`: RFC3339 timestamp
//! - `action`: The action performed (`patch_digest`)
//! - `actor`: The owner string (e.g., `user@HOST`)
//! - `table`: The lock table name
//! - `lock_id`: The patched record's `LockID`
//! - `details`: Object with the digest, the outcome and, on failure, the
//!   failure kind and description

use crate::lock_table::{LockKey, RemoteFailureKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

/// Actions that can be logged as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    /// A digest update was sent to the lock table.
    PatchDigest,
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventAction::PatchDigest => write!(f, "patch_digest"),
        }
    }
}

/// An event record for the audit log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// RFC3339 timestamp when the event occurred.
    pub ts: DateTime<Utc>,

    /// The action that was performed.
    pub action: EventAction,

    /// The actor who performed the action (e.g., `user@HOST`).
    pub actor: String,

    /// Lock table name.
    pub table: String,

    /// `LockID` of the record.
    pub lock_id: String,

    /// Freeform details object with action-specific information.
    pub details: Value,
}

impl Event {
    /// Create a new event for the given record.
    ///
    /// The timestamp is set to the current time, and the actor is
    /// determined from the environment (USER@HOSTNAME).
    pub fn new(action: EventAction, key: &LockKey) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: get_actor_string(),
            table: key.table_name.clone(),
            lock_id: key.lock_id.clone(),
            details: Value::Object(serde_json::Map::new()),
        }
    }

    /// Event for a digest update the service accepted.
    pub fn patch_succeeded(key: &LockKey, digest: &str) -> Self {
        Self::new(EventAction::PatchDigest, key).with_details(json!({
            "digest": digest,
            "outcome": "succeeded",
        }))
    }

    /// Event for a digest update that failed.
    pub fn patch_failed(key: &LockKey, digest: &str, kind: RemoteFailureKind, error: &str) -> Self {
        Self::new(EventAction::PatchDigest, key).with_details(json!({
            "digest": digest,
            "outcome": "failed",
            "failure_kind": kind,
            "error": error,
        }))
    }

    /// Set the details object for this event.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Serialize the event to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Get the actor string for event metadata.
fn get_actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Append an event to the audit log at `path`.
///
/// The file and its parent directory are created if missing. Each call
/// writes exactly one line with a trailing newline.
pub fn append_event(path: &Path, event: &Event) -> io::Result<()> {
    let json_line = event.to_ndjson_line()?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{}", json_line)?;
    file.sync_all()
}

/// Read all events from an audit log.
///
/// Blank lines are skipped; a malformed line is an error.
#[cfg(test)]
pub fn read_events(path: &Path) -> io::Result<Vec<Event>> {
    let content = fs::read_to_string(path)?;
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).map_err(io::Error::from))
        .collect()
}
