//! Lock record keys, update requests and failure descriptions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Primary key attribute of a lock record.
pub const LOCK_ID_ATTRIBUTE: &str = "LockID";

/// Attribute holding the state checksum.
pub const DIGEST_ATTRIBUTE: &str = "Digest";

/// Expression value placeholder bound to the new digest.
pub const DIGEST_PLACEHOLDER: &str = ":digest";

/// Identifies one lock record: the table it lives in and its `LockID`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockKey {
    /// Name of the DynamoDB table.
    pub table_name: String,

    /// Value of the `LockID` primary key.
    pub lock_id: String,
}

impl LockKey {
    pub fn new(table_name: impl Into<String>, lock_id: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            lock_id: lock_id.into(),
        }
    }
}

impl std::fmt::Display for LockKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}={}]", self.table_name, LOCK_ID_ATTRIBUTE, self.lock_id)
    }
}

/// A request to overwrite the `Digest` of one lock record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestUpdate {
    /// The record to patch.
    pub key: LockKey,

    /// The digest value to store.
    pub digest: String,
}

impl DigestUpdate {
    pub fn new(key: LockKey, digest: impl Into<String>) -> Self {
        Self {
            key,
            digest: digest.into(),
        }
    }

    /// The update expression sent with the request.
    ///
    /// Assigns `Digest` and nothing else.
    pub fn update_expression(&self) -> String {
        format!("SET {} = {}", DIGEST_ATTRIBUTE, DIGEST_PLACEHOLDER)
    }
}

/// Coarse category of a failed remote call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemoteFailureKind {
    /// Credentials were rejected or lack permission for the table.
    AccessDenied,
    /// The table does not exist in the selected region.
    TableNotFound,
    /// The request did not complete in time.
    Timeout,
    /// The request could not be delivered (DNS, connection, TLS, ...).
    Transport,
    /// The service answered with any other error.
    Service,
    /// The request could not be built or the response could not be read.
    Other,
}

impl RemoteFailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RemoteFailureKind::AccessDenied => "access_denied",
            RemoteFailureKind::TableNotFound => "table_not_found",
            RemoteFailureKind::Timeout => "timeout",
            RemoteFailureKind::Transport => "transport",
            RemoteFailureKind::Service => "service",
            RemoteFailureKind::Other => "other",
        }
    }
}

impl std::fmt::Display for RemoteFailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A failed call against the lock table.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct RemoteFailure {
    /// Category of the failure.
    pub kind: RemoteFailureKind,

    /// Human-readable description, including the error's source chain.
    pub message: String,
}

impl RemoteFailure {
    pub fn new(kind: RemoteFailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}
