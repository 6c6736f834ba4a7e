//! Lock table access for tflock-patch.
//!
//! A lock table is the DynamoDB table Terraform's S3 backend uses for state
//! locking. Each item is keyed by `LockID` and may carry a `Digest` attribute
//! holding the MD5 checksum of the state file at its last successful write.
//!
//! # Capability
//!
//! The patch command never talks to DynamoDB directly. It receives a
//! [`LockTable`] implementation, so the real client ([`DynamoLockTable`]) can
//! be swapped for a recording fake in tests.
//!
//! # Failures
//!
//! Every failed call is reported as a [`RemoteFailure`]. The attached
//! [`RemoteFailureKind`] is informational; all kinds exit the same way.

mod dynamo;
mod types;


use async_trait::async_trait;

// Re-export public API
pub use dynamo::{DynamoLockTable, classify_error_code};
pub use types::{
    DIGEST_ATTRIBUTE, DIGEST_PLACEHOLDER, DigestUpdate, LOCK_ID_ATTRIBUTE, LockKey, RemoteFailure,
    RemoteFailureKind,
};

/// A remote table holding lock records.
#[async_trait]
pub trait LockTable: Send + Sync {
    /// Unconditionally overwrite the `Digest` attribute of one lock record.
    ///
    /// Exactly one request is issued. No other attribute is read or written.
    async fn update_digest(&self, update: &DigestUpdate) -> Result<(), RemoteFailure>;
}
