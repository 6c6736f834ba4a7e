//! Config struct definition and default implementation.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// AWS region holding the lock table.
pub(super) const DEFAULT_REGION: &str = "ap-south-1";

/// Table Terraform uses for state locking.
pub(super) const DEFAULT_TABLE_NAME: &str = "terraform-locks";

/// Lock record whose digest is patched.
pub(super) const DEFAULT_LOCK_ID: &str =
    "terraform-state-srilatha-001/alb-ec2-docker/terraform.tfstate";

/// Checksum of the known-good state file.
pub(super) const DEFAULT_DIGEST: &str = "5a819c5cee6266128ac320322927dec0";

/// Configuration for one patch run.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Target record
    // =========================================================================
    /// AWS region of the lock table.
    pub region: String,

    /// Name of the lock table.
    pub table_name: String,

    /// `LockID` of the record to patch.
    pub lock_id: String,

    /// Digest value to store (32 hex characters).
    pub digest: String,

    // =========================================================================
    // Connection settings
    // =========================================================================
    /// Custom DynamoDB endpoint, e.g. DynamoDB Local.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_url: Option<String>,

    /// Named profile from the shared AWS config files.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    // =========================================================================
    // Audit settings
    // =========================================================================
    /// NDJSON file that receives one line per patch attempt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audit_log: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            region: DEFAULT_REGION.to_string(),
            table_name: DEFAULT_TABLE_NAME.to_string(),
            lock_id: DEFAULT_LOCK_ID.to_string(),
            digest: DEFAULT_DIGEST.to_string(),
            endpoint_url: None,
            profile: None,
            audit_log: None,
        }
    }
}

/// Values supplied on the command line.
///
/// `None` leaves the underlying config value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub region: Option<String>,
    pub table_name: Option<String>,
    pub lock_id: Option<String>,
    pub digest: Option<String>,
    pub endpoint_url: Option<String>,
    pub profile: Option<String>,
    pub audit_log: Option<PathBuf>,
}
