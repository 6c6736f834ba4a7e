//! CLI argument parsing for tflock-patch.
//!
//! Uses clap derive macros for declarative argument definitions. Every flag
//! is optional; with no arguments the built-in target record is patched.

use crate::config::ConfigOverrides;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// tflock-patch: overwrite the Digest of a Terraform state lock record.
///
/// Sends one unconditional DynamoDB UpdateItem that sets `Digest` on the
/// record identified by `LockID`. Use it to clear a "state data in S3 does
/// not have the expected content" mismatch once the correct checksum is known.
#[derive(Parser, Debug)]
#[command(name = "tflock-patch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// YAML file with region, table_name, lock_id, digest and connection settings.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// AWS region of the lock table.
    #[arg(long)]
    pub region: Option<String>,

    /// Name of the lock table.
    #[arg(long = "table")]
    pub table_name: Option<String>,

    /// LockID of the record to patch.
    #[arg(long)]
    pub lock_id: Option<String>,

    /// Digest to store (32 hex characters).
    #[arg(long)]
    pub digest: Option<String>,

    /// Custom DynamoDB endpoint (e.g. http://localhost:8000 for DynamoDB Local).
    #[arg(long, value_name = "URL")]
    pub endpoint_url: Option<String>,

    /// Named AWS profile to load credentials from.
    #[arg(long)]
    pub profile: Option<String>,

    /// Append an NDJSON audit record of the attempt to this file.
    #[arg(long, value_name = "FILE")]
    pub audit_log: Option<PathBuf>,

    /// Print the request without sending it.
    #[arg(long)]
    pub dry_run: bool,

    /// Increase diagnostic output on stderr (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The config values given as flags.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            region: self.region.clone(),
            table_name: self.table_name.clone(),
            lock_id: self.lock_id.clone(),
            digest: self.digest.clone(),
            endpoint_url: self.endpoint_url.clone(),
            profile: self.profile.clone(),
            audit_log: self.audit_log.clone(),
        }
    }
}
