//! Console rendering of patch outcomes.

use crate::config::Config;
use crate::error::PatchError;
use crate::lock_table::{DIGEST_PLACEHOLDER, DigestUpdate};
use std::io::{self, Write};

/// What a successful patch wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchReport {
    pub table_name: String,
    pub lock_id: String,
    pub digest: String,
}

impl From<&DigestUpdate> for PatchReport {
    fn from(update: &DigestUpdate) -> Self {
        Self {
            table_name: update.key.table_name.clone(),
            lock_id: update.key.lock_id.clone(),
            digest: update.digest.clone(),
        }
    }
}

/// Write the multi-line success report.
pub fn write_success<W: Write>(out: &mut W, report: &PatchReport) -> io::Result<()> {
    writeln!(out, "✅ Successfully updated DynamoDB lock")?;
    writeln!(out, "   Table: {}", report.table_name)?;
    writeln!(out, "   LockID: {}", report.lock_id)?;
    writeln!(out, "   New Digest: {}", report.digest)
}

/// Write the one-line report for `err`.
pub fn write_error<W: Write>(out: &mut W, err: &PatchError) -> io::Result<()> {
    match err {
        PatchError::RemoteOperationFailed { .. } => {
            writeln!(out, "❌ Error updating DynamoDB: {}", err)
        }
        PatchError::ConfigError(_) => writeln!(out, "Error: {}", err),
    }
}

/// Print `err` where the user expects it: remote failures on stdout next to
/// the success report they replace, everything else on stderr.
pub fn print_error(err: &PatchError) {
    let result = match err {
        PatchError::RemoteOperationFailed { .. } => write_error(&mut io::stdout(), err),
        PatchError::ConfigError(_) => write_error(&mut io::stderr(), err),
    };

    if let Err(e) = result {
        eprintln!("Warning: failed to write error report: {}", e);
    }
}

/// Write the request a real run would send.
pub fn write_dry_run<W: Write>(
    out: &mut W,
    config: &Config,
    update: &DigestUpdate,
) -> io::Result<()> {
    writeln!(out, "Dry run: no request sent")?;
    writeln!(out, "   Region: {}", config.region)?;
    if let Some(endpoint_url) = &config.endpoint_url {
        writeln!(out, "   Endpoint: {}", endpoint_url)?;
    }
    writeln!(out, "   Table: {}", update.key.table_name)?;
    writeln!(out, "   LockID: {}", update.key.lock_id)?;
    writeln!(out, "   UpdateExpression: {}", update.update_expression())?;
    writeln!(out, "   {} = {}", DIGEST_PLACEHOLDER, update.digest)
}
