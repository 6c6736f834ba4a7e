//! Implementation of the digest patch command.
//!
//! Overwrites the `Digest` attribute of one lock record and reports the
//! outcome. The operation has two terminal states and no retries.
//!
//! # Steps
//!
//! 1. Build the update request from the resolved config
//! 2. Send exactly one UpdateItem call through the injected [`LockTable`]
//! 3. Append an audit event (if an audit log is configured)
//! 4. Print the success report; failures propagate to `main`
//!
//! # Exit Codes
//!
//! - 0: The service accepted the update
//! - 1: The update call failed for any reason

mod report;

#[cfg(test)]
mod tests;

use crate::config::Config;
use crate::error::{PatchError, Result};
use crate::events::{Event, append_event};
use crate::lock_table::{DigestUpdate, LockTable};
use std::io::Write;
use tracing::{debug, info, warn};

pub use report::{PatchReport, print_error, write_dry_run, write_success};

/// Send one digest update and return what was written.
///
/// The remote call is issued exactly once, whatever its outcome.
pub async fn patch_digest(table: &dyn LockTable, update: &DigestUpdate) -> Result<PatchReport> {
    table.update_digest(update).await?;
    Ok(PatchReport::from(update))
}

/// Execute the patch command against `table` and print the report to `out`.
pub async fn cmd_patch<W: Write>(
    table: &dyn LockTable,
    config: &Config,
    out: &mut W,
) -> Result<PatchReport> {
    let update = config.digest_update();

    info!(
        region = %config.region,
        table = %update.key.table_name,
        lock_id = %update.key.lock_id,
        "updating lock digest"
    );
    debug!(
        expression = %update.update_expression(),
        digest = %update.digest,
        "update request"
    );

    let result = patch_digest(table, &update).await;

    match &result {
        Ok(report) => {
            info!(key = %update.key, "lock digest updated");
            if let Err(e) = write_success(out, report) {
                warn!("failed to write report: {}", e);
            }
        }
        Err(PatchError::RemoteOperationFailed { kind, message }) => {
            warn!(key = %update.key, kind = %kind, "lock digest update failed: {}", message);
        }
        Err(_) => {}
    }

    if let Some(path) = &config.audit_log {
        record_attempt(path, &update, &result);
    }

    result
}

/// Execute the patch command in dry-run mode: print the request, send nothing.
pub fn cmd_dry_run<W: Write>(config: &Config, out: &mut W) -> Result<()> {
    let update = config.digest_update();
    info!(key = %update.key, "dry run, no request sent");

    write_dry_run(out, config, &update)
        .map_err(|e| PatchError::ConfigError(format!("failed to write dry-run report: {}", e)))
}

/// Append the attempt to the audit log.
///
/// The remote call has already happened, so a write failure only warns.
fn record_attempt(path: &std::path::Path, update: &DigestUpdate, result: &Result<PatchReport>) {
    let event = match result {
        Ok(_) => Event::patch_succeeded(&update.key, &update.digest),
        Err(PatchError::RemoteOperationFailed { kind, message }) => {
            Event::patch_failed(&update.key, &update.digest, *kind, message)
        }
        Err(_) => return,
    };

    if let Err(e) = append_event(path, &event) {
        eprintln!(
            "Warning: failed to write audit log '{}': {}",
            path.display(),
            e
        );
    }
}
