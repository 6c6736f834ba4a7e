//! Command implementations for tflock-patch.
//!
//! The CLI has a single operation; [`dispatch`] resolves the config, builds
//! the DynamoDB client and runs it (or its dry-run variant).

mod patch;

use crate::cli::Cli;
use crate::config::Config;
use crate::error::Result;
use crate::lock_table::DynamoLockTable;
use std::io;

pub use patch::print_error;

/// Dispatch the parsed command line to its implementation.
pub async fn dispatch(cli: Cli) -> Result<()> {
    let config = Config::resolve(cli.config.as_deref(), &cli.overrides())?;
    let mut stdout = io::stdout();

    if cli.dry_run {
        return patch::cmd_dry_run(&config, &mut stdout);
    }

    let table = DynamoLockTable::connect(&config).await;
    patch::cmd_patch(&table, &config, &mut stdout).await?;
    Ok(())
}
