//! tflock-patch: overwrite the Digest of a Terraform state lock record.
//!
//! This is the main entry point for the `tflock-patch` CLI. It parses
//! arguments, runs the single patch operation on a current-thread runtime,
//! and maps the outcome to an exit code.

mod cli;
mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod exit_codes;
pub mod lock_table;
mod logging;

#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    match commands::dispatch(cli).await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            commands::print_error(&err);
            ExitCode::from(err.exit_code() as u8)
        }
    }
}
