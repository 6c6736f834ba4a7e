//! Exit code constants for the tflock-patch CLI.
//!
//! - 0: Success (digest updated, or dry run rendered)
//! - 1: Remote operation failure (any error from the update call)
//! - 2: Configuration error (bad config file or invalid values)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// The update call to the lock table failed.
pub const REMOTE_FAILURE: i32 = 1;

/// Configuration could not be loaded or failed validation.
///
/// Matches the code clap uses for usage errors.
pub const CONFIG_ERROR: i32 = 2;
