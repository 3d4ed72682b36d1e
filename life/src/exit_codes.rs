//! Stable exit codes for life CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Command failed due to invalid config, unreadable input/output, or other errors.
pub const INVALID: i32 = 1;
/// `life run` input did not start with the configured header.
pub const BAD_HEADER: i32 = 2;
