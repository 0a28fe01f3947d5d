//! Error handlers
//!
//! Logs fatal errors and maps errors to process exit codes.

use crate::error::types::CredStoreError;
use log::{error, info};

/// Exit code for a failed authentication
pub const EXIT_AUTH_FAILURE: u8 = 1;

/// Exit code for store, configuration, and input failures
pub const EXIT_FATAL: u8 = 2;

/// Handle a credential store error
pub fn handle_error(err: &CredStoreError) {
    match err {
        CredStoreError::Auth(e) => info!("Authentication failed for '{}': {}", e.username(), e),
        _ => error!("{}", err),
    }
}

/// Convert error to process exit code
pub fn error_to_exit_code(err: &CredStoreError) -> u8 {
    match err {
        CredStoreError::Auth(_) => EXIT_AUTH_FAILURE,
        CredStoreError::Store(_) => EXIT_FATAL,
        CredStoreError::Config(_) => EXIT_FATAL,
        CredStoreError::Input(_) => EXIT_FATAL,
    }
}
