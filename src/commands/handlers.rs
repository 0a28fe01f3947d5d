//! Command handlers
//!
//! One handler per binary: load, run the operation, report.

use log::{info, warn};

use super::parser::{parse_login, parse_register};
use crate::auth::{self, AuthSuccess};
use crate::error::CredStoreError;
use crate::storage::{StoreRepository, UserRecord};

/// Handle a register line: `<username> <password> <role>`
pub fn handle_register<R: StoreRepository + ?Sized>(
    repo: &R,
    line: &str,
) -> Result<UserRecord, CredStoreError> {
    let request = parse_register(line);
    let record = auth::register(repo, &request.username, &request.password, &request.role)?;
    Ok(record)
}

/// Handle a login line: `<username> <password>`
pub fn handle_authenticate<R: StoreRepository + ?Sized>(
    repo: &R,
    line: &str,
) -> Result<AuthSuccess, CredStoreError> {
    let request = parse_login(line);
    let loaded = repo.load()?;

    if loaded.users_initialized {
        warn!("Store has no users key, treating it as empty");
    }

    let success = auth::authenticate(&loaded.store, &request.username, &request.password)?;
    info!("User '{}' logged in", success.username);
    Ok(success)
}
