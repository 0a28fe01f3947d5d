//! User registration
//!
//! Appends a record and rewrites the store. No uniqueness or format checks
//! are made on any field.

use log::info;

use super::hash::hash_password;
use crate::error::StoreError;
use crate::storage::{StoreRepository, UserRecord};

/// Registers a user and persists the updated store. Returns the appended record.
pub fn register<R: StoreRepository + ?Sized>(
    repo: &R,
    username: &str,
    password: &str,
    role: &str,
) -> Result<UserRecord, StoreError> {
    let record = UserRecord::new(username, hash_password(password), role);
    let store = repo.append(record.clone())?;

    info!(
        "Registered '{}' with role '{}' ({} user(s) in store)",
        username,
        role,
        store.len()
    );

    Ok(record)
}
