//! Authentication validator
//!
//! Linear scan over the store. The first record with a matching username
//! decides the outcome; later duplicates are never consulted.

use super::hash::verify_password;
use super::results::AuthSuccess;
use crate::error::AuthError;
use crate::storage::UserStore;

/// Validates a username/password pair against the store.
pub fn authenticate(
    store: &UserStore,
    username: &str,
    password: &str,
) -> Result<AuthSuccess, AuthError> {
    match store.find(username) {
        Some(user) if verify_password(password, &user.password_hash) => Ok(AuthSuccess {
            username: user.username.clone(),
            role: user.role.clone(),
        }),
        Some(_) => Err(AuthError::WrongPassword(username.to_string())),
        None => Err(AuthError::UserNotFound(username.to_string())),
    }
}
