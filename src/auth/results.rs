//! Authentication result types
//!
//! Defines result structures returned by authentication operations.

use std::fmt;

/// Result of a successful login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSuccess {
    pub username: String,
    pub role: String,
}

impl fmt::Display for AuthSuccess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Logged in as {} ({})", self.username, self.role)
    }
}
