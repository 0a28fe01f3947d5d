//! Error types
//!
//! Defines domain-specific error types for each module of the credential store.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Authentication outcomes that are expected negatives rather than crashes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    WrongPassword(String),
    UserNotFound(String),
}

impl AuthError {
    /// Username the failed attempt was made for
    pub fn username(&self) -> &str {
        match self {
            AuthError::WrongPassword(u) | AuthError::UserNotFound(u) => u,
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::WrongPassword(_) => write!(f, "Incorrect password"),
            AuthError::UserNotFound(_) => write!(f, "User not found"),
        }
    }
}

impl std::error::Error for AuthError {}

/// Store file errors
#[derive(Debug)]
pub enum StoreError {
    /// File exists but its contents are not a valid store document
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    Read {
        path: PathBuf,
        source: io::Error,
    },
    Persistence {
        path: PathBuf,
        source: io::Error,
    },
    Serialize(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Malformed { path, source } => {
                write!(f, "Malformed store {}: {}", path.display(), source)
            }
            StoreError::Read { path, source } => {
                write!(f, "Failed to read store {}: {}", path.display(), source)
            }
            StoreError::Persistence { path, source } => {
                write!(f, "Failed to write store {}: {}", path.display(), source)
            }
            StoreError::Serialize(e) => write!(f, "Failed to encode store: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Malformed { source, .. } => Some(source),
            StoreError::Read { source, .. } | StoreError::Persistence { source, .. } => {
                Some(source)
            }
            StoreError::Serialize(e) => Some(e),
        }
    }
}

/// Top-level error covering everything a single invocation can fail with
#[derive(Debug)]
pub enum CredStoreError {
    Auth(AuthError),
    Store(StoreError),
    Config(config::ConfigError),
    Input(io::Error),
}

impl fmt::Display for CredStoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredStoreError::Auth(e) => write!(f, "{}", e),
            CredStoreError::Store(e) => write!(f, "Store error: {}", e),
            CredStoreError::Config(e) => write!(f, "Configuration error: {}", e),
            CredStoreError::Input(e) => write!(f, "Failed to read input: {}", e),
        }
    }
}

impl std::error::Error for CredStoreError {}

impl From<AuthError> for CredStoreError {
    fn from(error: AuthError) -> Self {
        CredStoreError::Auth(error)
    }
}

impl From<StoreError> for CredStoreError {
    fn from(error: StoreError) -> Self {
        CredStoreError::Store(error)
    }
}

impl From<config::ConfigError> for CredStoreError {
    fn from(error: config::ConfigError) -> Self {
        CredStoreError::Config(error)
    }
}

impl From<io::Error> for CredStoreError {
    fn from(error: io::Error) -> Self {
        CredStoreError::Input(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_messages() {
        assert_eq!(
            AuthError::WrongPassword("bob".into()).to_string(),
            "Incorrect password"
        );
        assert_eq!(
            AuthError::UserNotFound("carol".into()).to_string(),
            "User not found"
        );
        assert_eq!(AuthError::UserNotFound("carol".into()).username(), "carol");
    }

    #[test]
    fn test_wrapped_auth_error_keeps_message() {
        let err: CredStoreError = AuthError::WrongPassword("bob".into()).into();
        assert_eq!(err.to_string(), "Incorrect password");
    }
}
