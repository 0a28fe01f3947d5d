//! Storage result types
//!
//! Defines result structures returned by storage operations.

use super::records::UserStore;

/// Result of loading the store
#[derive(Debug, Clone, PartialEq)]
pub struct LoadResult {
    pub store: UserStore,
    /// True when the document had no `users` key (or no document existed)
    /// and the sequence was created empty by the loader.
    pub users_initialized: bool,
}

impl LoadResult {
    pub fn fresh() -> Self {
        Self {
            store: UserStore::default(),
            users_initialized: true,
        }
    }
}
