pub mod auth;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod storage;
pub mod utils;

pub use auth::{AuthSuccess, authenticate, hash_password, register};
pub use config::StoreConfig;
pub use error::{AuthError, CredStoreError, StoreError};
pub use storage::{JsonFileRepository, LoadResult, StoreRepository, UserRecord, UserStore};
