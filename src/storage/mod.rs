//! Credential store persistence
//!
//! Handles the store document model and its flat-file backend.

pub mod filesystem;
pub mod records;
pub mod repository;
pub mod results;

pub use filesystem::JsonFileRepository;
pub use records::{UserRecord, UserStore};
pub use repository::StoreRepository;
pub use results::LoadResult;
