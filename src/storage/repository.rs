//! Store repository abstraction
//!
//! Register and Authenticate only talk to this trait, so the flat file can be
//! replaced by an indexed or transactional backend without touching them.

use super::records::{UserRecord, UserStore};
use super::results::LoadResult;
use crate::error::StoreError;

pub trait StoreRepository {
    /// Read the whole store. A missing store is an empty one.
    fn load(&self) -> Result<LoadResult, StoreError>;

    /// Replace the persisted store with `store`.
    fn save(&self, store: &UserStore) -> Result<(), StoreError>;

    /// Load, append one record, and save. Returns the store as written.
    fn append(&self, record: UserRecord) -> Result<UserStore, StoreError> {
        let LoadResult { mut store, .. } = self.load()?;
        store.push(record);
        self.save(&store)?;
        Ok(store)
    }
}
