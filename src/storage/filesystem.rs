//! Flat JSON file store
//!
//! Reads the whole file on load and rewrites it in full on save. There is no
//! locking: two concurrent saves race and the last writer wins.

use log::debug;
use serde_json::{Map, Value};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::records::UserStore;
use super::repository::StoreRepository;
use super::results::LoadResult;
use crate::error::StoreError;

const USERS_KEY: &str = "users";

/// Store repository backed by a single pretty-printed JSON file
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn malformed(&self, source: serde_json::Error) -> StoreError {
        StoreError::Malformed {
            path: self.path.clone(),
            source,
        }
    }
}

impl StoreRepository for JsonFileRepository {
    fn load(&self) -> Result<LoadResult, StoreError> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No store at {}, starting empty", self.path.display());
                return Ok(LoadResult::fresh());
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        if content.iter().all(u8::is_ascii_whitespace) {
            debug!("Store {} is empty, starting empty", self.path.display());
            return Ok(LoadResult::fresh());
        }

        let document: Map<String, Value> =
            serde_json::from_slice(&content).map_err(|e| self.malformed(e))?;
        let users_initialized = !document.contains_key(USERS_KEY);
        let store: UserStore =
            serde_json::from_value(Value::Object(document)).map_err(|e| self.malformed(e))?;

        debug!(
            "Loaded {} user(s) from {}",
            store.len(),
            self.path.display()
        );

        Ok(LoadResult {
            store,
            users_initialized,
        })
    }

    fn save(&self, store: &UserStore) -> Result<(), StoreError> {
        let persistence = |source: io::Error| StoreError::Persistence {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(persistence)?;
        }

        let mut content = serde_json::to_string_pretty(store).map_err(StoreError::Serialize)?;
        content.push('\n');
        fs::write(&self.path, content).map_err(persistence)?;

        debug!("Wrote {} user(s) to {}", store.len(), self.path.display());
        Ok(())
    }
}
