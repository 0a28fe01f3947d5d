//! Store document model
//!
//! Serde models for the JSON store file. Keys this crate does not know about
//! are carried in `extra` so a rewrite never drops them.
//!
//! Reading is lenient about value types: `null` reads as empty, and numbers
//! or booleans in string fields read as their JSON text.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// null -> "", scalars -> their text, containers are rejected
fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!(
            "expected a string, found {other}"
        ))),
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// One user's credential record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRecord {
    #[serde(deserialize_with = "lenient_string")]
    pub username: String,
    #[serde(deserialize_with = "lenient_string")]
    pub password_hash: String,
    #[serde(deserialize_with = "lenient_string")]
    pub role: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserRecord {
    pub fn new(username: &str, password_hash: String, role: &str) -> Self {
        Self {
            username: username.to_string(),
            password_hash,
            role: role.to_string(),
            extra: Map::new(),
        }
    }
}

/// The whole store document. `users` keeps append order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserStore {
    #[serde(default, deserialize_with = "null_as_default")]
    pub users: Vec<UserRecord>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserStore {
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Appends a record at the end of the sequence. Duplicate usernames are allowed.
    pub fn push(&mut self, record: UserRecord) {
        self.users.push(record);
    }

    /// First record with exactly this username, in insertion order.
    pub fn find(&self, username: &str) -> Option<&UserRecord> {
        self.users.iter().find(|user| user.username == username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_field_names() {
        let record = UserRecord::new("a", "HASH_x".into(), "r");
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"username": "a", "password_hash": "HASH_x", "role": "r"})
        );
    }

    #[test]
    fn test_missing_record_fields_read_as_empty() {
        let record: UserRecord = serde_json::from_str(r#"{"username":"a"}"#).unwrap();
        assert_eq!(record.username, "a");
        assert_eq!(record.password_hash, "");
        assert_eq!(record.role, "");
    }

    #[test]
    fn test_null_and_scalar_fields() {
        let record: UserRecord =
            serde_json::from_str(r#"{"username":"a","password_hash":"HASH_x","role":null}"#)
                .unwrap();
        assert_eq!(record.role, "");

        let record: UserRecord =
            serde_json::from_str(r#"{"username":42,"password_hash":"HASH_x","role":true}"#)
                .unwrap();
        assert_eq!(record.username, "42");
        assert_eq!(record.role, "true");
    }

    #[test]
    fn test_container_field_rejected() {
        let result = serde_json::from_str::<UserRecord>(r#"{"username":["a"]}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_null_users_is_empty() {
        let store: UserStore = serde_json::from_str(r#"{"users":null}"#).unwrap();
        assert!(store.is_empty());
        assert!(store.extra.is_empty());
    }

    #[test]
    fn test_unknown_keys_survive() {
        let raw = r#"{"users":[{"username":"a","password_hash":"HASH_x","role":"r","email":"a@x"}],"version":3}"#;
        let store: UserStore = serde_json::from_str(raw).unwrap();
        assert_eq!(store.extra.get("version"), Some(&serde_json::json!(3)));
        assert_eq!(
            store.users[0].extra.get("email"),
            Some(&serde_json::json!("a@x"))
        );

        let back = serde_json::to_value(&store).unwrap();
        assert_eq!(back, serde_json::from_str::<Value>(raw).unwrap());
    }

    #[test]
    fn test_find_returns_first_match() {
        let mut store = UserStore::default();
        store.push(UserRecord::new("dup", "HASH_one".into(), "first"));
        store.push(UserRecord::new("dup", "HASH_two".into(), "second"));
        assert_eq!(store.find("dup").map(|u| u.role.as_str()), Some("first"));
        assert!(store.find("DUP").is_none());
    }
}
