//! Password hash
//!
//! NOT a cryptographic hash: the stored form is the plaintext behind a fixed
//! prefix. Existing stores depend on this exact format, so changing it is a
//! breaking store migration.

/// Prefix prepended to every stored password
pub const HASH_PREFIX: &str = "HASH_";

/// Derives the stored representation of `password`.
pub fn hash_password(password: &str) -> String {
    format!("{HASH_PREFIX}{password}")
}

/// Checks `password` against a stored hash.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    stored_hash == hash_password(password)
}
