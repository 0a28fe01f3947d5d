//! Authentication system
//!
//! Password hashing, registration, and credential validation.

pub mod hash;
pub mod register;
pub mod results;
pub mod validator;

pub use hash::{HASH_PREFIX, hash_password, verify_password};
pub use register::register;
pub use results::AuthSuccess;
pub use validator::authenticate;
