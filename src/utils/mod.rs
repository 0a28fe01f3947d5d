//! Utility functions
//!
//! Provides logging setup shared by both binaries.

pub mod logging;
