//! Orbitcast - Core Library
//!
//! Domain types, configuration, and error types shared by the Orbitcast
//! API server and the schema initializer.

pub mod config;
pub mod error;
pub mod types;

pub use config::*;
pub use error::*;
pub use types::*;
