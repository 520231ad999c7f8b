//! Error types for Orbitcast

use thiserror::Error;

/// Errors produced by the core crate itself.
///
/// Storage and HTTP failures are handled in the server crate; only
/// configuration problems originate here.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CoreError>;
