//! Error types for buzzer-core
//!
//! Defines module-specific error types using thiserror for clear error
//! propagation. No error in this crate is fatal: every variant is recovered
//! at the router boundary by logging and dropping the offending command.

use thiserror::Error;

use crate::engine::EngineError;

/// Convenience Result type using buzzer-core Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for buzzer-core
#[derive(Error, Debug)]
pub enum Error {
    /// Payload is not well-formed JSON (or, on the outbound side, the
    /// report tree could not be serialized)
    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Required field missing or wrong type
    #[error("{0}")]
    Validation(String),

    /// Audio engine call failed
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    /// Storage directory open or enumeration failed
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Outbound report could not be published
    #[error("publish error: {0}")]
    Publish(String),

    /// Unrecognized action type string
    #[error("unknown '{0}'")]
    UnknownCommand(String),

    /// Configuration loading errors
    #[error("configuration error: {0}")]
    Config(String),
}
