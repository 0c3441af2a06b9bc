//! Unified error types and result handling.
//!
//! Every fallible operation in the crate returns [`Result`]. Variants carry
//! enough context for a human-readable message at the call site; database
//! and I/O errors convert via `#[from]`.

use thiserror::Error;

/// Crate-wide error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration problem (missing file, bad TOML, invalid field).
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what went wrong
        message: String,
    },

    /// Referenced area does not exist.
    #[error("Area not found: {id}")]
    AreaNotFound {
        /// Primary key that failed to resolve
        id: i64,
    },

    /// Referenced property does not exist.
    #[error("Property not found: {id}")]
    PropertyNotFound {
        /// Primary key that failed to resolve
        id: i64,
    },

    /// A price or rate that must be positive was not.
    #[error("Invalid price: {price}")]
    InvalidPrice {
        /// The offending value
        price: f64,
    },

    /// Validation failure caught before any database write.
    #[error("Validation error: {message}")]
    Validation {
        /// Which field or rule failed
        message: String,
    },

    /// Database error from the persistence layer.
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error (export files, auth flag file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type.
pub type Result<T> = std::result::Result<T, Error>;
