//! Error types for bizproc
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations.
//!
//! The engine itself is total on well-formed input: normalization,
//! stemming, scoring and ranking never fail. The only failure path is
//! catalog loading, which is fatal to initialization rather than silently
//! degrading to an empty catalog (an empty catalog would make every search
//! return nothing and mask a provisioning problem).

use std::io;
use thiserror::Error;

/// Result type alias for bizproc operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the bizproc catalog and engine
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while reading the catalog source
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Catalog source is not valid JSON or has the wrong shape
    #[error("catalog format error: {0}")]
    CatalogFormat(#[from] serde_json::Error),

    /// Catalog loaded successfully but contains zero records
    #[error("catalog is empty")]
    EmptyCatalog,

    /// Two catalog records share the same id
    #[error("duplicate process id: {0}")]
    DuplicateId(String),

    /// A record violates a field invariant (empty id or name)
    #[error("invalid record: {0}")]
    InvalidRecord(String),
}
