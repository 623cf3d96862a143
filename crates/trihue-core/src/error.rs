//! Error types for trihue

use std::path::PathBuf;
use thiserror::Error;

/// Result type for trihue operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trihue operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A color string matched none of the accepted grammars
    #[error("Invalid color format: {0:?}")]
    InvalidColorFormat(String),

    /// A parsed component is outside its legal domain
    #[error("{component} component out of range: {value} (expected {min}..={max})")]
    ValueOutOfRange {
        component: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A referenced profile file does not exist or is unreadable
    #[error("Color profile not found: {spec:?} (resolved to {})", resolved.display())]
    ProfileNotFound { spec: String, resolved: PathBuf },

    /// Failed to parse ICC profile data
    #[error("Profile parse error: {0}")]
    ProfileParse(String),

    /// Transform creation or application failed
    #[error("Transform error: {0}")]
    Transform(String),

    /// Buffer size mismatch
    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
