//! Error types for filter catalog construction.
//!
//! Applying a filter never fails; an unknown filter name is reported as
//! `None` by the lookup functions. These errors only arise when building a
//! custom [`FilterRegistry`](crate::FilterRegistry).

use thiserror::Error;

/// Error type for filter catalog operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum OpsError {
    /// Two descriptors share a name (compared case-insensitively).
    #[error("duplicate filter name: {0}")]
    DuplicateFilter(String),

    /// A descriptor declares a zero scale factor.
    #[error("invalid scale {scale_x}x{scale_y} for filter {name}")]
    InvalidScale {
        /// Filter name
        name: String,
        /// Declared horizontal scale
        scale_x: u32,
        /// Declared vertical scale
        scale_y: u32,
    },

    /// A descriptor has an empty name.
    #[error("filter name must not be empty")]
    EmptyName,
}

/// Result type for filter catalog operations.
pub type OpsResult<T> = Result<T, OpsError>;
