//! Core error type.
//!
//! Sub-crates define their own error enums and wrap `FdError` as one variant
//! via a `From` impl.

use thiserror::Error;

/// The error type for `fd-core` validation.
#[derive(Debug, Error)]
pub enum FdError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("invalid recipe: {0}")]
    InvalidRecipe(String),
}

/// Shorthand result type for `fd-core`.
pub type FdResult<T> = Result<T, FdError>;
