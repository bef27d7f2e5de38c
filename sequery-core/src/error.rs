// Copyright 2026 Sequery Contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the sequery query library.
//!
//! Argument validation is the only failure mode the library itself owns:
//! caller-supplied closures propagate their own panics unchanged, and
//! key-comparability requirements are trait bounds checked at compile time.
//!
//! # Examples
//!
//! ```
//! use sequery_core::{QueryError, Result};
//!
//! fn validate(size: usize) -> Result<()> {
//!     if size == 0 {
//!         return Err(QueryError::invalid_argument("batch size must be at least 1"));
//!     }
//!     Ok(())
//! }
//! ```

/// Root error type for all sequery operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// An operation received an argument outside its accepted domain.
    ///
    /// Raised immediately at the call site, never deferred to iteration
    /// time, so a misconfigured pipeline fails before any element is
    /// consumed.
    #[error("Invalid argument: {context}")]
    InvalidArgument {
        /// Description of the rejected argument
        context: String,
    },
}

impl QueryError {
    /// Create an invalid-argument error with the given context
    pub fn invalid_argument(context: impl Into<String>) -> Self {
        Self::InvalidArgument {
            context: context.into(),
        }
    }
}

/// Specialized Result type for sequery operations
///
/// # Examples
///
/// ```
/// use sequery_core::Result;
///
/// fn checked() -> Result<u32> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, QueryError>;
