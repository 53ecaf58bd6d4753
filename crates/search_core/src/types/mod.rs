//! Core numeric and error types.
//!
//! This module provides:
//! - `key`: The [`SearchKey`] trait implemented by every searchable numeric type
//! - `error`: Structured error types for the fallible search operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`SearchKey`] from `key`
//! - [`SearchError`] from `error`

pub mod error;
pub mod key;

// Re-export commonly used types at module level
pub use error::SearchError;
pub use key::SearchKey;
