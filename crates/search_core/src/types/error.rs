//! Error types for structured error handling.
//!
//! Not-found is never an error: every search operation reports it as `None`.
//! The variants here cover the fallible entry points only:
//! - `search_checked`, which verifies the sortedness precondition
//! - configuration construction and validation

use thiserror::Error;

/// Search-related errors.
///
/// # Variants
/// - `UnsortedInput`: The sequence is not non-decreasing
/// - `InvalidConfig`: A search configuration failed validation
///
/// # Examples
/// ```
/// use search_core::types::SearchError;
///
/// let err = SearchError::UnsortedInput { index: 3 };
/// assert_eq!(
///     format!("{}", err),
///     "Sequence is not sorted: element 3 is greater than element 4"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchError {
    /// The sequence violates the non-decreasing precondition.
    ///
    /// `index` is the first position `i` where `S[i] <= S[i + 1]` does not
    /// hold (including incomparable values such as NaN).
    #[error("Sequence is not sorted: element {} is greater than element {}", .index, .index + 1)]
    UnsortedInput {
        /// Index of the left element of the first out-of-order pair
        index: usize,
    },

    /// Invalid search configuration.
    #[error("Invalid search configuration: {0}")]
    InvalidConfig(String),
}
