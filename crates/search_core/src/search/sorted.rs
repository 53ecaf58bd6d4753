//! Sortedness precondition check.

use crate::types::SearchError;

/// Verify that `sequence` is non-decreasing.
///
/// Incomparable neighbours (a NaN on either side) count as out of order.
///
/// # Returns
///
/// * `Ok(())` - Every adjacent pair satisfies `S[i] <= S[i + 1]`
/// * `Err(SearchError::UnsortedInput { index })` - First pair that does not
///
/// # Example
///
/// ```
/// use search_core::search::check_sorted;
/// use search_core::types::SearchError;
///
/// assert!(check_sorted(&[1, 2, 2, 3]).is_ok());
/// assert_eq!(
///     check_sorted(&[1, 3, 2]),
///     Err(SearchError::UnsortedInput { index: 1 })
/// );
/// ```
pub fn check_sorted<K: PartialOrd>(sequence: &[K]) -> Result<(), SearchError> {
    match sequence
        .windows(2)
        .position(|pair| !(pair[0] <= pair[1]))
    {
        Some(index) => Err(SearchError::UnsortedInput { index }),
        None => Ok(()),
    }
}
