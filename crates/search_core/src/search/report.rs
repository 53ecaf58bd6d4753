//! Per-call search diagnostics.

/// Outcome of a traced search: the result plus every probe visited.
///
/// # Example
///
/// ```
/// use search_core::search::InterpolationSearch;
///
/// let data = [2, 4, 8, 16, 32, 64, 128, 256];
/// let report = InterpolationSearch::with_defaults().search_traced(&data, 256);
///
/// assert_eq!(report.index, Some(7));
/// assert_eq!(report.probes, vec![7]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchReport {
    /// Index holding the target, or `None` when not found.
    pub index: Option<usize>,

    /// Probe indices in the order they were compared against the target.
    pub probes: Vec<usize>,
}

impl SearchReport {
    /// Returns true if the target was found.
    #[inline]
    pub fn found(&self) -> bool {
        self.index.is_some()
    }

    /// Number of element comparisons made against the target.
    #[inline]
    pub fn probe_count(&self) -> usize {
        self.probes.len()
    }
}
