//! Interpolation search engine.

use std::cmp::Ordering;

use super::window::{Window, WindowShape};
use super::{check_sorted, SearchConfig, SearchReport, SearchStrategy};
use crate::types::{SearchError, SearchKey};

/// Exact-match search over a non-decreasing numeric sequence.
///
/// Each iteration estimates where the target would sit if the values between
/// the window endpoints were uniformly spread, compares that element, and
/// narrows the window past it. The engine holds only its configuration, so a
/// single instance can be shared freely across threads.
///
/// # Guarantees
///
/// For every input, sorted or not:
/// - no index outside `[0, n - 1]` is read
/// - no division by zero: windows with equal endpoint values are resolved by
///   one comparison
/// - probe arithmetic cannot overflow (see [`SearchKey`])
/// - at most `n` probes are made, since each one removes at least one index
///
/// For sorted input the result is `Some(i)` with `S[i] == target` whenever the
/// target is present. Among duplicates any matching index may be returned;
/// use [`search_first`](Self::search_first) for the lowest one.
///
/// # Example
///
/// ```
/// use search_core::search::InterpolationSearch;
///
/// let data = [2, 4, 8, 16, 32, 64, 128, 256];
/// let engine = InterpolationSearch::with_defaults();
///
/// assert_eq!(engine.search(&data, 256), Some(7));
/// assert_eq!(engine.search(&data, 2), Some(0));
/// assert_eq!(engine.search(&data, 5), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InterpolationSearch {
    config: SearchConfig,
}

impl InterpolationSearch {
    /// Create an engine with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Create an engine using pure interpolation probes.
    pub fn with_defaults() -> Self {
        Self::new(SearchConfig::default())
    }

    /// Returns the engine configuration.
    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Find an index holding `target`.
    ///
    /// # Returns
    ///
    /// * `Some(i)` - `sequence[i] == target`
    /// * `None` - The target is absent, outside `[S[0], S[n-1]]`, incomparable
    ///   (NaN), or the sequence is empty
    pub fn search<K: SearchKey>(&self, sequence: &[K], target: K) -> Option<usize> {
        self.run(sequence, target, |_| {})
    }

    /// Find the lowest index holding `target`.
    ///
    /// Runs [`search`](Self::search), then bisects the prefix before the hit
    /// for the first element not less than the target.
    ///
    /// # Example
    ///
    /// ```
    /// use search_core::search::InterpolationSearch;
    ///
    /// let data = [1, 3, 3, 3, 3, 3, 9];
    /// let engine = InterpolationSearch::with_defaults();
    /// assert_eq!(engine.search_first(&data, 3), Some(1));
    /// ```
    pub fn search_first<K: SearchKey>(&self, sequence: &[K], target: K) -> Option<usize> {
        let hit = self.search(sequence, target)?;
        Some(sequence[..hit].partition_point(|value| *value < target))
    }

    /// Verify the sortedness precondition, then search.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(i))` / `Ok(None)` - As [`search`](Self::search)
    /// * `Err(SearchError::UnsortedInput)` - The sequence is not non-decreasing
    ///
    /// # Example
    ///
    /// ```
    /// use search_core::search::InterpolationSearch;
    /// use search_core::types::SearchError;
    ///
    /// let engine = InterpolationSearch::with_defaults();
    /// assert_eq!(engine.search_checked(&[1, 2, 3], 2), Ok(Some(1)));
    /// assert_eq!(
    ///     engine.search_checked(&[3, 2, 1], 2),
    ///     Err(SearchError::UnsortedInput { index: 0 })
    /// );
    /// ```
    pub fn search_checked<K: SearchKey>(
        &self,
        sequence: &[K],
        target: K,
    ) -> Result<Option<usize>, SearchError> {
        check_sorted(sequence)?;
        Ok(self.search(sequence, target))
    }

    /// Search and record every probe index along the way.
    pub fn search_traced<K: SearchKey>(&self, sequence: &[K], target: K) -> SearchReport {
        let mut probes = Vec::new();
        let index = self.run(sequence, target, |probe| probes.push(probe));
        SearchReport { index, probes }
    }

    fn run<K, F>(&self, sequence: &[K], target: K, mut on_probe: F) -> Option<usize>
    where
        K: SearchKey,
        F: FnMut(usize),
    {
        let mut window = Window::full(sequence.len())?;
        let mut stalls = 0;

        loop {
            let lo = sequence[window.low];
            let hi = sequence[window.high];

            // Written as a negated range test so NaN on either side stops here
            if !(lo <= target && target <= hi) {
                return None;
            }

            let (probe, interpolated) = match Window::shape(lo, hi) {
                WindowShape::Flat(value) => {
                    on_probe(window.low);
                    return (value == target).then_some(window.low);
                }
                WindowShape::Sloped { lo, hi } => {
                    self.choose_probe(&window, lo, hi, target, stalls)
                }
            };
            on_probe(probe);

            let next = match sequence[probe].partial_cmp(&target) {
                Some(Ordering::Equal) => return Some(probe),
                Some(Ordering::Less) => window.above(probe),
                Some(Ordering::Greater) => window.below(probe),
                None => return None,
            }?;

            stalls = if interpolated && next.len() * 2 > window.len() {
                stalls + 1
            } else {
                0
            };
            window = next;
        }
    }

    /// Returns the probe index and whether it came from interpolation.
    #[inline]
    fn choose_probe<K: SearchKey>(
        &self,
        window: &Window,
        lo: K,
        hi: K,
        target: K,
        stalls: usize,
    ) -> (usize, bool) {
        match self.config.strategy {
            SearchStrategy::Interpolation => (window.interpolate(lo, hi, target), true),
            SearchStrategy::Binary => (window.midpoint(), false),
            SearchStrategy::Hybrid if stalls >= self.config.stall_limit => {
                (window.midpoint(), false)
            }
            SearchStrategy::Hybrid => (window.interpolate(lo, hi, target), true),
        }
    }
}

/// Interpolation search with the default configuration.
///
/// Shorthand for `InterpolationSearch::with_defaults().search(sequence, target)`.
///
/// # Example
///
/// ```
/// use search_core::interpolation_search;
///
/// assert_eq!(interpolation_search(&[10, 20, 30, 40], 30), Some(2));
/// assert_eq!(interpolation_search::<i32>(&[], 30), None);
/// ```
pub fn interpolation_search<K: SearchKey>(sequence: &[K], target: K) -> Option<usize> {
    InterpolationSearch::with_defaults().search(sequence, target)
}
