//! Inclusive index window narrowed by each probe.

use crate::types::SearchKey;

/// Shape of a window, decided by its endpoint values.
///
/// A flat window has no slope to interpolate along, so it is resolved by a
/// single comparison instead of the probe formula.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum WindowShape<K> {
    /// `S[low] == S[high]`.
    Flat(K),
    /// `S[low] < S[high]`.
    Sloped {
        /// Value at the window start
        lo: K,
        /// Value at the window end
        hi: K,
    },
}

/// Inclusive range `[low, high]` of indices still under consideration.
///
/// Always non-empty: narrowing past either end yields `None` instead of an
/// inverted window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Window {
    pub(crate) low: usize,
    pub(crate) high: usize,
}

impl Window {
    /// Window covering a whole sequence of `len` elements.
    #[inline]
    pub(crate) fn full(len: usize) -> Option<Self> {
        len.checked_sub(1).map(|high| Self { low: 0, high })
    }

    /// `high - low`, the largest offset a probe may take.
    #[inline]
    pub(crate) fn width(&self) -> usize {
        self.high - self.low
    }

    /// Number of indices in the window.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.width() + 1
    }

    /// Classify the window from its endpoint values.
    ///
    /// Callers have already checked `lo <= target <= hi`, so unequal endpoints
    /// are strictly increasing.
    #[inline]
    pub(crate) fn shape<K: SearchKey>(lo: K, hi: K) -> WindowShape<K> {
        if lo == hi {
            WindowShape::Flat(lo)
        } else {
            WindowShape::Sloped { lo, hi }
        }
    }

    /// Probe estimated by linear interpolation between the endpoint values.
    #[inline]
    pub(crate) fn interpolate<K: SearchKey>(&self, lo: K, hi: K, target: K) -> usize {
        let offset = K::probe_offset(lo, hi, target, self.width());
        self.clamp(self.low.saturating_add(offset))
    }

    /// Probe at the midpoint, as binary search would choose.
    #[inline]
    pub(crate) fn midpoint(&self) -> usize {
        self.low + self.width() / 2
    }

    #[inline]
    fn clamp(&self, probe: usize) -> usize {
        probe.clamp(self.low, self.high)
    }

    /// Keep only the indices above `probe`.
    #[inline]
    pub(crate) fn above(&self, probe: usize) -> Option<Self> {
        (probe < self.high).then(|| Self {
            low: probe + 1,
            high: self.high,
        })
    }

    /// Keep only the indices below `probe`.
    #[inline]
    pub(crate) fn below(&self, probe: usize) -> Option<Self> {
        (probe > self.low).then(|| Self {
            low: self.low,
            high: probe - 1,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_window() {
        assert_eq!(Window::full(0), None);
        assert_eq!(Window::full(1), Some(Window { low: 0, high: 0 }));
        assert_eq!(Window::full(8), Some(Window { low: 0, high: 7 }));
    }

    #[test]
    fn test_width_and_len() {
        let window = Window { low: 3, high: 7 };
        assert_eq!(window.width(), 4);
        assert_eq!(window.len(), 5);
    }

    #[test]
    fn test_shape() {
        assert_eq!(Window::shape(5, 5), WindowShape::Flat(5));
        assert_eq!(Window::shape(1, 9), WindowShape::Sloped { lo: 1, hi: 9 });
        assert_eq!(Window::shape(0.0, -0.0), WindowShape::Flat(0.0));
    }

    #[test]
    fn test_interpolate_stays_in_window() {
        let window = Window { low: 10, high: 17 };
        assert_eq!(window.interpolate(2, 256, 2), 10);
        assert_eq!(window.interpolate(2, 256, 256), 17);
        assert_eq!(window.interpolate(2, 256, 128), 13);
        // Out-of-contract target is still clamped
        assert_eq!(window.interpolate(2, 256, 1000), 17);
    }

    #[test]
    fn test_midpoint() {
        assert_eq!(Window { low: 0, high: 7 }.midpoint(), 3);
        assert_eq!(Window { low: 4, high: 4 }.midpoint(), 4);
        let wide = Window {
            low: usize::MAX - 2,
            high: usize::MAX,
        };
        assert_eq!(wide.midpoint(), usize::MAX - 1);
    }

    #[test]
    fn test_narrowing() {
        let window = Window { low: 2, high: 6 };
        assert_eq!(window.above(4), Some(Window { low: 5, high: 6 }));
        assert_eq!(window.below(4), Some(Window { low: 2, high: 3 }));
        assert_eq!(window.above(6), None);
        assert_eq!(window.below(2), None);
    }

    #[test]
    fn test_narrowing_at_index_zero() {
        let window = Window { low: 0, high: 0 };
        assert_eq!(window.below(0), None);
        assert_eq!(window.above(0), None);
    }
}
