//! Search configuration types.

use std::fmt;
use std::str::FromStr;

use crate::types::SearchError;

/// How the next probe is chosen inside a sloped window.
///
/// Every strategy shares the same window loop, range pre-check and flat-window
/// handling; only the probe position differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SearchStrategy {
    /// Linear interpolation between the window's endpoint values.
    ///
    /// O(log log n) on uniformly distributed values, O(n) on exponentially
    /// growing ones.
    #[default]
    Interpolation,

    /// Bisection at the window midpoint. O(log n) regardless of distribution.
    Binary,

    /// Interpolation, switching to one bisection step after
    /// [`SearchConfig::stall_limit`] consecutive probes that each left more
    /// than half of the window.
    Hybrid,
}

impl SearchStrategy {
    /// All strategies, in declaration order.
    pub const ALL: [SearchStrategy; 3] = [
        SearchStrategy::Interpolation,
        SearchStrategy::Binary,
        SearchStrategy::Hybrid,
    ];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            SearchStrategy::Interpolation => "interpolation",
            SearchStrategy::Binary => "binary",
            SearchStrategy::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for SearchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for SearchStrategy {
    type Err = SearchError;

    /// Parse a strategy name (case-insensitive).
    ///
    /// # Example
    ///
    /// ```
    /// use search_core::search::SearchStrategy;
    ///
    /// let strategy: SearchStrategy = "Hybrid".parse().unwrap();
    /// assert_eq!(strategy, SearchStrategy::Hybrid);
    /// assert!("ternary".parse::<SearchStrategy>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "interpolation" => Ok(SearchStrategy::Interpolation),
            "binary" => Ok(SearchStrategy::Binary),
            "hybrid" => Ok(SearchStrategy::Hybrid),
            other => Err(SearchError::InvalidConfig(format!(
                "Unknown strategy: {}. Supported: interpolation, binary, hybrid",
                other
            ))),
        }
    }
}

/// Configuration for the search engine.
///
/// # Example
///
/// ```
/// use search_core::search::{SearchConfig, SearchStrategy};
///
/// // Plain interpolation search
/// let config = SearchConfig::default();
/// assert_eq!(config.strategy, SearchStrategy::Interpolation);
///
/// // Interpolation with a bisection fallback after 3 stalled probes
/// let custom = SearchConfig::new(SearchStrategy::Hybrid, 3);
/// assert_eq!(custom.stall_limit, 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    /// Probe selection strategy.
    pub strategy: SearchStrategy,

    /// Consecutive stalled interpolation probes tolerated before the hybrid
    /// strategy bisects once.
    ///
    /// A probe stalls when the narrowed window keeps more than half of the
    /// indices. Ignored by the other strategies.
    pub stall_limit: usize,
}

impl Default for SearchConfig {
    /// Default values:
    /// - `strategy`: `Interpolation`
    /// - `stall_limit`: 2
    fn default() -> Self {
        Self {
            strategy: SearchStrategy::default(),
            stall_limit: 2,
        }
    }
}

impl SearchConfig {
    /// Create a new configuration with specified values.
    ///
    /// # Panics
    ///
    /// Panics if `stall_limit == 0`.
    pub fn new(strategy: SearchStrategy, stall_limit: usize) -> Self {
        assert!(stall_limit > 0, "stall_limit must be > 0");
        Self {
            strategy,
            stall_limit,
        }
    }

    /// Create a configuration, reporting invalid values as an error.
    ///
    /// # Example
    ///
    /// ```
    /// use search_core::search::{SearchConfig, SearchStrategy};
    ///
    /// assert!(SearchConfig::try_new(SearchStrategy::Hybrid, 0).is_err());
    /// ```
    pub fn try_new(strategy: SearchStrategy, stall_limit: usize) -> Result<Self, SearchError> {
        let config = Self {
            strategy,
            stall_limit,
        };
        config.validate()?;
        Ok(config)
    }

    /// Pure interpolation search.
    pub fn interpolation() -> Self {
        Self {
            strategy: SearchStrategy::Interpolation,
            ..Self::default()
        }
    }

    /// Pure binary search.
    pub fn binary() -> Self {
        Self {
            strategy: SearchStrategy::Binary,
            ..Self::default()
        }
    }

    /// Interpolation with the bisection fallback, using the default stall limit.
    pub fn hybrid() -> Self {
        Self {
            strategy: SearchStrategy::Hybrid,
            ..Self::default()
        }
    }

    /// Check values that cannot be rejected at compile time, such as those
    /// read from a configuration file.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.stall_limit == 0 {
            return Err(SearchError::InvalidConfig(
                "stall_limit must be > 0".to_string(),
            ));
        }
        Ok(())
    }
}
