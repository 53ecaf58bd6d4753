//! Exact-match search over sorted numeric sequences.
//!
//! ## Engine
//!
//! [`InterpolationSearch`] estimates each probe from the value distribution
//! instead of bisecting the index range:
//!
//! ```text
//! probe = low + floor((high - low) * (target - S[low]) / (S[high] - S[low]))
//! ```
//!
//! On values spread roughly uniformly over their indices this needs
//! O(log log n) probes on average. On exponentially growing values each probe
//! may only remove one index, giving O(n); [`SearchStrategy::Hybrid`] caps
//! that by falling back to bisection after repeated stalled probes.
//!
//! ## Operations
//!
//! - [`InterpolationSearch::search`]: any index holding the target
//! - [`InterpolationSearch::search_first`]: lowest index holding the target
//! - [`InterpolationSearch::search_checked`]: verify sortedness, then search
//! - [`InterpolationSearch::search_traced`]: result plus probe path as a [`SearchReport`]
//! - [`check_sorted`]: the sortedness check on its own
//!
//! ## Example
//!
//! ```
//! use search_core::search::{InterpolationSearch, SearchConfig};
//!
//! let data: Vec<u32> = (0..100).map(|i| i * 10).collect();
//!
//! let engine = InterpolationSearch::new(SearchConfig::hybrid());
//! assert_eq!(engine.search(&data, 420), Some(42));
//! assert_eq!(engine.search(&data, 421), None);
//! ```

mod config;
mod interpolation;
mod report;
mod sorted;
mod window;

// Re-export public types at module level
pub use config::{SearchConfig, SearchStrategy};
pub use interpolation::{interpolation_search, InterpolationSearch};
pub use report::SearchReport;
pub use sorted::check_sorted;
