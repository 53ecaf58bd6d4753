//! # search_core: Interpolation Search over Sorted Numeric Sequences
//!
//! search_core provides an exact-match search that uses the value
//! distribution of a sorted sequence to choose its probes:
//! - Search engine and strategies (`search`)
//! - The numeric key abstraction and error types (`types`)
//!
//! ## Numeric Safety
//!
//! Every search terminates, reads only in-bounds indices and never divides by
//! zero or overflows, even when the caller breaks the sortedness precondition.
//! Windows whose endpoint values are equal are resolved by a single
//! comparison, and probe arithmetic is widened per key type.
//!
//! ## Usage Examples
//!
//! ```rust
//! use search_core::interpolation_search;
//! use search_core::search::{InterpolationSearch, SearchConfig, SearchStrategy};
//!
//! let data = [2, 4, 8, 16, 32, 64, 128, 256];
//!
//! // Default engine
//! assert_eq!(interpolation_search(&data, 128), Some(6));
//! assert_eq!(interpolation_search(&data, 5), None);
//!
//! // Traced search with the bisection fallback
//! let engine = InterpolationSearch::new(SearchConfig::new(SearchStrategy::Hybrid, 1));
//! let report = engine.search_traced(&data, 256);
//! assert_eq!(report.index, Some(7));
//! assert_eq!(report.probes, vec![7]);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Serialisation for `SearchConfig`, `SearchStrategy`,
//!   `SearchReport` and `SearchError`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod search;
pub mod types;

pub use search::{interpolation_search, InterpolationSearch};
