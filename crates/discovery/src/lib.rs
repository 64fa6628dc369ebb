//! Filtering and search over restaurant and list entities.
//!
//! This crate provides:
//! - `FilterState`, the immutable filter value rebuilt on every interaction
//! - The `Facet` trait and one implementation per facet
//! - `FacetSet` for composing facets with AND
//! - `SearchMatcher` for free-text search
//! - `select` for the lazy, order-preserving result view
//! - `sort_results` for the explicit, caller-applied ordering step
//!
//! ## Architecture
//! Results are produced in stages:
//! 1. The filter is validated and compiled into a `FacetSet` + `SearchMatcher`
//! 2. `select` yields entities passing both, in input order, with distances
//! 3. The caller optionally sorts the materialized results
//!
//! ## Example Usage
//! ```ignore
//! use discovery::{FilterState, SortOrder, select, sort_results};
//!
//! let filter = FilterState::new()
//!     .with_category(Category::Korean)
//!     .with_open_now(true)
//!     .with_viewer(viewer);
//!
//! let selection = select(catalog.entities(), &filter, now)?;
//! let mut results = selection.to_vec();
//! sort_results(&mut results, SortOrder::Distance);
//! ```

pub mod facet_set;
pub mod facets;
pub mod filter_state;
pub mod search;
pub mod selector;
pub mod sort;
pub mod traits;

// Re-export main types
pub use facet_set::{FacetSet, matches};
pub use filter_state::{CertificationType, FilterState, PriceRange};
pub use search::{SearchField, SearchMatcher, search_matches};
pub use selector::{Selected, Selection, select};
pub use sort::{SortOrder, sort_results};
pub use traits::Facet;
