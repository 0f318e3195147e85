//! Query pipeline for provider listings.
//!
//! A listing request goes through three stages over the loaded collection:
//!
//! 1. **Filter**: optional predicates combined with AND
//! 2. **Sort**: one field and direction, stable for equal keys
//! 3. **Paginate**: a 1-based page of `limit` records plus totals
//!
//! # Example
//!
//! ```
//! use medifind::query::{query, ListingQuery, RawListingParams};
//!
//! let params = RawListingParams {
//!     specialization: Some("cardio".to_string()),
//!     page: Some("2".to_string()),
//!     ..Default::default()
//! };
//! let result = query(&[], &ListingQuery::from_raw(&params));
//!
//! assert_eq!(result.current_page, 2);
//! assert_eq!(result.total_pages, 0);
//! ```

mod facets;
mod params;
mod pipeline;

pub use facets::{distinct_values, FacetField, Facets};
pub use params::{
    split_days, Filters, ListingQuery, RawListingParams, SortField, SortOrder, DEFAULT_LIMIT,
    DEFAULT_PAGE,
};
pub use pipeline::{matches, query, PagedResult};
