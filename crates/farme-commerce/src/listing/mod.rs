//! Product listing module.
//!
//! Filters narrowing the catalog for the listing and category pages.

mod filter;

pub use filter::ListingFilter;
