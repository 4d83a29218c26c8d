//! View state for the storefront, kept free of Leptos so it can be tested
//! without a browser.

pub mod header;
pub mod listing;
pub mod product_detail;

pub use header::{AccountLink, HeaderState, NavItem, NavKind, NAV_ITEMS};
pub use listing::ListingQuery;
pub use product_detail::{AddToCartFeedback, ProductDetail, ProductDetailState};
