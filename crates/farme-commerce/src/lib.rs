//! Domain types and logic for the Farme agricultural storefront.
//!
//! This crate holds everything the storefront knows about products and carts,
//! independent of any UI framework:
//!
//! - **Catalog**: products, sellers, categories, the built-in catalog and
//!   related-product derivation
//! - **Listing**: category and text filters over the catalog
//! - **Cart**: cart lines keyed by product, with merge-on-add semantics
//!
//! # Example
//!
//! ```rust
//! use farme_commerce::prelude::*;
//!
//! let catalog = Catalog::builtin();
//! let product = catalog
//!     .resolve("1", UnknownProductPolicy::FallbackToFirst)
//!     .unwrap();
//!
//! let mut cart = Cart::default();
//! cart.add_line(CartLine::from_product(product, 2)).unwrap();
//! assert_eq!(cart.total_items(), 2);
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod listing;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Category, Product, Seller, UnknownProductPolicy};

    // Cart
    pub use crate::cart::{Cart, CartLine, MAX_QUANTITY_PER_LINE};

    // Listing
    pub use crate::listing::ListingFilter;
}
