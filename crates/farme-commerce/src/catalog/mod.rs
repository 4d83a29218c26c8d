//! Product catalog module.
//!
//! Contains types for products, sellers, categories and the static catalog.

mod catalog;
mod category;
mod data;
mod product;

pub use catalog::{Catalog, UnknownProductPolicy, DEFAULT_RELATED_LIMIT};
pub use category::Category;
pub use product::{Product, Seller, MAX_RATING};
