//! Layout and product components.

pub mod header;
pub mod product_card;
pub mod ui;

pub use header::{Footer, Header};
pub use product_card::{ProductCard, ProductGrid};
