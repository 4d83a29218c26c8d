//! Route pages.

mod cart;
mod home;
mod listing;
mod not_found;
mod product;

pub use cart::CartPage;
pub use home::HomePage;
pub use listing::{CategoryPage, ProductsPage};
pub use not_found::NotFound;
pub use product::ProductPage;
