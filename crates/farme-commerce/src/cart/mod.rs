//! Shopping cart module.
//!
//! Contains the cart and its lines.

mod cart;

pub use cart::{Cart, CartLine, MAX_QUANTITY_PER_LINE};
