//! Actions accepted by the store.

use farme_commerce::cart::CartLine;
use farme_commerce::ids::ProductId;

use crate::user::UserProfile;

/// A discrete change to the store.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Add a line to the cart, merging with an existing line for the product.
    AddToCart(CartLine),
    /// Drop the cart line for a product.
    RemoveLine(ProductId),
    /// Empty the cart.
    ClearCart,
    /// Record a signed-in shopper.
    SignIn(UserProfile),
    /// Return to the anonymous shopper.
    SignOut,
}

impl Action {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Action::AddToCart(_) => "add_to_cart",
            Action::RemoveLine(_) => "remove_line",
            Action::ClearCart => "clear_cart",
            Action::SignIn(_) => "sign_in",
            Action::SignOut => "sign_out",
        }
    }
}
