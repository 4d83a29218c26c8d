//! Store state and the dispatch reducer.

use farme_commerce::cart::Cart;
use farme_commerce::money::Currency;
use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::error::StoreError;
use crate::user::User;

/// Everything the storefront shares between pages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StoreState {
    pub cart: Cart,
    pub user: User,
}

impl StoreState {
    /// Create an empty store pricing its cart in `currency`.
    pub fn new(currency: Currency) -> Self {
        Self {
            cart: Cart::new(currency),
            user: User::Anonymous,
        }
    }

    /// Cart item count shown on the header badge.
    pub fn total_items(&self) -> i64 {
        self.cart.total_items()
    }

    /// Whether the header should show the account link.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_authenticated()
    }

    /// Apply an action.
    ///
    /// On error nothing has changed.
    pub fn dispatch(&mut self, action: Action) -> Result<(), StoreError> {
        let name = action.name();
        let result = self.apply(action);

        match &result {
            Ok(()) => tracing::debug!(
                action = name,
                total_items = self.cart.total_items(),
                authenticated = self.user.is_authenticated(),
                "store action applied"
            ),
            Err(e) => tracing::warn!(action = name, error = %e, "store action rejected"),
        }

        result
    }

    fn apply(&mut self, action: Action) -> Result<(), StoreError> {
        match action {
            Action::AddToCart(line) => {
                let product_id = line.product_id.clone();
                let added = line.quantity;
                let quantity = self.cart.add_line(line)?;
                tracing::info!(
                    product_id = %product_id,
                    added,
                    line_quantity = quantity,
                    "added to cart"
                );
            }
            Action::RemoveLine(product_id) => {
                if !self.cart.remove_line(&product_id) {
                    tracing::debug!(product_id = %product_id, "no cart line to remove");
                }
            }
            Action::ClearCart => self.cart.clear(),
            Action::SignIn(profile) => self.user = User::Authenticated(profile),
            Action::SignOut => {
                if !self.user.is_authenticated() {
                    return Err(StoreError::NotAuthenticated);
                }
                self.user = User::Anonymous;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::UserProfile;
    use farme_commerce::prelude::*;

    fn line(id: &str, quantity: i64) -> CartLine {
        let product = Product::new(
            id,
            "Cà chua bi Đà Lạt",
            Money::vnd(35000),
            "rau-cu",
            "/images/products/ca-chua-bi.jpg",
            Seller::new("dalat-xanh", "Nông trại Đà Lạt Xanh"),
        );
        CartLine::from_product(&product, quantity)
    }

    #[test]
    fn test_new_store_is_empty_and_anonymous() {
        let store = StoreState::default();
        assert_eq!(store.total_items(), 0);
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_add_to_cart_raises_total_by_quantity() {
        let mut store = StoreState::default();
        store.dispatch(Action::AddToCart(line("1", 3))).unwrap();
        assert_eq!(store.total_items(), 3);

        store.dispatch(Action::AddToCart(line("1", 2))).unwrap();
        assert_eq!(store.total_items(), 5);
        assert_eq!(store.cart.line_count(), 1);

        store.dispatch(Action::AddToCart(line("2", 4))).unwrap();
        assert_eq!(store.total_items(), 9);
    }

    #[test]
    fn test_rejected_add_leaves_store_unchanged() {
        let mut store = StoreState::default();
        store.dispatch(Action::AddToCart(line("1", 1))).unwrap();
        let before = store.clone();

        let err = store.dispatch(Action::AddToCart(line("1", 0))).unwrap_err();
        assert_eq!(err, StoreError::Commerce(CommerceError::InvalidQuantity(0)));
        assert_eq!(store, before);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut store = StoreState::default();
        store.dispatch(Action::AddToCart(line("1", 1))).unwrap();
        store.dispatch(Action::AddToCart(line("2", 2))).unwrap();

        store.dispatch(Action::RemoveLine(ProductId::new("1"))).unwrap();
        assert_eq!(store.total_items(), 2);

        store.dispatch(Action::ClearCart).unwrap();
        assert_eq!(store.total_items(), 0);
    }

    #[test]
    fn test_sign_in_and_out() {
        let mut store = StoreState::default();
        assert_eq!(store.dispatch(Action::SignOut), Err(StoreError::NotAuthenticated));

        store
            .dispatch(Action::SignIn(UserProfile::new("u1", "Lan")))
            .unwrap();
        assert!(store.is_authenticated());

        store.dispatch(Action::SignOut).unwrap();
        assert!(!store.is_authenticated());
    }
}
