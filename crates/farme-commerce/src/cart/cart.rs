//! Cart and cart line types.

use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::{ProductId, SellerId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed on one cart line.
pub const MAX_QUANTITY_PER_LINE: i64 = 9999;

/// A product-plus-quantity entry in the cart.
///
/// Name, price, image and seller are copied from the product when the line is
/// built so the cart can render without the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    pub price: Money,
    pub quantity: i64,
    pub image: String,
    pub seller_id: SellerId,
    pub seller_name: String,
}

impl CartLine {
    /// Build the line an add-to-cart click dispatches.
    pub fn from_product(product: &Product, quantity: i64) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            quantity,
            image: product.image.clone(),
            seller_id: product.seller.id.clone(),
            seller_name: product.seller.name.clone(),
        }
    }

    /// Unit price times quantity.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        self.price
            .try_multiply(self.quantity)
            .ok_or(CommerceError::Overflow)
    }
}

/// A shopping cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Lines in the order they were first added.
    pub lines: Vec<CartLine>,
    /// Cart currency.
    pub currency: Currency,
}

impl Cart {
    /// Create an empty cart.
    pub fn new(currency: Currency) -> Self {
        Self {
            lines: Vec::new(),
            currency,
        }
    }

    /// Add a line to the cart.
    ///
    /// A line for a product already in the cart is merged: its quantity is
    /// added to the existing line, which keeps its original name, price and
    /// seller. Returns the line's new quantity.
    ///
    /// Returns an error, leaving the cart untouched, if:
    /// - Quantity is not positive
    /// - The line is priced in another currency
    /// - The resulting quantity would exceed MAX_QUANTITY_PER_LINE
    pub fn add_line(&mut self, line: CartLine) -> Result<i64, CommerceError> {
        if line.quantity <= 0 {
            return Err(CommerceError::InvalidQuantity(line.quantity));
        }

        if line.price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: line.price.currency.code().to_string(),
            });
        }

        if let Some(existing) = self
            .lines
            .iter_mut()
            .find(|l| l.product_id == line.product_id)
        {
            let new_quantity = existing
                .quantity
                .checked_add(line.quantity)
                .ok_or(CommerceError::Overflow)?;

            if new_quantity > MAX_QUANTITY_PER_LINE {
                return Err(CommerceError::QuantityExceedsLimit(
                    new_quantity,
                    MAX_QUANTITY_PER_LINE,
                ));
            }

            existing.quantity = new_quantity;
            return Ok(new_quantity);
        }

        if line.quantity > MAX_QUANTITY_PER_LINE {
            return Err(CommerceError::QuantityExceedsLimit(
                line.quantity,
                MAX_QUANTITY_PER_LINE,
            ));
        }

        let quantity = line.quantity;
        self.lines.push(line);
        Ok(quantity)
    }

    /// Remove the line for a product.
    pub fn remove_line(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| &l.product_id != product_id);
        self.lines.len() < len_before
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Total item count (sum of quantities). This is the header badge.
    pub fn total_items(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Number of distinct products.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get the line for a product.
    pub fn line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.product_id == product_id)
    }

    /// Sum of every line subtotal.
    pub fn total(&self) -> Result<Money, CommerceError> {
        let subtotals = self
            .lines
            .iter()
            .map(CartLine::subtotal)
            .collect::<Result<Vec<_>, _>>()?;
        Money::try_sum(subtotals.iter(), self.currency).ok_or(CommerceError::Overflow)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}
