//! Product and seller types.

use crate::ids::{ProductId, SellerId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Number of stars in a rating row.
pub const MAX_RATING: usize = 5;

/// The seller (dealer) offering a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Seller {
    pub id: SellerId,
    pub name: String,
}

impl Seller {
    pub fn new(id: impl Into<SellerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Path of the seller's storefront page.
    pub fn href(&self) -> String {
        format!("/seller/{}", self.id)
    }

    /// Path of the seller's avatar image.
    pub fn avatar_url(&self) -> String {
        format!("/images/sellers/{}.jpg", self.id)
    }
}

/// A product in the catalog.
///
/// Products are loaded once from the static catalog and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Current selling price.
    pub price: Money,
    /// Price before discount, shown struck through.
    #[serde(default)]
    pub original_price: Option<Money>,
    /// Discount as a whole percentage.
    #[serde(default)]
    pub discount: Option<u8>,
    /// Average rating, 0.0 to 5.0.
    pub rating: f32,
    /// Number of ratings behind the average.
    pub rating_count: u32,
    /// Category slug.
    pub category: String,
    /// Primary image path.
    pub image: String,
    /// Who sells it.
    pub seller: Seller,
}

impl Product {
    /// Create a product with no discount and no ratings.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        category: impl Into<String>,
        image: impl Into<String>,
        seller: Seller,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            original_price: None,
            discount: None,
            rating: 0.0,
            rating_count: 0,
            category: category.into(),
            image: image.into(),
            seller,
        }
    }

    /// Set the pre-discount price and discount percentage.
    pub fn with_discount(mut self, original_price: Money, discount: u8) -> Self {
        self.original_price = Some(original_price);
        self.discount = Some(discount);
        self
    }

    /// Set the rating average and count.
    pub fn with_rating(mut self, rating: f32, rating_count: u32) -> Self {
        self.rating = rating;
        self.rating_count = rating_count;
        self
    }

    /// Path of the product detail page.
    pub fn href(&self) -> String {
        format!("/product/{}", self.id)
    }

    /// Path of the product's category page.
    pub fn category_href(&self) -> String {
        format!("/category/{}", self.category.to_lowercase())
    }

    /// Badge text such as "-15%", only for a positive discount.
    pub fn discount_badge(&self) -> Option<String> {
        self.discount
            .filter(|d| *d > 0)
            .map(|d| format!("-{d}%"))
    }

    /// Number of filled stars: the rating rounded down, at most [`MAX_RATING`].
    pub fn filled_stars(&self) -> usize {
        self.rating.clamp(0.0, MAX_RATING as f32).floor() as usize
    }

    /// Check if the product sells below its original price.
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|original| original.amount > self.price.amount)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Product {
        Product::new(
            "7",
            "Cà chua bi",
            Money::vnd(35000),
            "Rau-Cu",
            "/images/products/ca-chua-bi.jpg",
            Seller::new("dalat-xanh", "Nông trại Đà Lạt Xanh"),
        )
    }

    #[test]
    fn test_links() {
        let product = sample();
        assert_eq!(product.href(), "/product/7");
        assert_eq!(product.category_href(), "/category/rau-cu");
        assert_eq!(product.seller.href(), "/seller/dalat-xanh");
        assert_eq!(product.seller.avatar_url(), "/images/sellers/dalat-xanh.jpg");
    }

    #[test]
    fn test_discount_badge_only_when_positive() {
        assert_eq!(sample().discount_badge(), None);
        let discounted = sample().with_discount(Money::vnd(40000), 0);
        assert_eq!(discounted.discount_badge(), None);
        let discounted = sample().with_discount(Money::vnd(40000), 12);
        assert_eq!(discounted.discount_badge().as_deref(), Some("-12%"));
        assert!(discounted.is_on_sale());
    }

    #[test]
    fn test_filled_stars_rounds_down() {
        assert_eq!(sample().with_rating(4.8, 10).filled_stars(), 4);
        assert_eq!(sample().with_rating(5.0, 10).filled_stars(), 5);
        assert_eq!(sample().with_rating(7.0, 10).filled_stars(), 5);
        assert_eq!(sample().filled_stars(), 0);
    }
}
