//! The in-memory product catalog.

use crate::catalog::{data, Category, Product, Seller};
use crate::error::CommerceError;
use crate::listing::ListingFilter;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Default cap on related products shown under a product.
pub const DEFAULT_RELATED_LIMIT: usize = 4;

/// What to do when a product id is not in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UnknownProductPolicy {
    /// Show the first catalog entry instead.
    #[default]
    FallbackToFirst,
    /// Report the product as not found.
    NotFound,
}

/// Static catalog of products and categories.
///
/// The catalog is read-only once built; the storefront shares one instance
/// for every page.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog from products and categories, keeping their order.
    pub fn new(products: Vec<Product>, categories: Vec<Category>) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// The catalog compiled into the storefront.
    pub fn builtin() -> Self {
        Self::new(data::products(), data::categories())
    }

    /// Load a catalog document.
    ///
    /// The document uses the storefront's data shape: camelCase fields and
    /// plain integer prices in the document's currency (VND by default).
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let doc: CatalogDocument = serde_json::from_str(json)?;
        let currency = doc.currency;
        let products = doc
            .products
            .into_iter()
            .map(|record| record.into_product(currency))
            .collect();
        Ok(Self::new(products, doc.categories))
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Currency the catalog is priced in, taken from its first product.
    pub fn currency(&self) -> Option<Currency> {
        self.products.first().map(|p| p.price.currency)
    }

    /// Find a product by exact id.
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id.as_str() == id)
    }

    /// Get a product by id, or `ProductNotFound`.
    pub fn get(&self, id: &str) -> Result<&Product, CommerceError> {
        self.find(id)
            .ok_or_else(|| CommerceError::ProductNotFound(id.to_string()))
    }

    /// Resolve the product a detail page should show.
    ///
    /// A known id always resolves to its own record. An unknown id follows
    /// `policy`. An empty catalog is always `EmptyCatalog`.
    pub fn resolve(&self, id: &str, policy: UnknownProductPolicy) -> Result<&Product, CommerceError> {
        let first = self.products.first().ok_or(CommerceError::EmptyCatalog)?;

        if let Some(product) = self.find(id) {
            return Ok(product);
        }

        match policy {
            UnknownProductPolicy::FallbackToFirst => {
                tracing::debug!(
                    product_id = id,
                    fallback_id = %first.id,
                    "unknown product id, showing first catalog entry"
                );
                Ok(first)
            }
            UnknownProductPolicy::NotFound => {
                Err(CommerceError::ProductNotFound(id.to_string()))
            }
        }
    }

    /// Products in the same category as `product`, excluding it, in catalog
    /// order, at most `limit` of them.
    pub fn related(&self, product: &Product, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == product.category && p.id != product.id)
            .take(limit)
            .collect()
    }

    /// Look up a category by slug.
    pub fn category(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug == slug)
    }

    /// Display name for a category slug, or the slug itself when unknown.
    pub fn category_name<'a>(&'a self, slug: &'a str) -> &'a str {
        self.category(slug).map(|c| c.name.as_str()).unwrap_or(slug)
    }

    /// Products matching every filter, in catalog order.
    pub fn list(&self, filters: &[ListingFilter]) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| filters.iter().all(|f| f.matches(p)))
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    #[serde(default)]
    currency: Currency,
    #[serde(default)]
    categories: Vec<Category>,
    products: Vec<ProductRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductRecord {
    id: String,
    name: String,
    price: i64,
    #[serde(default)]
    original_price: Option<i64>,
    #[serde(default)]
    discount: Option<u8>,
    #[serde(default)]
    rating: f32,
    #[serde(default)]
    rating_count: u32,
    category: String,
    image: String,
    seller: Seller,
}

impl ProductRecord {
    fn into_product(self, currency: Currency) -> Product {
        Product {
            id: self.id.into(),
            name: self.name,
            price: Money::new(self.price, currency),
            original_price: self.original_price.map(|p| Money::new(p, currency)),
            discount: self.discount,
            rating: self.rating,
            rating_count: self.rating_count,
            category: self.category,
            image: self.image,
            seller: self.seller,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_builtin_id_resolves_to_itself() {
        let catalog = Catalog::builtin();
        assert!(!catalog.is_empty());
        for product in catalog.products() {
            let resolved = catalog
                .resolve(product.id.as_str(), UnknownProductPolicy::FallbackToFirst)
                .unwrap();
            assert_eq!(resolved.id, product.id);
        }
    }

    #[test]
    fn test_unknown_id_falls_back_to_first() {
        let catalog = Catalog::builtin();
        let first = &catalog.products()[0];
        let resolved = catalog
            .resolve("no-such-product", UnknownProductPolicy::FallbackToFirst)
            .unwrap();
        assert_eq!(resolved.id, first.id);

        let again = catalog
            .resolve("no-such-product", UnknownProductPolicy::FallbackToFirst)
            .unwrap();
        assert_eq!(again.id, resolved.id);
    }

    #[test]
    fn test_unknown_id_not_found_policy() {
        let catalog = Catalog::builtin();
        let err = catalog
            .resolve("no-such-product", UnknownProductPolicy::NotFound)
            .unwrap_err();
        assert_eq!(err, CommerceError::ProductNotFound("no-such-product".into()));
    }

    #[test]
    fn test_empty_catalog_never_resolves() {
        let catalog = Catalog::default();
        assert_eq!(
            catalog.resolve("1", UnknownProductPolicy::FallbackToFirst),
            Err(CommerceError::EmptyCatalog)
        );
    }

    #[test]
    fn test_related_excludes_self_and_caps() {
        let catalog = Catalog::builtin();
        for product in catalog.products() {
            let related = catalog.related(product, DEFAULT_RELATED_LIMIT);
            assert!(related.len() <= DEFAULT_RELATED_LIMIT);
            for other in related {
                assert_ne!(other.id, product.id);
                assert_eq!(other.category, product.category);
            }
        }
    }

    #[test]
    fn test_related_is_capped_for_large_category() {
        let catalog = Catalog::builtin();
        let product = catalog.get("1").unwrap();
        let same_category = catalog
            .products()
            .iter()
            .filter(|p| p.category == product.category)
            .count();
        assert!(same_category > DEFAULT_RELATED_LIMIT + 1);
        assert_eq!(catalog.related(product, DEFAULT_RELATED_LIMIT).len(), DEFAULT_RELATED_LIMIT);
    }

    #[test]
    fn test_category_name_falls_back_to_slug() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.category_name("trai-cay"), "Trái cây");
        assert_eq!(catalog.category_name("unknown-slug"), "unknown-slug");
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "categories": [{ "id": "1", "name": "Rau củ", "slug": "rau-cu" }],
            "products": [{
                "id": "a1",
                "name": "Cải bó xôi",
                "price": 28000,
                "originalPrice": 32000,
                "discount": 12,
                "rating": 4.6,
                "ratingCount": 58,
                "category": "rau-cu",
                "image": "/images/products/cai-bo-xoi.jpg",
                "seller": { "id": "cu-chi", "name": "HTX Rau sạch Củ Chi" }
            }]
        }"#;

        let catalog = Catalog::from_json(json).unwrap();
        let product = catalog.get("a1").unwrap();
        assert_eq!(product.price, Money::vnd(28000));
        assert_eq!(product.original_price, Some(Money::vnd(32000)));
        assert_eq!(product.rating_count, 58);
        assert_eq!(catalog.categories().len(), 1);
        assert_eq!(catalog.currency(), Some(Currency::VND));
    }

    #[test]
    fn test_catalog_currency() {
        assert_eq!(Catalog::builtin().currency(), Some(Currency::VND));
        assert_eq!(Catalog::default().currency(), None);
    }

    #[test]
    fn test_from_json_rejects_malformed_document() {
        let err = Catalog::from_json(r#"{ "products": [{ "id": 1 }] }"#).unwrap_err();
        assert!(matches!(err, CommerceError::SerializationError(_)));
    }
}
