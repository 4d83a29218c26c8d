//! Product listing queries behind /products and /category/:slug.

use farme_commerce::catalog::{Catalog, Product};
use farme_commerce::listing::ListingFilter;

/// What a listing page shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingQuery {
    pub category: Option<String>,
    pub search: Option<String>,
}

impl ListingQuery {
    /// Every product.
    pub fn all() -> Self {
        Self::default()
    }

    /// Products matching a search box query. Blank queries list everything.
    pub fn search(query: Option<String>) -> Self {
        Self {
            category: None,
            search: query
                .map(|q| q.trim().to_string())
                .filter(|q| !q.is_empty()),
        }
    }

    /// Products in one category.
    pub fn category(slug: impl Into<String>) -> Self {
        Self {
            category: Some(slug.into()),
            search: None,
        }
    }

    pub fn filters(&self) -> Vec<ListingFilter> {
        let mut filters = Vec::new();
        if let Some(slug) = &self.category {
            filters.push(ListingFilter::category(slug.clone()));
        }
        if let Some(filter) = self.search.as_deref().and_then(ListingFilter::text) {
            filters.push(filter);
        }
        filters
    }

    /// Page heading.
    pub fn title(&self, catalog: &Catalog) -> String {
        match (&self.category, &self.search) {
            (Some(slug), _) => catalog.category_name(slug).to_string(),
            (None, Some(query)) => format!("Kết quả tìm kiếm cho \"{query}\""),
            (None, None) => "Tất cả sản phẩm".to_string(),
        }
    }

    /// Matching products in catalog order.
    pub fn run(&self, catalog: &Catalog) -> Vec<Product> {
        let products: Vec<Product> = catalog
            .list(&self.filters())
            .into_iter()
            .cloned()
            .collect();
        tracing::debug!(
            category = self.category.as_deref(),
            search = self.search.as_deref(),
            results = products.len(),
            "listing query"
        );
        products
    }
}

/// Products the home page features: everything currently discounted.
pub fn featured(catalog: &Catalog) -> Vec<Product> {
    catalog
        .products()
        .iter()
        .filter(|p| p.is_on_sale())
        .cloned()
        .collect()
}
