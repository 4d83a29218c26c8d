//! Listing filter types.

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// A filter applied to the product listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ListingFilter {
    /// Products in one category, by slug.
    Category(String),
    /// Products whose name contains the text, ignoring case.
    Text(String),
}

impl ListingFilter {
    /// Create a category filter.
    pub fn category(slug: impl Into<String>) -> Self {
        ListingFilter::Category(slug.into())
    }

    /// Create a text filter from a search box query.
    ///
    /// Returns None for a blank query, which should not filter anything.
    pub fn text(query: &str) -> Option<Self> {
        let query = query.trim();
        if query.is_empty() {
            None
        } else {
            Some(ListingFilter::Text(query.to_lowercase()))
        }
    }

    /// Check whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            ListingFilter::Category(slug) => product.category.eq_ignore_ascii_case(slug),
            ListingFilter::Text(needle) => product.name.to_lowercase().contains(needle.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_category_filter_keeps_only_that_category() {
        let catalog = Catalog::builtin();
        let fruit = catalog.list(&[ListingFilter::category("trai-cay")]);
        assert!(!fruit.is_empty());
        assert!(fruit.iter().all(|p| p.category == "trai-cay"));
    }

    #[test]
    fn test_text_filter_ignores_case() {
        let catalog = Catalog::builtin();
        let filter = ListingFilter::text("  GẠO ").unwrap();
        let rice = catalog.list(&[filter]);
        assert_eq!(rice.len(), 2);
        assert!(rice.iter().all(|p| p.name.to_lowercase().contains("gạo")));
    }

    #[test]
    fn test_blank_text_is_no_filter() {
        assert_eq!(ListingFilter::text("   "), None);
    }

    #[test]
    fn test_filters_combine() {
        let catalog = Catalog::builtin();
        let filters = [
            ListingFilter::category("rau-cu"),
            ListingFilter::text("đà lạt").unwrap(),
        ];
        let found = catalog.list(&filters);
        let ids: Vec<&str> = found.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);
    }

    #[test]
    fn test_unknown_category_lists_nothing() {
        let catalog = Catalog::builtin();
        assert!(catalog.list(&[ListingFilter::category("khong-co")]).is_empty());
    }
}
