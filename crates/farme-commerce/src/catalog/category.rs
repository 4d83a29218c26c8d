//! Category types for product organization.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A product category. The catalog is flat: categories have no parents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// URL-friendly slug, also stored on each product.
    pub slug: String,
}

impl Category {
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            slug: slug.into(),
        }
    }

    /// Path of the category listing page.
    pub fn href(&self) -> String {
        format!("/category/{}", self.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_href() {
        let cat = Category::new("2", "Trái cây", "trai-cay");
        assert_eq!(cat.href(), "/category/trai-cay");
    }
}
