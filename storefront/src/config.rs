//! Storefront configuration.

use farme_commerce::catalog::{Catalog, UnknownProductPolicy, DEFAULT_RELATED_LIMIT};
use farme_commerce::money::Currency;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Settings file compiled into the app.
const BUNDLED_CONFIG: &str = include_str!("../storefront.toml");

/// Errors reading storefront configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The TOML could not be parsed.
    #[error("Failed to parse storefront config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is out of range.
    #[error("Invalid storefront config: {0}")]
    Invalid(String),
}

/// Configuration for the storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Brand name shown in the header.
    pub name: String,
    /// Default page title.
    pub default_title: String,
    /// Stylesheet path.
    pub css_path: Option<String>,
    /// Currency the cart is priced in.
    pub currency: Currency,
    /// Maximum related products under a product.
    pub related_limit: usize,
    /// Stock figure shown next to the quantity stepper.
    pub stock_display: u32,
    /// Sales figure shown next to the rating.
    pub sold_display: String,
    /// Detail shots appended after the product image in the gallery.
    pub gallery_extra_images: Vec<String>,
    /// Image used when a product has none.
    pub placeholder_image: String,
    /// What a detail page shows for an unknown product id.
    pub unknown_product: UnknownProductPolicy,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            name: "Farme".to_string(),
            default_title: "Farme".to_string(),
            css_path: None,
            currency: Currency::VND,
            related_limit: DEFAULT_RELATED_LIMIT,
            stock_display: 500,
            sold_display: "250+".to_string(),
            gallery_extra_images: Vec::new(),
            placeholder_image: "/placeholder.svg".to_string(),
            unknown_product: UnknownProductPolicy::FallbackToFirst,
        }
    }
}

impl StorefrontConfig {
    /// Create a new configuration with the given brand name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the default page title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.default_title = title.into();
        self
    }

    /// Set the CSS file path.
    pub fn with_css(mut self, path: impl Into<String>) -> Self {
        self.css_path = Some(path.into());
        self
    }

    /// Set the related products cap.
    pub fn with_related_limit(mut self, limit: usize) -> Self {
        self.related_limit = limit;
        self
    }

    /// Set the unknown product policy.
    pub fn with_unknown_product(mut self, policy: UnknownProductPolicy) -> Self {
        self.unknown_product = policy;
        self
    }

    /// Set the cart currency.
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Parse and validate a TOML config.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check values the storefront relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.name.trim().is_empty() {
            return Err(ConfigError::Invalid("name must not be empty".to_string()));
        }
        if self.related_limit == 0 {
            return Err(ConfigError::Invalid(
                "related_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Check the config against the catalog it will price.
    ///
    /// The cart only accepts lines in its own currency, so a currency other
    /// than the catalog's would reject every add to cart.
    pub fn validate_for(&self, catalog: &Catalog) -> Result<(), ConfigError> {
        self.validate()?;
        match catalog.currency() {
            Some(priced_in) if priced_in != self.currency => Err(ConfigError::Invalid(format!(
                "currency {} does not match catalog currency {}",
                self.currency, priced_in
            ))),
            _ => Ok(()),
        }
    }

    /// The bundled `storefront.toml`, or defaults if it is invalid.
    pub fn bundled() -> Self {
        match Self::from_toml_str(BUNDLED_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "bundled storefront config rejected, using defaults");
                Self::default()
            }
        }
    }
}
