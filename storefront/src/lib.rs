//! Farme storefront.
//!
//! A client-rendered Leptos app over the `farme-commerce` catalog and the
//! `farme-store` cart/user store:
//! - Header with navigation, category dropdown, search and cart badge
//! - Product detail page with gallery, quantity stepper and related products
//! - Listing, category and cart pages

pub mod app;
pub mod components;
pub mod config;
pub mod pages;
pub mod state;
pub mod store;

pub use config::{ConfigError, StorefrontConfig};

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}
