//! Shared storefront context: store, catalog and config.

use farme_commerce::cart::Cart;
use farme_commerce::catalog::Catalog;
use farme_commerce::money::Currency;
use farme_store::{Action, StoreError, StoreState};
use leptos::prelude::*;

use crate::config::StorefrontConfig;

/// Reactive handle to the application store.
///
/// Components read through it to subscribe and write through [`dispatch`].
///
/// [`dispatch`]: StoreContext::dispatch
#[derive(Clone, Copy)]
pub struct StoreContext {
    state: RwSignal<StoreState>,
}

impl StoreContext {
    pub fn new(currency: Currency) -> Self {
        Self {
            state: RwSignal::new(StoreState::new(currency)),
        }
    }

    pub fn total_items(&self) -> i64 {
        self.state.with(StoreState::total_items)
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.with(StoreState::is_authenticated)
    }

    pub fn cart(&self) -> Cart {
        self.state.with(|s| s.cart.clone())
    }

    /// Apply an action and notify subscribers.
    pub fn dispatch(&self, action: Action) -> Result<(), StoreError> {
        let mut result = Ok(());
        self.state.update(|s| result = s.dispatch(action));
        result
    }
}

/// Provide store, catalog and config to everything below the caller.
///
/// The cart is priced in the catalog's currency. A config naming another
/// currency is logged and corrected.
pub fn provide_storefront(config: StorefrontConfig) {
    let catalog = Catalog::builtin();
    let config = match config.validate_for(&catalog) {
        Ok(()) => config,
        Err(e) => {
            tracing::warn!(error = %e, "storefront config does not fit the catalog");
            let currency = catalog.currency().unwrap_or(config.currency);
            config.with_currency(currency)
        }
    };

    provide_context(StoreContext::new(config.currency));
    provide_context(StoredValue::new(catalog));
    provide_context(StoredValue::new(config));
}

pub fn use_store() -> StoreContext {
    expect_context::<StoreContext>()
}

pub fn use_catalog() -> StoredValue<Catalog> {
    expect_context::<StoredValue<Catalog>>()
}

pub fn use_config() -> StoredValue<StorefrontConfig> {
    expect_context::<StoredValue<StorefrontConfig>>()
}
