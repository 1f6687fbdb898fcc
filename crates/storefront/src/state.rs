//! Application state shared across handlers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::cart::{CartStore, FileSlot};
use crate::catalog::Catalog;
use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration, the product catalog, and the single owned cart store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    // Cart Store operations are synchronous; the mutex serializes handler
    // access so operations never observably interleave.
    cart: Mutex<CartStore<FileSlot>>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// Constructs the catalog and opens the cart store from the slot named
    /// in the configuration. A missing or malformed slot degrades to an
    /// empty cart, so construction itself cannot fail.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let catalog = Catalog::demo();
        let cart = CartStore::open(FileSlot::new(&config.cart_path));

        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                cart: Mutex::new(cart),
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Lock and return the cart store.
    ///
    /// Handlers hold the guard only across synchronous store calls, never
    /// across an await point.
    #[must_use]
    pub fn cart(&self) -> MutexGuard<'_, CartStore<FileSlot>> {
        self.inner
            .cart
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
