//! Integration tests for Bazaar.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p bazaar-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `products_api` - Catalog endpoint semantics
//! - `cart_api` - Cart and checkout flows over HTTP
//! - `cart_persistence` - Slot round-trips and degradation
//!
//! The HTTP tests drive the real router in-process via
//! `tower::ServiceExt::oneshot`; no server socket is needed.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::Path;

use axum::Router;
use bazaar_storefront::config::StorefrontConfig;
use bazaar_storefront::routes;
use bazaar_storefront::state::AppState;

/// Build an application state whose cart slot lives at `cart_path`.
#[must_use]
pub fn test_state(cart_path: &Path) -> AppState {
    let config = StorefrontConfig {
        host: std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
        port: 0,
        cart_path: cart_path.to_path_buf(),
        sentry_dsn: None,
    };
    AppState::new(config)
}

/// Build the full application router over a slot at `cart_path`.
#[must_use]
pub fn test_app(cart_path: &Path) -> Router {
    routes::app(test_state(cart_path))
}
