//! Cart route handlers.
//!
//! The cart endpoints expose the process-owned cart store as JSON. Every
//! mutating handler responds with the resulting cart view so the caller can
//! re-render without a second request.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use bazaar_core::{Cart, LineItem, Price, ProductId};

use crate::error::AppError;
use crate::state::AppState;

/// Cart display data returned by every cart endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    /// Line items in insertion order.
    pub items: Vec<LineItem>,
    /// `sum(price * quantity)` over all lines.
    pub subtotal: Price,
    /// Total units across all lines (the badge count).
    pub item_count: u32,
}

impl CartView {
    fn of(cart: &Cart) -> Self {
        Self {
            items: cart.items().to_vec(),
            subtotal: cart.subtotal(),
            item_count: cart.total_quantity(),
        }
    }
}

/// Add to cart request body.
#[derive(Debug, Deserialize)]
pub struct AddToCartPayload {
    pub product_id: String,
    /// Units to add; defaults to 1.
    pub quantity: Option<u32>,
}

/// Update cart request body.
#[derive(Debug, Deserialize)]
pub struct UpdateCartPayload {
    pub product_id: String,
    pub quantity: u32,
}

/// Remove from cart request body.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartPayload {
    pub product_id: String,
}

/// Cart count badge payload.
#[derive(Debug, Serialize)]
pub struct CartCount {
    pub count: u32,
}

/// Checkout receipt payload.
#[derive(Debug, Serialize)]
pub struct CheckoutReceipt {
    pub total: Price,
}

/// Current cart contents.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<CartView> {
    Json(CartView::of(state.cart().cart()))
}

/// Add an item to the cart, merging quantity if the product is already
/// present. Unknown product ids are a 404, and the cart is untouched.
#[instrument(skip(state))]
pub async fn add(
    State(state): State<AppState>,
    Json(payload): Json<AddToCartPayload>,
) -> Result<Json<CartView>, AppError> {
    let id = ProductId::new(payload.product_id);
    let product = state
        .catalog()
        .get(&id)
        .cloned()
        .ok_or(AppError::ProductNotFound)?;

    let mut store = state.cart();
    store.add_item(&product, payload.quantity.unwrap_or(1));
    Ok(Json(CartView::of(store.cart())))
}

/// Replace a line's quantity. Quantities below 1 and unknown ids are
/// no-ops, not errors.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Json(payload): Json<UpdateCartPayload>,
) -> Json<CartView> {
    let id = ProductId::new(payload.product_id);
    let mut store = state.cart();
    store.update_quantity(&id, payload.quantity);
    Json(CartView::of(store.cart()))
}

/// Remove a line from the cart; absent ids are a no-op.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Json(payload): Json<RemoveFromCartPayload>,
) -> Json<CartView> {
    let id = ProductId::new(payload.product_id);
    let mut store = state.cart();
    store.remove_item(&id);
    Json(CartView::of(store.cart()))
}

/// Empty the cart unconditionally.
#[instrument(skip(state))]
pub async fn clear(State(state): State<AppState>) -> Json<CartView> {
    let mut store = state.cart();
    store.clear();
    Json(CartView::of(store.cart()))
}

/// Cart count badge.
#[instrument(skip(state))]
pub async fn count(State(state): State<AppState>) -> Json<CartCount> {
    Json(CartCount {
        count: state.cart().cart().total_quantity(),
    })
}

/// Simulated checkout: report the subtotal to the caller, then clear the
/// cart. Irreversible; there is no rollback and no external payment call.
#[instrument(skip(state))]
pub async fn checkout(State(state): State<AppState>) -> Json<CheckoutReceipt> {
    let total = state.cart().checkout();
    Json(CheckoutReceipt { total })
}
