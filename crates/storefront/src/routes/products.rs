//! Product catalog route handlers.

use axum::{
    Json,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use bazaar_core::ProductId;

use crate::error::AppError;
use crate::state::AppState;

/// Query parameters for the products endpoint.
#[derive(Debug, Deserialize)]
pub struct ProductQuery {
    /// Optional product id filter; when present the response is a single
    /// product instead of the full list.
    pub id: Option<String>,
}

/// List all products, or look one up by `id`.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Result<Response, AppError> {
    match query.id {
        Some(id) => {
            let id = ProductId::new(id);
            state
                .catalog()
                .get(&id)
                .map(|product| Json(product.clone()).into_response())
                .ok_or(AppError::ProductNotFound)
        }
        None => Ok(Json(state.catalog().list()).into_response()),
    }
}

/// Respond to unsupported HTTP methods with 204 and an `Allow` header.
pub async fn method_not_allowed() -> impl IntoResponse {
    (StatusCode::NO_CONTENT, [(header::ALLOW, "GET")])
}
