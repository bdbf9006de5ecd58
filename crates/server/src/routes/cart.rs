//! Cart route handlers.
//!
//! Every mutation responds with the cart re-read from the store, so clients
//! always render the authoritative state rather than patching locally.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use cartwheel_core::ProductId;
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::middleware::RequireUser;
use crate::models::ShoppingCart;
use crate::state::AppState;

/// Quantity overwrite body for `PUT /cart/products/{productId}`.
#[derive(Debug, Deserialize)]
pub struct QuantityUpdate {
    pub quantity: i32,
}

/// Get the current user's cart. A user with no cart rows gets an empty cart.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> Result<Json<ShoppingCart>> {
    let cart = state.carts().get(user.id).await?;
    Ok(Json(cart))
}

/// Add one unit of a product to the cart (add-or-increment).
#[instrument(skip(state))]
pub async fn add_product(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(product_id): Path<ProductId>,
) -> Result<(StatusCode, Json<ShoppingCart>)> {
    state.carts().add_item(user.id, product_id).await?;
    let cart = state.carts().get(user.id).await?;
    Ok((StatusCode::CREATED, Json(cart)))
}

/// Overwrite the quantity of a cart row. A missing row is a silent no-op.
#[instrument(skip(state))]
pub async fn update_product(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(product_id): Path<ProductId>,
    Json(body): Json<QuantityUpdate>,
) -> Result<Json<ShoppingCart>> {
    state
        .carts()
        .update_quantity(user.id, product_id, body.quantity)
        .await?;
    let cart = state.carts().get(user.id).await?;
    Ok(Json(cart))
}

/// Clear the cart. Idempotent; responds with the now-empty cart.
#[instrument(skip(state))]
pub async fn clear(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> Result<Json<ShoppingCart>> {
    state.carts().clear(user.id).await?;
    let cart = state.carts().get(user.id).await?;
    Ok(Json(cart))
}
