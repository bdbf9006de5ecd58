//! Checkout route handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::instrument;

use crate::error::Result;
use crate::middleware::RequireUser;
use crate::models::Order;
use crate::state::AppState;

/// Checkout: convert the current cart into a persisted order and clear the
/// cart. Returns the order header only; line items are not re-read.
#[instrument(skip(state))]
pub async fn checkout(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> Result<(StatusCode, Json<Order>)> {
    let order = state.orders().checkout(user.id).await?;
    tracing::info!(order_id = %order.order_id, "order placed");
    Ok((StatusCode::CREATED, Json(order)))
}
