//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! # Profile (requires USER or ADMIN)
//! GET    /profile                       - Current user's shipping profile
//! PUT    /profile                       - Full replace, returns refetched profile
//!
//! # Cart (requires USER or ADMIN)
//! GET    /cart                          - Current cart (empty cart if no rows)
//! POST   /cart/products/{productId}     - Add one unit (add-or-increment), 201
//! PUT    /cart/products/{productId}     - Overwrite quantity
//! DELETE /cart                          - Clear cart, returns the now-empty cart
//!
//! # Orders (requires USER or ADMIN)
//! POST   /orders                        - Checkout: cart -> order, 201
//! ```
//!
//! `/health` and `/health/ready` are wired in `main.rs` alongside these.

pub mod cart;
pub mod orders;
pub mod profile;

use axum::Router;
use axum::routing::{get, post};

use crate::state::AppState;

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show).delete(cart::clear))
        .route(
            "/products/{product_id}",
            post(cart::add_product).put(cart::update_product),
        )
}

/// Create all routes for the shop API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/profile", get(profile::show).put(profile::update))
        .nest("/cart", cart_routes())
        .route("/orders", post(orders::checkout))
}
