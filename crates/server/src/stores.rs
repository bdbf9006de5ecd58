//! Store abstractions over the relational schema.
//!
//! One trait per aggregate, with a single Postgres implementation bound into
//! [`crate::state::AppState`] at startup. Tests substitute in-memory fakes
//! behind the same traits.

use async_trait::async_trait;
use cartwheel_core::{ProductId, UserId};
use thiserror::Error;

use crate::db::RepositoryError;
use crate::models::{Order, Profile, ProfileUpdate, ShoppingCart, User};

/// Read-only directory mapping principal names to users.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up a user by login name. `None` means no such user.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError>;
}

/// Per-user shopping cart: productId -> quantity.
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Read the whole cart, joined with current product data. A user with no
    /// rows gets an empty cart, not an error.
    async fn get(&self, user_id: UserId) -> Result<ShoppingCart, RepositoryError>;

    /// Add one unit of a product: insert with quantity 1, or increment an
    /// existing row by exactly 1. Atomic.
    async fn add_item(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<(), RepositoryError>;

    /// Unconditionally overwrite a row's quantity. Updating a missing row is
    /// a silent no-op, and the value is not validated.
    async fn update_quantity(
        &self,
        user_id: UserId,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<(), RepositoryError>;

    /// Delete every row for the user. Idempotent.
    async fn clear(&self, user_id: UserId) -> Result<(), RepositoryError>;
}

/// One shipping profile per user.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch the user's profile, if one exists.
    async fn get(&self, user_id: UserId) -> Result<Option<Profile>, RepositoryError>;

    /// Full replace of the profile's address fields. A missing row is a
    /// no-op; profile creation happens out-of-band.
    async fn update(&self, user_id: UserId, update: &ProfileUpdate)
    -> Result<(), RepositoryError>;
}

/// Checkout: the one multi-step transactional operation.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Convert the user's current cart into a persisted order plus line
    /// items, then clear the cart. All-or-nothing: a failure anywhere leaves
    /// no order and an unchanged cart.
    async fn checkout(&self, user_id: UserId) -> Result<Order, CheckoutError>;
}

/// Failures specific to checkout, beyond plain storage faults.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Underlying storage fault.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// The user has no shipping profile; an order snapshot cannot be built
    /// without address fields.
    #[error("user has no shipping profile")]
    ProfileMissing,

    /// The cart has no items; a zero-line order is never meaningful.
    #[error("shopping cart is empty")]
    EmptyCart,
}

impl From<sqlx::Error> for CheckoutError {
    fn from(e: sqlx::Error) -> Self {
        Self::Repository(RepositoryError::Database(e))
    }
}
