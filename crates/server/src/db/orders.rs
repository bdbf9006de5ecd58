//! Checkout: the one multi-step transactional write.

use async_trait::async_trait;
use cartwheel_core::{OrderId, UserId};
use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;

use super::{RepositoryError, carts, profiles};
use crate::models::Order;
use crate::stores::{CheckoutError, OrderStore};

/// Postgres-backed order store.
#[derive(Debug, Clone)]
pub struct PgOrderStore {
    pool: PgPool,
}

impl PgOrderStore {
    /// Create a store over the given pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderStore for PgOrderStore {
    async fn checkout(&self, user_id: UserId) -> Result<Order, CheckoutError> {
        // Everything happens inside one transaction, reads included: a
        // failure at any step rolls the whole checkout back, leaving no
        // order header, no line items, and an intact cart. Dropping the
        // transaction without commit is the rollback.
        let mut tx = self.pool.begin().await.map_err(RepositoryError::from)?;

        let cart = carts::fetch_cart(&mut *tx, user_id).await?;
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let profile = profiles::fetch_profile(&mut *tx, user_id)
            .await?
            .ok_or(CheckoutError::ProfileMissing)?;

        let placed_at = Utc::now();

        let order_id: i32 = sqlx::query_scalar(
            r"
            INSERT INTO orders (user_id, placed_at, address, city, state, zip, shipping_amount)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING order_id
            ",
        )
        .bind(user_id)
        .bind(placed_at)
        .bind(&profile.address)
        .bind(&profile.city)
        .bind(&profile.state)
        .bind(&profile.zip)
        .bind(Decimal::ZERO)
        .fetch_one(&mut *tx)
        .await?;

        // Line items are independent rows; iteration order is irrelevant.
        for item in cart.items().values() {
            sqlx::query(
                r"
                INSERT INTO order_line_items
                    (order_id, product_id, sales_price, quantity, discount_percent)
                VALUES ($1, $2, $3, $4, $5)
                ",
            )
            .bind(order_id)
            .bind(item.product.product_id)
            .bind(item.product.price)
            .bind(item.quantity)
            .bind(item.discount_percent)
            .execute(&mut *tx)
            .await?;
        }

        sqlx::query("DELETE FROM shopping_cart_items WHERE user_id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await.map_err(RepositoryError::from)?;

        Ok(Order {
            order_id: OrderId::new(order_id),
            user_id,
            placed_at,
            address: profile.address,
            city: profile.city,
            state: profile.state,
            zip: profile.zip,
            shipping_amount: Decimal::ZERO,
        })
    }
}
