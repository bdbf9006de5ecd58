//! Shopping cart queries.

use async_trait::async_trait;
use cartwheel_core::{ProductId, UserId};
use rust_decimal::Decimal;
use sqlx::{PgExecutor, PgPool};

use super::RepositoryError;
use crate::models::{CartItem, Product, ShoppingCart};
use crate::stores::CartStore;

/// Postgres-backed shopping cart store.
#[derive(Debug, Clone)]
pub struct PgCartStore {
    pool: PgPool,
}

impl PgCartStore {
    /// Create a store over the given pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct CartRow {
    product_id: i32,
    quantity: i32,
    discount_percent: Decimal,
    name: String,
    price: Decimal,
    description: String,
}

impl From<CartRow> for CartItem {
    fn from(row: CartRow) -> Self {
        let product = Product {
            product_id: ProductId::new(row.product_id),
            name: row.name,
            price: row.price,
            description: row.description,
        };
        Self::new(product, row.quantity, row.discount_percent)
    }
}

/// Read a user's cart rows joined with current product data.
///
/// Shared with checkout, which needs the same read inside its transaction.
pub(crate) async fn fetch_cart<'e, E>(
    executor: E,
    user_id: UserId,
) -> Result<ShoppingCart, RepositoryError>
where
    E: PgExecutor<'e>,
{
    let rows: Vec<CartRow> = sqlx::query_as(
        r"
        SELECT c.product_id, c.quantity, c.discount_percent,
               p.name, p.price, p.description
        FROM shopping_cart_items c
        JOIN products p ON p.product_id = c.product_id
        WHERE c.user_id = $1
        ",
    )
    .bind(user_id)
    .fetch_all(executor)
    .await?;

    let mut cart = ShoppingCart::default();
    for row in rows {
        cart.add(CartItem::from(row));
    }
    Ok(cart)
}

#[async_trait]
impl CartStore for PgCartStore {
    async fn get(&self, user_id: UserId) -> Result<ShoppingCart, RepositoryError> {
        fetch_cart(&self.pool, user_id).await
    }

    async fn add_item(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<(), RepositoryError> {
        // Atomic upsert: two concurrent adds both land as increments, unlike
        // a read-then-write which could lose one.
        sqlx::query(
            r"
            INSERT INTO shopping_cart_items (user_id, product_id, quantity)
            VALUES ($1, $2, 1)
            ON CONFLICT (user_id, product_id)
            DO UPDATE SET quantity = shopping_cart_items.quantity + 1
            ",
        )
        .bind(user_id)
        .bind(product_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_quantity(
        &self,
        user_id: UserId,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<(), RepositoryError> {
        // No row is a no-op by contract; rows_affected is deliberately unread.
        sqlx::query(
            r"
            UPDATE shopping_cart_items
            SET quantity = $3
            WHERE user_id = $1 AND product_id = $2
            ",
        )
        .bind(user_id)
        .bind(product_id)
        .bind(quantity)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn clear(&self, user_id: UserId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM shopping_cart_items WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
