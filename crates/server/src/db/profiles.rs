//! Shipping profile queries.

use async_trait::async_trait;
use cartwheel_core::UserId;
use sqlx::{PgExecutor, PgPool};

use super::RepositoryError;
use crate::models::{Profile, ProfileUpdate};
use crate::stores::ProfileStore;

/// Postgres-backed profile store.
#[derive(Debug, Clone)]
pub struct PgProfileStore {
    pool: PgPool,
}

impl PgProfileStore {
    /// Create a store over the given pool.
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ProfileRow {
    user_id: i32,
    address: String,
    city: String,
    state: String,
    zip: String,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Self {
            user_id: UserId::new(row.user_id),
            address: row.address,
            city: row.city,
            state: row.state,
            zip: row.zip,
        }
    }
}

/// Fetch a user's profile. Shared with checkout, which reads the profile
/// inside its transaction.
pub(crate) async fn fetch_profile<'e, E>(
    executor: E,
    user_id: UserId,
) -> Result<Option<Profile>, RepositoryError>
where
    E: PgExecutor<'e>,
{
    let row: Option<ProfileRow> = sqlx::query_as(
        r"
        SELECT user_id, address, city, state, zip
        FROM profiles
        WHERE user_id = $1
        ",
    )
    .bind(user_id)
    .fetch_optional(executor)
    .await?;

    Ok(row.map(Profile::from))
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn get(&self, user_id: UserId) -> Result<Option<Profile>, RepositoryError> {
        fetch_profile(&self.pool, user_id).await
    }

    async fn update(
        &self,
        user_id: UserId,
        update: &ProfileUpdate,
    ) -> Result<(), RepositoryError> {
        // Profiles are created out-of-band; updating a missing row is a no-op.
        sqlx::query(
            r"
            UPDATE profiles
            SET address = $2, city = $3, state = $4, zip = $5
            WHERE user_id = $1
            ",
        )
        .bind(user_id)
        .bind(&update.address)
        .bind(&update.city)
        .bind(&update.state)
        .bind(&update.zip)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
