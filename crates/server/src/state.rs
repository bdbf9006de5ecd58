//! Application state shared across handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::ServerConfig;
use crate::db::{PgCartStore, PgOrderStore, PgProfileStore, PgUserStore};
use crate::stores::{CartStore, OrderStore, ProfileStore, UserStore};

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. Stores are held as trait objects so tests
/// can bind in-memory fakes through [`AppState::with_stores`].
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    pool: PgPool,
    users: Arc<dyn UserStore>,
    carts: Arc<dyn CartStore>,
    profiles: Arc<dyn ProfileStore>,
    orders: Arc<dyn OrderStore>,
}

impl AppState {
    /// Create the production state: Postgres stores over the given pool.
    #[must_use]
    pub fn new(config: ServerConfig, pool: PgPool) -> Self {
        let users = Arc::new(PgUserStore::new(pool.clone()));
        let carts = Arc::new(PgCartStore::new(pool.clone()));
        let profiles = Arc::new(PgProfileStore::new(pool.clone()));
        let orders = Arc::new(PgOrderStore::new(pool.clone()));
        Self::with_stores(config, pool, users, carts, profiles, orders)
    }

    /// Create a state with explicit store bindings. Used by tests to swap in
    /// fakes behind the same traits.
    #[must_use]
    pub fn with_stores(
        config: ServerConfig,
        pool: PgPool,
        users: Arc<dyn UserStore>,
        carts: Arc<dyn CartStore>,
        profiles: Arc<dyn ProfileStore>,
        orders: Arc<dyn OrderStore>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                users,
                carts,
                profiles,
                orders,
            }),
        }
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// The user directory.
    #[must_use]
    pub fn users(&self) -> &dyn UserStore {
        self.inner.users.as_ref()
    }

    /// The shopping cart store.
    #[must_use]
    pub fn carts(&self) -> &dyn CartStore {
        self.inner.carts.as_ref()
    }

    /// The shipping profile store.
    #[must_use]
    pub fn profiles(&self) -> &dyn ProfileStore {
        self.inner.profiles.as_ref()
    }

    /// The order store.
    #[must_use]
    pub fn orders(&self) -> &dyn OrderStore {
        self.inner.orders.as_ref()
    }
}
