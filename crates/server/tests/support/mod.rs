//! Shared test support: an in-memory shop implementing the store traits,
//! plus helpers for driving the router without a running server.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, Response, StatusCode, header};
use cartwheel_core::{OrderId, ProductId, Role, UserId};
use chrono::Utc;
use rust_decimal::Decimal;
use secrecy::SecretString;
use serde_json::Value;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceExt;

use cartwheel_server::config::ServerConfig;
use cartwheel_server::db::RepositoryError;
use cartwheel_server::models::{CartItem, Order, Product, Profile, ProfileUpdate, ShoppingCart, User};
use cartwheel_server::routes;
use cartwheel_server::state::AppState;
use cartwheel_server::stores::{CartStore, CheckoutError, OrderStore, ProfileStore, UserStore};

/// A line item snapshot recorded by the fake at checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub sales_price: Decimal,
    pub quantity: i32,
    pub discount_percent: Decimal,
}

/// In-memory implementation of all four store traits, mirroring the
/// relational semantics so handler tests run without Postgres.
#[derive(Default)]
pub struct InMemoryShop {
    users: Mutex<Vec<User>>,
    products: Mutex<BTreeMap<ProductId, Product>>,
    cart_rows: Mutex<BTreeMap<(UserId, ProductId), i32>>,
    profiles: Mutex<BTreeMap<UserId, Profile>>,
    orders: Mutex<Vec<Order>>,
    order_lines: Mutex<Vec<OrderLine>>,
    next_order_id: AtomicI32,
    fail_all: AtomicBool,
}

#[allow(clippy::unwrap_used, dead_code)]
impl InMemoryShop {
    pub fn new() -> Arc<Self> {
        let shop = Self::default();
        shop.next_order_id.store(1, Ordering::SeqCst);
        Arc::new(shop)
    }

    pub fn seed_user(&self, id: i32, username: &str, role: Role) -> UserId {
        let id = UserId::new(id);
        self.users.lock().unwrap().push(User {
            id,
            username: username.to_owned(),
            role,
        });
        id
    }

    pub fn seed_product(&self, id: i32, name: &str, price: &str) -> ProductId {
        let id = ProductId::new(id);
        self.products.lock().unwrap().insert(
            id,
            Product {
                product_id: id,
                name: name.to_owned(),
                price: price.parse().unwrap(),
                description: String::new(),
            },
        );
        id
    }

    pub fn seed_profile(&self, user_id: UserId, address: &str, city: &str, state: &str, zip: &str) {
        self.profiles.lock().unwrap().insert(
            user_id,
            Profile {
                user_id,
                address: address.to_owned(),
                city: city.to_owned(),
                state: state.to_owned(),
                zip: zip.to_owned(),
            },
        );
    }

    /// Make every subsequent store call fail, to exercise the opaque 500 path.
    pub fn poison(&self) {
        self.fail_all.store(true, Ordering::SeqCst);
    }

    pub fn cart_quantity(&self, user_id: UserId, product_id: ProductId) -> Option<i32> {
        self.cart_rows
            .lock()
            .unwrap()
            .get(&(user_id, product_id))
            .copied()
    }

    pub fn cart_row_count(&self) -> usize {
        self.cart_rows.lock().unwrap().len()
    }

    pub fn orders(&self) -> Vec<Order> {
        self.orders.lock().unwrap().clone()
    }

    pub fn order_lines(&self) -> Vec<OrderLine> {
        self.order_lines.lock().unwrap().clone()
    }

    fn check(&self) -> Result<(), RepositoryError> {
        if self.fail_all.load(Ordering::SeqCst) {
            return Err(RepositoryError::DataCorruption(
                "injected test failure".to_owned(),
            ));
        }
        Ok(())
    }

    fn read_cart(&self, user_id: UserId) -> Result<ShoppingCart, RepositoryError> {
        let products = self.products.lock().unwrap();
        let rows = self.cart_rows.lock().unwrap();

        let mut cart = ShoppingCart::default();
        for (&(owner, product_id), &quantity) in rows.iter() {
            if owner != user_id {
                continue;
            }
            let product = products.get(&product_id).cloned().ok_or_else(|| {
                RepositoryError::DataCorruption(format!("cart references unknown {product_id}"))
            })?;
            cart.add(CartItem::new(product, quantity, Decimal::ZERO));
        }
        Ok(cart)
    }
}

#[async_trait]
#[allow(clippy::unwrap_used)]
impl UserStore for InMemoryShop {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepositoryError> {
        self.check()?;
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.username == username)
            .cloned())
    }
}

#[async_trait]
#[allow(clippy::unwrap_used)]
impl CartStore for InMemoryShop {
    async fn get(&self, user_id: UserId) -> Result<ShoppingCart, RepositoryError> {
        self.check()?;
        self.read_cart(user_id)
    }

    async fn add_item(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<(), RepositoryError> {
        self.check()?;
        if !self.products.lock().unwrap().contains_key(&product_id) {
            // Mirrors the foreign-key violation a real insert would hit.
            return Err(RepositoryError::DataCorruption(format!(
                "unknown {product_id}"
            )));
        }
        *self
            .cart_rows
            .lock()
            .unwrap()
            .entry((user_id, product_id))
            .or_insert(0) += 1;
        Ok(())
    }

    async fn update_quantity(
        &self,
        user_id: UserId,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<(), RepositoryError> {
        self.check()?;
        if let Some(row) = self.cart_rows.lock().unwrap().get_mut(&(user_id, product_id)) {
            *row = quantity;
        }
        Ok(())
    }

    async fn clear(&self, user_id: UserId) -> Result<(), RepositoryError> {
        self.check()?;
        self.cart_rows
            .lock()
            .unwrap()
            .retain(|&(owner, _), _| owner != user_id);
        Ok(())
    }
}

#[async_trait]
#[allow(clippy::unwrap_used)]
impl ProfileStore for InMemoryShop {
    async fn get(&self, user_id: UserId) -> Result<Option<Profile>, RepositoryError> {
        self.check()?;
        Ok(self.profiles.lock().unwrap().get(&user_id).cloned())
    }

    async fn update(
        &self,
        user_id: UserId,
        update: &ProfileUpdate,
    ) -> Result<(), RepositoryError> {
        self.check()?;
        if let Some(profile) = self.profiles.lock().unwrap().get_mut(&user_id) {
            profile.address = update.address.clone();
            profile.city = update.city.clone();
            profile.state = update.state.clone();
            profile.zip = update.zip.clone();
        }
        Ok(())
    }
}

#[async_trait]
#[allow(clippy::unwrap_used)]
impl OrderStore for InMemoryShop {
    async fn checkout(&self, user_id: UserId) -> Result<Order, CheckoutError> {
        self.check()?;

        let cart = self.read_cart(user_id)?;
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        let profile = self
            .profiles
            .lock()
            .unwrap()
            .get(&user_id)
            .cloned()
            .ok_or(CheckoutError::ProfileMissing)?;

        let order_id = OrderId::new(self.next_order_id.fetch_add(1, Ordering::SeqCst));
        let order = Order {
            order_id,
            user_id,
            placed_at: Utc::now(),
            address: profile.address,
            city: profile.city,
            state: profile.state,
            zip: profile.zip,
            shipping_amount: Decimal::ZERO,
        };

        let mut lines = self.order_lines.lock().unwrap();
        for item in cart.items().values() {
            lines.push(OrderLine {
                order_id,
                product_id: item.product.product_id,
                sales_price: item.product.price,
                quantity: item.quantity,
                discount_percent: item.discount_percent,
            });
        }
        drop(lines);

        self.orders.lock().unwrap().push(order.clone());
        self.cart_rows
            .lock()
            .unwrap()
            .retain(|&(owner, _), _| owner != user_id);

        Ok(order)
    }
}

/// Build the real router over the fake stores.
#[allow(clippy::unwrap_used, dead_code)]
pub fn app(shop: &Arc<InMemoryShop>) -> Router {
    let config = ServerConfig {
        database_url: SecretString::from("postgres://localhost/cartwheel_test"),
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
    };
    // Lazy pool: never connected, only present to satisfy the state shape.
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://localhost/cartwheel_test")
        .unwrap();

    let state = AppState::with_stores(
        config,
        pool,
        shop.clone(),
        shop.clone(),
        shop.clone(),
        shop.clone(),
    );

    routes::routes().with_state(state)
}

/// Build a request carrying the trusted-proxy identity headers.
#[allow(clippy::unwrap_used, dead_code)]
pub fn request(
    method: &str,
    uri: &str,
    identity: Option<(&str, &str)>,
    body: Option<Value>,
) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some((user, roles)) = identity {
        builder = builder.header("x-auth-user", user).header("x-auth-roles", roles);
    }
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

/// Send one request through the router and collect status + raw body.
#[allow(clippy::unwrap_used, dead_code)]
pub async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response: Response<_> = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

/// Send and parse the body as JSON.
#[allow(clippy::unwrap_used, dead_code)]
pub async fn send_json(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let (status, body) = send(app, req).await;
    let json = serde_json::from_slice(&body).unwrap();
    (status, json)
}
