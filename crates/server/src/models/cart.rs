//! Shopping cart types and totals arithmetic.

use std::collections::BTreeMap;

use cartwheel_core::ProductId;
use rust_decimal::Decimal;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Product;

/// One cart entry: a product snapshot plus quantity and discount.
///
/// At most one item exists per (user, product) pair; adding the same product
/// again increments the quantity instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// Current product data, joined in at read time.
    pub product: Product,
    /// Units of the product in the cart.
    pub quantity: i32,
    /// Discount fraction applied to this line (0.10 = 10% off).
    pub discount_percent: Decimal,
    /// Price x quantity x (1 - discount), precomputed for the wire.
    pub line_total: Decimal,
}

impl CartItem {
    /// Build an item, computing its line total.
    #[must_use]
    pub fn new(product: Product, quantity: i32, discount_percent: Decimal) -> Self {
        let line_total =
            product.price * Decimal::from(quantity) * (Decimal::ONE - discount_percent);
        Self {
            product,
            quantity,
            discount_percent,
            line_total,
        }
    }
}

/// A user's shopping cart: productId -> item, order irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShoppingCart {
    items: BTreeMap<ProductId, CartItem>,
}

impl ShoppingCart {
    /// Insert an item, replacing any existing entry for the same product.
    pub fn add(&mut self, item: CartItem) {
        self.items.insert(item.product.product_id, item);
    }

    /// Whether the cart holds the given product.
    #[must_use]
    pub fn contains(&self, product_id: ProductId) -> bool {
        self.items.contains_key(&product_id)
    }

    /// Look up the entry for a product.
    #[must_use]
    pub fn get(&self, product_id: ProductId) -> Option<&CartItem> {
        self.items.get(&product_id)
    }

    /// All entries, keyed by product.
    #[must_use]
    pub const fn items(&self) -> &BTreeMap<ProductId, CartItem> {
        &self.items
    }

    /// True when the cart holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct products in the cart.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Sum of all line totals.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.items.values().map(|item| item.line_total).sum()
    }
}

impl Serialize for ShoppingCart {
    // `total` is derived, so the cart serializes by hand rather than
    // persisting a field that could drift from the items.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ShoppingCart", 2)?;
        state.serialize_field("items", &self.items)?;
        state.serialize_field("total", &self.total())?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for ShoppingCart {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Wire {
            items: BTreeMap<ProductId, CartItem>,
            #[serde(default)]
            #[allow(dead_code)]
            total: Option<Decimal>,
        }

        let wire = Wire::deserialize(deserializer)?;
        Ok(Self { items: wire.items })
    }
}
