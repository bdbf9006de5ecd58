//! Catalog product snapshot.

use cartwheel_core::ProductId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog product as seen by the cart.
///
/// The catalog is an external collaborator; this is the slice of product
/// data the cart and checkout snapshot from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Catalog identifier.
    pub product_id: ProductId,
    /// Display name.
    pub name: String,
    /// Current unit price.
    pub price: Decimal,
    /// Short description.
    #[serde(default)]
    pub description: String,
}
