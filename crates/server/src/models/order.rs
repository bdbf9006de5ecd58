//! Placed orders.

use cartwheel_core::{OrderId, UserId};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An order header: the point-in-time snapshot written at checkout.
///
/// Immutable once created. Address fields are copied from the profile and
/// never re-read; line items are stored separately and not returned here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Generated order identifier.
    pub order_id: OrderId,
    /// User who placed the order.
    pub user_id: UserId,
    /// When checkout ran.
    pub placed_at: DateTime<Utc>,
    /// Shipping address snapshot.
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    /// Always zero: shipping cost computation is out of scope.
    pub shipping_amount: Decimal,
}
