//! Shipping profile types.

use cartwheel_core::UserId;
use serde::{Deserialize, Serialize};

/// A user's shipping profile. One per user, keyed by user id.
///
/// Profiles are created out-of-band (at registration); this service reads
/// them and replaces their address fields wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Owning user.
    pub user_id: UserId,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// State or region.
    pub state: String,
    /// Postal code.
    pub zip: String,
}

/// Full-replace input for `PUT /profile`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}
