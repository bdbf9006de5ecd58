//! User directory types.

use cartwheel_core::{Role, UserId};

/// A user in the directory.
///
/// The directory is read-only for this service: users are provisioned
/// out-of-band and only looked up here to map a principal name to an id.
#[derive(Debug, Clone)]
pub struct User {
    /// Internal numeric identifier.
    pub id: UserId,
    /// Login name, matching the authenticated principal's name.
    pub username: String,
    /// Role recorded in the directory.
    pub role: Role,
}
