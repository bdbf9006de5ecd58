//! Trusted-proxy identity extraction.
//!
//! The service sits behind an authenticating reverse proxy that verifies the
//! caller and forwards the principal as headers. [`RequireUser`] turns those
//! headers into a resolved [`UserContext`] before the handler body runs:
//! missing identity is 401, an unpermitted role set is 403, and a principal
//! with no directory entry is 404 - in that order, with no store mutation on
//! any failure path.

use axum::extract::FromRequestParts;
use axum::http::HeaderMap;
use axum::http::request::Parts;
use cartwheel_core::{Role, UserId};

use crate::error::ApiError;
use crate::state::AppState;

/// Header carrying the verified principal name.
pub const USER_HEADER: &str = "x-auth-user";
/// Header carrying the principal's roles, comma-separated.
pub const ROLES_HEADER: &str = "x-auth-roles";

/// Roles permitted to call any of the shop APIs.
const ALLOWED_ROLES: &[Role] = &[Role::User, Role::Admin];

/// The verified identity as forwarded by the proxy.
#[derive(Debug, Clone)]
pub struct Principal {
    /// Principal name; matches `users.username` in the directory.
    pub username: String,
    /// Verified roles. Unrecognized role tokens are dropped.
    pub roles: Vec<Role>,
}

impl Principal {
    /// Parse the identity headers. `None` when no (non-empty) principal name
    /// is present.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let username = headers
            .get(USER_HEADER)?
            .to_str()
            .ok()
            .map(str::trim)
            .filter(|name| !name.is_empty())?
            .to_owned();

        let roles = headers
            .get(ROLES_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(|value| {
                value
                    .split(',')
                    .filter_map(|token| token.parse::<Role>().ok())
                    .collect()
            })
            .unwrap_or_default();

        Some(Self { username, roles })
    }

    /// Whether the principal holds at least one of the given roles.
    #[must_use]
    pub fn has_any(&self, allowed: &[Role]) -> bool {
        self.roles.iter().any(|role| allowed.contains(role))
    }
}

/// Identity resolved against the user directory.
#[derive(Debug, Clone)]
pub struct UserContext {
    /// Internal user id for the principal.
    pub id: UserId,
    /// Roles forwarded by the proxy.
    pub roles: Vec<Role>,
}

/// Extractor requiring an authenticated user with the USER or ADMIN role.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(RequireUser(user): RequireUser) -> impl IntoResponse {
///     format!("user id {}", user.id)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireUser(pub UserContext);

impl FromRequestParts<AppState> for RequireUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let principal =
            Principal::from_headers(&parts.headers).ok_or(ApiError::Unauthorized)?;

        if !principal.has_any(ALLOWED_ROLES) {
            return Err(ApiError::Forbidden);
        }

        let user = state
            .users()
            .find_by_username(&principal.username)
            .await?
            .ok_or(ApiError::UserNotFound)?;

        Ok(Self(UserContext {
            id: user.id,
            roles: principal.roles,
        }))
    }
}
