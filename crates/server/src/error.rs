//! Unified error handling for the HTTP boundary.
//!
//! Store calls return typed errors; this module translates them exactly once
//! into a response. Clients see two interesting outcomes: a distinct 404 for
//! an unresolvable identity, and a fixed opaque body for anything the server
//! got wrong. Internal detail is logged, never leaked.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::db::RepositoryError;
use crate::stores::CheckoutError;

/// Fixed body returned for every server-side failure.
const OPAQUE_SERVER_ERROR: &str = "Oops... our bad.";

/// Application-level error type for the Cartwheel API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Database operation failed.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Checkout failed.
    #[error("checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Authenticated principal has no corresponding user record.
    #[error("user not found")]
    UserNotFound,

    /// The user has no shipping profile row.
    #[error("profile not found")]
    ProfileNotFound,

    /// Request carried no verified identity.
    #[error("authentication required")]
    Unauthorized,

    /// Identity verified but the role set does not permit this API.
    #[error("insufficient role")]
    Forbidden,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Repository(_) | Self::Checkout(CheckoutError::Repository(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            Self::Checkout(CheckoutError::ProfileMissing | CheckoutError::EmptyCart) => {
                StatusCode::CONFLICT
            }
            Self::UserNotFound | Self::ProfileNotFound => StatusCode::NOT_FOUND,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
        }

        let message = match &self {
            Self::Repository(_) | Self::Checkout(CheckoutError::Repository(_)) => {
                OPAQUE_SERVER_ERROR.to_owned()
            }
            Self::Checkout(CheckoutError::ProfileMissing) => {
                "No shipping profile on file.".to_owned()
            }
            Self::Checkout(CheckoutError::EmptyCart) => "Shopping cart is empty.".to_owned(),
            Self::UserNotFound => "User not found.".to_owned(),
            Self::ProfileNotFound => "Profile not found.".to_owned(),
            Self::Unauthorized => "Authentication required.".to_owned(),
            Self::Forbidden => "Insufficient role.".to_owned(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;
