//! Shipping profile route handlers.

use axum::Json;
use axum::extract::State;
use tracing::instrument;

use crate::error::{ApiError, Result};
use crate::middleware::RequireUser;
use crate::models::{Profile, ProfileUpdate};
use crate::state::AppState;

/// Get the current user's shipping profile.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
) -> Result<Json<Profile>> {
    let profile = state
        .profiles()
        .get(user.id)
        .await?
        .ok_or(ApiError::ProfileNotFound)?;
    Ok(Json(profile))
}

/// Full replace of the profile's address fields, returning the refetched row.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<Profile>> {
    state.profiles().update(user.id, &update).await?;
    let profile = state
        .profiles()
        .get(user.id)
        .await?
        .ok_or(ApiError::ProfileNotFound)?;
    Ok(Json(profile))
}
