//! Member activity listing handlers.
//!
//! All three endpoints answer HTTP 200; the outcome is carried by the
//! `success` flag and `error` message of [`ActivityListResponse`].

use axum::{extract::State, Json};
use tracing::debug;

use domain::models::{
    ActivityListResponse, CreatedActivityResponse, FavoriteActivityResponse,
    RegisteredActivityResponse,
};
use domain::services::StoreError;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::MemberIdParam;

impl AppState {
    fn store_failure(&self, source: StoreError) -> ApiError {
        ApiError::store(source, self.config.display.expose_database_errors)
    }
}

/// List activities the member registered for.
///
/// GET /:member_id/activities
///
/// An unknown or invalid member id is not rejected; it just matches nothing
/// and yields an empty successful listing.
pub async fn list_registered_activities(
    State(state): State<AppState>,
    MemberIdParam(member_id): MemberIdParam,
) -> Result<Json<ActivityListResponse<RegisteredActivityResponse>>, ApiError> {
    let rows = state
        .activities
        .registered_activities(member_id)
        .await
        .map_err(|e| state.store_failure(e))?;

    debug!(member_id, count = rows.len(), "Registered activities listed");

    let tz = &state.config.display.timezone;
    Ok(Json(ActivityListResponse::ok(
        rows.into_iter().map(|r| r.into_response(tz)).collect(),
    )))
}

/// List activities founded by the member.
///
/// GET /:member_id/created-activities
pub async fn list_created_activities(
    State(state): State<AppState>,
    member_id: MemberIdParam,
) -> Result<Json<ActivityListResponse<CreatedActivityResponse>>, ApiError> {
    if !member_id.is_valid() {
        return Err(ApiError::InvalidMemberId);
    }

    let rows = state
        .activities
        .created_activities(member_id.0)
        .await
        .map_err(|e| state.store_failure(e))?;

    if rows.is_empty() {
        return Err(ApiError::NoCreatedActivities);
    }

    debug!(member_id = member_id.0, count = rows.len(), "Created activities listed");

    let tz = &state.config.display.timezone;
    Ok(Json(ActivityListResponse::ok_with_empty_error(
        rows.into_iter().map(|r| r.into_response(tz)).collect(),
    )))
}

/// List activities the member favorited.
///
/// GET /:member_id/favorites
pub async fn list_favorite_activities(
    State(state): State<AppState>,
    member_id: MemberIdParam,
) -> Result<Json<ActivityListResponse<FavoriteActivityResponse>>, ApiError> {
    if !member_id.is_valid() {
        return Err(ApiError::InvalidMemberId);
    }

    let rows = state
        .activities
        .favorite_activities(member_id.0)
        .await
        .map_err(|e| state.store_failure(e))?;

    if rows.is_empty() {
        return Err(ApiError::NoFavoriteActivities);
    }

    debug!(member_id = member_id.0, count = rows.len(), "Favorite activities listed");

    let tz = &state.config.display.timezone;
    Ok(Json(ActivityListResponse::ok_with_empty_error(
        rows.into_iter().map(|r| r.into_response(tz)).collect(),
    )))
}
