use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::models::ActivityListResponse;
use domain::services::StoreError;
use thiserror::Error;

/// Client message for a failed query when raw errors are hidden.
pub const OPAQUE_DATABASE_ERROR: &str = "failed to load activities";

/// Client message for a timed-out query when raw errors are hidden.
pub const OPAQUE_TIMEOUT_ERROR: &str = "activity query timed out";

/// Failure of a member activity listing.
///
/// Every variant is rendered as HTTP 200 with the listing envelope
/// `{success: false, activities: [], error}`; clients only look at the body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid member id")]
    InvalidMemberId,

    #[error("member has created no activities")]
    NoCreatedActivities,

    #[error("no favorited activities")]
    NoFavoriteActivities,

    #[error("activity query failed: {source}")]
    Store {
        #[source]
        source: StoreError,
        /// Whether the driver message may reach the client.
        expose: bool,
    },
}

impl ApiError {
    pub fn store(source: StoreError, expose: bool) -> Self {
        ApiError::Store { source, expose }
    }

    /// Text placed in the response's `error` field.
    pub fn client_message(&self) -> String {
        match self {
            ApiError::Store { source, expose } => match (source, expose) {
                (StoreError::Database(msg), true) => msg.clone(),
                (StoreError::Timeout(_), true) => source.to_string(),
                (StoreError::Database(_), false) => OPAQUE_DATABASE_ERROR.to_string(),
                (StoreError::Timeout(_), false) => OPAQUE_TIMEOUT_ERROR.to_string(),
            },
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Store { source, .. } = &self {
            tracing::error!(error = %source, "Member activity query failed");
        }

        let body = ActivityListResponse::<serde_json::Value>::failure(self.client_message());
        (StatusCode::OK, Json(body)).into_response()
    }
}
