//! Member activity projections.
//!
//! Each listing endpoint has its own record type so the shape returned to
//! clients is fixed per endpoint. Records carry raw instants; the response
//! types carry display strings produced with a [`DisplayTimeZone`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use shared::datetime::DisplayTimeZone;

/// Columns common to every member activity listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivitySummary {
    pub al_id: i32,
    pub activity_name: String,
    pub activity_time: DateTime<Utc>,
    pub introduction: Option<String>,
    pub avatar: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
    pub payment: i32,
    pub need_num: i32,
    /// Sum of `num` over every registration for the activity.
    pub registered_people: i64,
    pub sport_name: String,
    pub court_name: String,
}

/// An activity the member has registered for.
#[derive(Debug, Clone, PartialEq)]
pub struct RegisteredActivity {
    pub summary: ActivitySummary,
    pub founder_name: String,
}

/// An activity the member founded.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedActivity {
    pub summary: ActivitySummary,
    pub avatar2: Option<String>,
    pub avatar3: Option<String>,
    pub avatar4: Option<String>,
    pub area_id: i32,
    pub court_id: i32,
    pub sport_type_id: i32,
    /// Whether the founder also favorited their own activity.
    pub is_favorite: bool,
}

/// An activity the member has favorited.
#[derive(Debug, Clone, PartialEq)]
pub struct FavoriteActivity {
    pub summary: ActivitySummary,
    pub founder_name: String,
}

/// Display form of [`ActivitySummary`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivitySummaryView {
    pub al_id: i32,
    pub activity_name: String,
    pub activity_time: String,
    pub introduction: Option<String>,
    pub avatar: Option<String>,
    pub deadline: Option<String>,
    pub payment: i32,
    pub need_num: i32,
    pub registered_people: i64,
    pub sport_name: String,
    pub court_name: String,
}

impl ActivitySummary {
    /// Renders timestamps in the given zone.
    pub fn into_view(self, tz: &DisplayTimeZone) -> ActivitySummaryView {
        ActivitySummaryView {
            al_id: self.al_id,
            activity_name: self.activity_name,
            activity_time: tz.format(self.activity_time),
            introduction: self.introduction,
            avatar: self.avatar,
            deadline: tz.format_opt(self.deadline),
            payment: self.payment,
            need_num: self.need_num,
            registered_people: self.registered_people,
            sport_name: self.sport_name,
            court_name: self.court_name,
        }
    }
}

/// Item of `GET /:memberId/activities`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisteredActivityResponse {
    #[serde(flatten)]
    pub summary: ActivitySummaryView,
    /// Founder display name.
    pub name: String,
    pub is_registered: bool,
}

/// Item of `GET /:memberId/created-activities`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedActivityResponse {
    #[serde(flatten)]
    pub summary: ActivitySummaryView,
    pub avatar2: Option<String>,
    pub avatar3: Option<String>,
    pub avatar4: Option<String>,
    pub area_id: i32,
    pub court_id: i32,
    pub sport_type_id: i32,
    pub is_favorite: bool,
}

/// Item of `GET /:memberId/favorites`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteActivityResponse {
    #[serde(flatten)]
    pub summary: ActivitySummaryView,
    /// Founder display name.
    pub name: String,
    pub is_favorite: bool,
}

impl RegisteredActivity {
    pub fn into_response(self, tz: &DisplayTimeZone) -> RegisteredActivityResponse {
        RegisteredActivityResponse {
            summary: self.summary.into_view(tz),
            name: self.founder_name,
            is_registered: true,
        }
    }
}

impl CreatedActivity {
    pub fn into_response(self, tz: &DisplayTimeZone) -> CreatedActivityResponse {
        CreatedActivityResponse {
            summary: self.summary.into_view(tz),
            avatar2: self.avatar2,
            avatar3: self.avatar3,
            avatar4: self.avatar4,
            area_id: self.area_id,
            court_id: self.court_id,
            sport_type_id: self.sport_type_id,
            is_favorite: self.is_favorite,
        }
    }
}

impl FavoriteActivity {
    pub fn into_response(self, tz: &DisplayTimeZone) -> FavoriteActivityResponse {
        FavoriteActivityResponse {
            summary: self.summary.into_view(tz),
            name: self.founder_name,
            is_favorite: true,
        }
    }
}

/// Envelope shared by the member activity listings.
///
/// HTTP status is always 200; `success` and `error` carry the outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityListResponse<T> {
    pub success: bool,
    pub activities: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ActivityListResponse<T> {
    /// Successful listing without an `error` key.
    pub fn ok(activities: Vec<T>) -> Self {
        Self {
            success: true,
            activities,
            error: None,
        }
    }

    /// Successful listing that still reports `error: ""`.
    pub fn ok_with_empty_error(activities: Vec<T>) -> Self {
        Self {
            success: true,
            activities,
            error: Some(String::new()),
        }
    }

    /// Failed listing with an empty `activities` array.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            activities: Vec::new(),
            error: Some(message.into()),
        }
    }
}
