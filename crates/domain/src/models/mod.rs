//! Domain models for member activities.

pub mod activity;
pub mod member_activity;

pub use activity::{Activity, Favorite, Registration};
pub use member_activity::{
    ActivityListResponse, ActivitySummary, ActivitySummaryView, CreatedActivity,
    CreatedActivityResponse, FavoriteActivity, FavoriteActivityResponse, RegisteredActivity,
    RegisteredActivityResponse,
};
