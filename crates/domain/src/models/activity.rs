//! Activity domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An activity as stored in `activity_list`.
///
/// The member activity views never return this row directly; it is the source
/// every projection is built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub al_id: i32,
    pub activity_name: String,
    pub activity_time: DateTime<Utc>,
    pub introduction: Option<String>,
    pub avatar: Option<String>,
    pub avatar2: Option<String>,
    pub avatar3: Option<String>,
    pub avatar4: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
    pub payment: i32,
    pub need_num: i32,
    pub area_id: i32,
    pub court_id: i32,
    pub sport_type_id: i32,
    pub founder_id: i64,
}

/// A registration row: `num` people signed up by one member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub activity_id: i32,
    pub member_id: i64,
    pub num: i32,
}

/// A favorite marker placed by a member on an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Favorite {
    pub activity_id: i32,
    pub member_id: i64,
}

/// Sums the headcount of every registration for an activity.
///
/// Returns 0 when the activity has no registrations.
pub fn registered_headcount(activity_id: i32, registrations: &[Registration]) -> i64 {
    registrations
        .iter()
        .filter(|r| r.activity_id == activity_id)
        .map(|r| i64::from(r.num))
        .sum()
}
