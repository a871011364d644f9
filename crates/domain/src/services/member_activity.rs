//! Member activity lookup capability.
//!
//! Handlers depend on [`MemberActivityStore`] rather than on a database pool so
//! the listing rules can be exercised without PostgreSQL.

use std::collections::{BTreeSet, HashMap};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use thiserror::Error;

use crate::models::activity::{registered_headcount, Activity, Favorite, Registration};
use crate::models::member_activity::{
    ActivitySummary, CreatedActivity, FavoriteActivity, RegisteredActivity,
};

/// Failure reported by a member activity store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(String),

    #[error("query timed out after {0:?}")]
    Timeout(Duration),
}

/// Read access to the activities a member is involved with.
///
/// Every method returns rows ordered by activity id.
#[async_trait::async_trait]
pub trait MemberActivityStore: Send + Sync {
    /// Activities the member holds at least one registration for.
    async fn registered_activities(
        &self,
        member_id: i64,
    ) -> Result<Vec<RegisteredActivity>, StoreError>;

    /// Activities founded by the member.
    async fn created_activities(&self, member_id: i64)
        -> Result<Vec<CreatedActivity>, StoreError>;

    /// Activities the member has favorited.
    async fn favorite_activities(
        &self,
        member_id: i64,
    ) -> Result<Vec<FavoriteActivity>, StoreError>;
}

/// In-memory store for development and testing.
///
/// Holds the same tables the SQL queries join and applies the same join
/// rules: an activity whose sport type, court, or founder is unknown is
/// skipped, exactly as an inner join would drop it.
#[derive(Debug, Default)]
pub struct MockMemberActivityStore {
    activities: Vec<Activity>,
    registrations: Vec<Registration>,
    favorites: Vec<Favorite>,
    members: HashMap<i64, String>,
    sport_types: HashMap<i32, String>,
    courts: HashMap<i32, String>,
    /// Whether to simulate failures for testing.
    simulate_failure: bool,
    queries: AtomicUsize,
}

impl MockMemberActivityStore {
    /// Create an empty mock store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock store whose every query fails.
    pub fn failing() -> Self {
        Self {
            simulate_failure: true,
            ..Self::default()
        }
    }

    pub fn with_member(mut self, id: i64, name: impl Into<String>) -> Self {
        self.members.insert(id, name.into());
        self
    }

    pub fn with_sport_type(mut self, id: i32, name: impl Into<String>) -> Self {
        self.sport_types.insert(id, name.into());
        self
    }

    pub fn with_court(mut self, id: i32, name: impl Into<String>) -> Self {
        self.courts.insert(id, name.into());
        self
    }

    pub fn with_activity(mut self, activity: Activity) -> Self {
        self.activities.push(activity);
        self
    }

    pub fn with_registration(mut self, activity_id: i32, member_id: i64, num: i32) -> Self {
        self.registrations.push(Registration {
            activity_id,
            member_id,
            num,
        });
        self
    }

    pub fn with_favorite(mut self, activity_id: i32, member_id: i64) -> Self {
        self.favorites.push(Favorite {
            activity_id,
            member_id,
        });
        self
    }

    /// Number of queries issued against this store.
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    fn begin_query(&self, name: &str, member_id: i64) -> Result<(), StoreError> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        if self.simulate_failure {
            tracing::warn!(
                query = name,
                member_id = member_id,
                "Mock member activity store simulating failure"
            );
            return Err(StoreError::Database(
                "simulated connection failure".to_string(),
            ));
        }
        Ok(())
    }

    fn summary(&self, activity: &Activity) -> Option<ActivitySummary> {
        let sport_name = self.sport_types.get(&activity.sport_type_id)?;
        let court_name = self.courts.get(&activity.court_id)?;
        Some(ActivitySummary {
            al_id: activity.al_id,
            activity_name: activity.activity_name.clone(),
            activity_time: activity.activity_time,
            introduction: activity.introduction.clone(),
            avatar: activity.avatar.clone(),
            deadline: activity.deadline,
            payment: activity.payment,
            need_num: activity.need_num,
            registered_people: registered_headcount(activity.al_id, &self.registrations),
            sport_name: sport_name.clone(),
            court_name: court_name.clone(),
        })
    }

    fn founder_name(&self, activity: &Activity) -> Option<String> {
        self.members.get(&activity.founder_id).cloned()
    }

    fn sorted_activities<'a>(
        &'a self,
        ids: &'a BTreeSet<i32>,
    ) -> impl Iterator<Item = &'a Activity> + 'a {
        let mut selected: Vec<&Activity> = self
            .activities
            .iter()
            .filter(|a| ids.contains(&a.al_id))
            .collect();
        selected.sort_by_key(|a| a.al_id);
        selected.into_iter()
    }
}

#[async_trait::async_trait]
impl MemberActivityStore for MockMemberActivityStore {
    async fn registered_activities(
        &self,
        member_id: i64,
    ) -> Result<Vec<RegisteredActivity>, StoreError> {
        self.begin_query("registered_activities", member_id)?;

        let ids: BTreeSet<i32> = self
            .registrations
            .iter()
            .filter(|r| r.member_id == member_id)
            .map(|r| r.activity_id)
            .collect();

        Ok(self
            .sorted_activities(&ids)
            .filter_map(|a| {
                Some(RegisteredActivity {
                    summary: self.summary(a)?,
                    founder_name: self.founder_name(a)?,
                })
            })
            .collect())
    }

    async fn created_activities(
        &self,
        member_id: i64,
    ) -> Result<Vec<CreatedActivity>, StoreError> {
        self.begin_query("created_activities", member_id)?;

        let mut founded: Vec<&Activity> = self
            .activities
            .iter()
            .filter(|a| a.founder_id == member_id)
            .collect();
        founded.sort_by_key(|a| a.al_id);

        Ok(founded
            .into_iter()
            .filter_map(|a| {
                Some(CreatedActivity {
                    summary: self.summary(a)?,
                    avatar2: a.avatar2.clone(),
                    avatar3: a.avatar3.clone(),
                    avatar4: a.avatar4.clone(),
                    area_id: a.area_id,
                    court_id: a.court_id,
                    sport_type_id: a.sport_type_id,
                    is_favorite: self
                        .favorites
                        .iter()
                        .any(|f| f.activity_id == a.al_id && f.member_id == member_id),
                })
            })
            .collect())
    }

    async fn favorite_activities(
        &self,
        member_id: i64,
    ) -> Result<Vec<FavoriteActivity>, StoreError> {
        self.begin_query("favorite_activities", member_id)?;

        let ids: BTreeSet<i32> = self
            .favorites
            .iter()
            .filter(|f| f.member_id == member_id)
            .map(|f| f.activity_id)
            .collect();

        Ok(self
            .sorted_activities(&ids)
            .filter_map(|a| {
                Some(FavoriteActivity {
                    summary: self.summary(a)?,
                    founder_name: self.founder_name(a)?,
                })
            })
            .collect())
    }
}
