//! Member activity repository for database operations.

use std::future::Future;
use std::time::Duration;

use sqlx::PgPool;

use domain::models::member_activity::{CreatedActivity, FavoriteActivity, RegisteredActivity};
use domain::services::{MemberActivityStore, StoreError};

use crate::entities::{CreatedActivityEntity, FavoriteActivityEntity, RegisteredActivityEntity};
use crate::metrics::{QueryOutcome, QueryTimer};

/// Default upper bound for a single listing query.
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(10);

/// Registered headcount of `al`, summed over every member.
const REGISTERED_PEOPLE: &str = r#"
    (SELECT COALESCE(SUM(ra.num), 0)::BIGINT
       FROM registered ra
      WHERE ra.activity_id = al.al_id)
"#;

/// Repository for the member activity listings.
#[derive(Clone)]
pub struct MemberActivityRepository {
    pool: PgPool,
    query_timeout: Duration,
}

impl MemberActivityRepository {
    /// Creates a new MemberActivityRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            query_timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }

    /// Overrides the per-query timeout.
    pub fn with_query_timeout(mut self, query_timeout: Duration) -> Self {
        self.query_timeout = query_timeout;
        self
    }

    /// Activities the member registered for, one row per activity.
    pub async fn find_registered(
        &self,
        member_id: i64,
    ) -> Result<Vec<RegisteredActivityEntity>, StoreError> {
        let sql = format!(
            r#"
            SELECT
                al.al_id,
                al.activity_name,
                al.activity_time,
                al.introduction,
                al.avatar,
                al.deadline,
                al.payment,
                al.need_num,
                m.name AS founder_name,
                {REGISTERED_PEOPLE} AS registered_people,
                st.sport_name,
                ci.name AS court_name
            FROM activity_list al
            JOIN sport_type st ON al.sport_type_id = st.id
            JOIN court_info ci ON al.court_id = ci.id
            JOIN members m ON al.founder_id = m.id
            WHERE EXISTS (
                SELECT 1 FROM registered r
                WHERE r.activity_id = al.al_id AND r.member_id = $1
            )
            ORDER BY al.al_id
            "#
        );

        self.run(
            "find_registered_activities",
            sqlx::query_as::<_, RegisteredActivityEntity>(&sql)
                .bind(member_id)
                .fetch_all(&self.pool),
        )
        .await
    }

    /// Activities founded by the member with the member's own favorite flag.
    pub async fn find_created(
        &self,
        member_id: i64,
    ) -> Result<Vec<CreatedActivityEntity>, StoreError> {
        let sql = format!(
            r#"
            SELECT
                al.al_id,
                al.activity_name,
                al.activity_time,
                al.introduction,
                al.avatar,
                al.avatar2,
                al.avatar3,
                al.avatar4,
                al.deadline,
                al.payment,
                al.need_num,
                al.area_id,
                al.court_id,
                al.sport_type_id,
                {REGISTERED_PEOPLE} AS registered_people,
                st.sport_name,
                ci.name AS court_name,
                EXISTS (
                    SELECT 1 FROM favorites f
                    WHERE f.activity_id = al.al_id AND f.member_id = $1
                ) AS is_favorite
            FROM activity_list al
            JOIN sport_type st ON al.sport_type_id = st.id
            JOIN court_info ci ON al.court_id = ci.id
            WHERE al.founder_id = $1
            ORDER BY al.al_id
            "#
        );

        self.run(
            "find_created_activities",
            sqlx::query_as::<_, CreatedActivityEntity>(&sql)
                .bind(member_id)
                .fetch_all(&self.pool),
        )
        .await
    }

    /// Activities the member favorited.
    pub async fn find_favorites(
        &self,
        member_id: i64,
    ) -> Result<Vec<FavoriteActivityEntity>, StoreError> {
        let sql = format!(
            r#"
            SELECT
                al.al_id,
                al.activity_name,
                al.activity_time,
                al.introduction,
                al.avatar,
                al.deadline,
                al.payment,
                al.need_num,
                m.name AS founder_name,
                {REGISTERED_PEOPLE} AS registered_people,
                st.sport_name,
                ci.name AS court_name
            FROM activity_list al
            JOIN sport_type st ON al.sport_type_id = st.id
            JOIN court_info ci ON al.court_id = ci.id
            JOIN members m ON al.founder_id = m.id
            WHERE EXISTS (
                SELECT 1 FROM favorites f
                WHERE f.activity_id = al.al_id AND f.member_id = $1
            )
            ORDER BY al.al_id
            "#
        );

        self.run(
            "find_favorite_activities",
            sqlx::query_as::<_, FavoriteActivityEntity>(&sql)
                .bind(member_id)
                .fetch_all(&self.pool),
        )
        .await
    }

    /// Awaits a query under the timeout and records its duration.
    async fn run<T, F>(&self, query_name: &'static str, query: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, sqlx::Error>>,
    {
        let timer = QueryTimer::new(query_name);
        match tokio::time::timeout(self.query_timeout, query).await {
            Ok(Ok(rows)) => {
                timer.finish(QueryOutcome::Ok);
                Ok(rows)
            }
            Ok(Err(err)) => {
                timer.finish(QueryOutcome::Error);
                Err(store_error(err))
            }
            Err(_) => {
                timer.finish(QueryOutcome::Timeout);
                Err(StoreError::Timeout(self.query_timeout))
            }
        }
    }
}

/// Maps a driver error onto the store error type.
fn store_error(err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Database(db_err) => StoreError::Database(db_err.message().to_string()),
        other => StoreError::Database(other.to_string()),
    }
}

#[async_trait::async_trait]
impl MemberActivityStore for MemberActivityRepository {
    async fn registered_activities(
        &self,
        member_id: i64,
    ) -> Result<Vec<RegisteredActivity>, StoreError> {
        let rows = self.find_registered(member_id).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn created_activities(
        &self,
        member_id: i64,
    ) -> Result<Vec<CreatedActivity>, StoreError> {
        let rows = self.find_created(member_id).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn favorite_activities(
        &self,
        member_id: i64,
    ) -> Result<Vec<FavoriteActivity>, StoreError> {
        let rows = self.find_favorites(member_id).await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
