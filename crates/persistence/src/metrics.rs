//! Database metrics collection.

use metrics::{counter, gauge, histogram};
use sqlx::PgPool;
use std::time::Instant;

/// How a timed query ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryOutcome {
    Ok,
    Error,
    Timeout,
}

impl QueryOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryOutcome::Ok => "ok",
            QueryOutcome::Error => "error",
            QueryOutcome::Timeout => "timeout",
        }
    }
}

/// Record database connection pool metrics.
///
/// Call this function periodically to track pool health.
pub fn record_pool_metrics(pool: &PgPool) {
    let size = pool.size() as usize;
    let idle = pool.num_idle();
    let active = size.saturating_sub(idle);

    gauge!("database_connections_active").set(active as f64);
    gauge!("database_connections_idle").set(idle as f64);
    gauge!("database_connections_total").set(size as f64);
}

/// Times a named query and records it once finished.
///
/// ```ignore
/// let timer = QueryTimer::new("find_created_activities");
/// let result = sqlx::query_as::<_, CreatedActivityEntity>(sql).fetch_all(&pool).await;
/// timer.finish(QueryOutcome::Ok);
/// ```
pub struct QueryTimer {
    query_name: &'static str,
    start: Instant,
}

impl QueryTimer {
    pub fn new(query_name: &'static str) -> Self {
        Self {
            query_name,
            start: Instant::now(),
        }
    }

    /// Records `database_query_duration_seconds` and, for failures,
    /// `database_query_failures_total`.
    pub fn finish(self, outcome: QueryOutcome) {
        let duration = self.start.elapsed().as_secs_f64();
        histogram!(
            "database_query_duration_seconds",
            "query" => self.query_name,
            "outcome" => outcome.as_str()
        )
        .record(duration);

        if outcome != QueryOutcome::Ok {
            counter!(
                "database_query_failures_total",
                "query" => self.query_name,
                "outcome" => outcome.as_str()
            )
            .increment(1);
        }
    }
}
