use axum::{middleware, routing::get, Router};
use domain::services::MemberActivityStore;
use persistence::repositories::MemberActivityRepository;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{metrics_handler, metrics_middleware, security_headers_middleware, trace_id};
use crate::routes::{health, member_activities};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub activities: Arc<dyn MemberActivityStore>,
}

/// Builds the application backed by PostgreSQL.
pub fn create_app(config: Config, pool: PgPool) -> Router {
    let repository =
        MemberActivityRepository::new(pool.clone()).with_query_timeout(config.query_timeout());
    create_app_with_store(config, pool, Arc::new(repository))
}

/// Builds the application with an explicit activity store.
///
/// `pool` still backs the health probes.
pub fn create_app_with_store(
    config: Config,
    pool: PgPool,
    activities: Arc<dyn MemberActivityStore>,
) -> Router {
    let config = Arc::new(config);

    let state = AppState {
        pool,
        config: config.clone(),
        activities,
    };

    let cors = if config.security.cors_origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let member_routes = Router::new()
        .route(
            "/:member_id/activities",
            get(member_activities::list_registered_activities),
        )
        .route(
            "/:member_id/created-activities",
            get(member_activities::list_created_activities),
        )
        .route(
            "/:member_id/favorites",
            get(member_activities::list_favorite_activities),
        );

    let public_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    Router::new()
        .merge(public_routes)
        .merge(member_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            security_headers_middleware,
        ))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}
