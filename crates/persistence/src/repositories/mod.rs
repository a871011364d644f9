//! Repository implementations for database operations.

pub mod member_activity;

pub use member_activity::{MemberActivityRepository, DEFAULT_QUERY_TIMEOUT};
