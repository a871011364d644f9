//! Custom Axum extractors.

pub mod member_id;

pub use member_id::{MemberIdParam, MEMBER_ID_PARAM};
