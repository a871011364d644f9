//! Domain services for member activities.

pub mod member_activity;

pub use member_activity::{MemberActivityStore, MockMemberActivityStore, StoreError};
