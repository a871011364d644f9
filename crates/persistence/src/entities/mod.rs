//! Database entity definitions.

pub mod member_activity;

pub use member_activity::{CreatedActivityEntity, FavoriteActivityEntity, RegisteredActivityEntity};
