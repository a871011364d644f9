//! HTTP route handlers.

pub mod health;
pub mod member_activities;
