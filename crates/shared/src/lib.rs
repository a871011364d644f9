//! Shared utilities for the member activities backend.
//!
//! This crate provides small, dependency-light helpers used across all other crates:
//! - Member identifier coercion from raw path segments
//! - Display formatting of activity timestamps

pub mod datetime;
pub mod validation;
