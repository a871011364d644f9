//! Persistence layer for the member activities backend.
//!
//! This crate contains:
//! - Database connection management
//! - Entity definitions (query row mappings)
//! - Repository implementations
//! - Query and pool metrics

pub mod db;
pub mod entities;
pub mod metrics;
pub mod repositories;
