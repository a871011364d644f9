//! Domain layer for the member activities backend.
//!
//! This crate contains:
//! - Domain models (activities and the per-endpoint member projections)
//! - The member activity store capability and its in-memory mock

pub mod models;
pub mod services;
