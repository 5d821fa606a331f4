//! Persistence layer for the HOA Office backend.
//!
//! This crate contains:
//! - Database connection management
//! - Entity definitions (database row mappings)
//! - Repository implementations for the managed collections
//!
//! Repositories for the managed collections expose only `insert` and
//! `list_all` style operations; every workflow in this system is
//! append-only, so no update or delete paths exist here.

pub mod db;
pub mod entities;
pub mod metrics;
pub mod repositories;
