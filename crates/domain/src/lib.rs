//! Domain layer for the HOA Office backend.
//!
//! This crate contains the domain models for the managed collections
//! (owners, fines, rental waitlist, current rentals) and the admin
//! account, together with their request/response DTOs.

pub mod models;
