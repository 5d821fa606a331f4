//! HTTP route handlers.

pub mod auth;
pub mod fines;
pub mod frontend;
pub mod health;
pub mod owners;
pub mod payments;
pub mod rentals;
pub mod snapshot;
pub mod waitlist;
