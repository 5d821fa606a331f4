//! Database entity definitions.
//!
//! Entities are direct mappings to database rows.

pub mod fine;
pub mod owner;
pub mod rental;

pub use fine::FineEntity;
pub use owner::OwnerEntity;
pub use rental::{CurrentRentalEntity, WaitlistEntryEntity};
