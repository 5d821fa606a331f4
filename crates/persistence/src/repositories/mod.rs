//! Repository implementations over the managed collections.
//!
//! Each repository is the typed realization of the record gateway for one
//! table: an `insert` that returns the stored row (server-generated id and
//! timestamp included) and a `list_all`. The rental collections are
//! read-only here because nothing in this system creates their rows.

pub mod fine;
pub mod owner;
pub mod rental;

pub use fine::FineRepository;
pub use owner::OwnerRepository;
pub use rental::{RentalRepository, WaitlistRepository};
