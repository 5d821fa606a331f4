//! Domain model definitions.

pub mod fine;
pub mod owner;
pub mod rental;

pub use fine::{CreateFineRequest, Fine, FineStatus, ListFinesResponse};
pub use owner::{CreateOwnerRequest, ListOwnersResponse, Owner};
pub use rental::{CurrentRental, ListRentalsResponse, ListWaitlistResponse, WaitlistEntry};
