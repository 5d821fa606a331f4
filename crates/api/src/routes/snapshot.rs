//! Combined snapshot endpoint.
//!
//! The admin console loads (and reloads) its entire working set in one
//! request: owners, fines, the rental waitlist, and current rentals are
//! fetched concurrently and returned together. A failure in any one
//! collection fails the whole snapshot so the console never renders a
//! partially stale mix.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::{
    CurrentRental, Fine, ListFinesResponse, ListOwnersResponse, ListRentalsResponse,
    ListWaitlistResponse, Owner, WaitlistEntry,
};
use persistence::repositories::{
    FineRepository, OwnerRepository, RentalRepository, WaitlistRepository,
};

/// Full data snapshot for the admin console.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SnapshotResponse {
    pub owners: ListOwnersResponse,
    pub fines: ListFinesResponse,
    pub waitlist: ListWaitlistResponse,
    pub rentals: ListRentalsResponse,
}

/// Fetch all four collections at once.
///
/// GET /api/v1/snapshot
pub async fn get_snapshot(State(state): State<AppState>) -> Result<Json<SnapshotResponse>, ApiError> {
    let owner_repo = OwnerRepository::new(state.pool.clone());
    let fine_repo = FineRepository::new(state.pool.clone());
    let waitlist_repo = WaitlistRepository::new(state.pool.clone());
    let rental_repo = RentalRepository::new(state.pool.clone());

    let (owners, fines, waitlist, rentals) = tokio::try_join!(
        owner_repo.list_all(),
        fine_repo.list_all(),
        waitlist_repo.list_all(),
        rental_repo.list_all(),
    )?;

    let owners: Vec<Owner> = owners.into_iter().map(Owner::from).collect();
    let fines: Vec<Fine> = fines.into_iter().map(Fine::from).collect();
    let waitlist: Vec<WaitlistEntry> = waitlist.into_iter().map(WaitlistEntry::from).collect();
    let rentals: Vec<CurrentRental> = rentals.into_iter().map(CurrentRental::from).collect();

    Ok(Json(SnapshotResponse {
        owners: ListOwnersResponse::new(owners),
        fines: ListFinesResponse::new(fines),
        waitlist: ListWaitlistResponse::new(waitlist),
        rentals: ListRentalsResponse::new(rentals),
    }))
}
