//! Current rental endpoint handlers.

use axum::{extract::State, Json};

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::{CurrentRental, ListRentalsResponse};
use persistence::repositories::RentalRepository;

/// List active rental assignments.
///
/// GET /api/v1/rentals
pub async fn list_rentals(
    State(state): State<AppState>,
) -> Result<Json<ListRentalsResponse>, ApiError> {
    let repo = RentalRepository::new(state.pool.clone());
    let rentals: Vec<CurrentRental> = repo
        .list_all()
        .await?
        .into_iter()
        .map(CurrentRental::from)
        .collect();

    Ok(Json(ListRentalsResponse::new(rentals)))
}
