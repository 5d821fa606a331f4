//! Rental waitlist endpoint handlers.

use axum::{extract::State, Json};

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::{ListWaitlistResponse, WaitlistEntry};
use persistence::repositories::WaitlistRepository;

/// List the rental waitlist in first-come-first-served order.
///
/// GET /api/v1/waitlist
pub async fn list_waitlist(
    State(state): State<AppState>,
) -> Result<Json<ListWaitlistResponse>, ApiError> {
    let repo = WaitlistRepository::new(state.pool.clone());
    let entries: Vec<WaitlistEntry> = repo
        .list_all()
        .await?
        .into_iter()
        .map(WaitlistEntry::from)
        .collect();

    Ok(Json(ListWaitlistResponse::new(entries)))
}
