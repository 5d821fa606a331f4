//! Fine endpoint handlers.

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::record_record_inserted;
use domain::models::{CreateFineRequest, Fine, ListFinesResponse};
use persistence::repositories::{FineRepository, OwnerRepository};

/// List all fines, newest first.
///
/// GET /api/v1/fines
pub async fn list_fines(State(state): State<AppState>) -> Result<Json<ListFinesResponse>, ApiError> {
    let repo = FineRepository::new(state.pool.clone());
    let fines: Vec<Fine> = repo.list_all().await?.into_iter().map(Fine::from).collect();

    Ok(Json(ListFinesResponse::new(fines)))
}

/// Issue a fine against an owner.
///
/// POST /api/v1/fines
///
/// The owner's email is looked up and copied onto the fine at this moment;
/// the stored value never tracks later owner changes.
pub async fn create_fine(
    State(state): State<AppState>,
    Json(request): Json<CreateFineRequest>,
) -> Result<(StatusCode, Json<Fine>), ApiError> {
    request.validate()?;

    let owner_repo = OwnerRepository::new(state.pool.clone());
    let owner = owner_repo
        .find_by_id(request.owner_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Owner not found".to_string()))?;

    let fine_repo = FineRepository::new(state.pool.clone());
    let fine: Fine = fine_repo
        .insert(
            owner.id,
            &owner.email,
            request.fine_amount,
            &request.description,
            request.supporting_documentation.as_deref(),
        )
        .await?
        .into();

    // Email delivery is out of scope for the MVP; the notification is
    // recorded in the logs instead.
    info!(
        fine_id = %fine.id,
        owner_id = %fine.owner_id,
        owner_email = %fine.owner_email,
        fine_amount = fine.fine_amount,
        "Fine issued; notification email would be sent to owner"
    );
    record_record_inserted("fines");

    Ok((StatusCode::CREATED, Json(fine)))
}

#[cfg(test)]
mod tests {
    use domain::models::CreateFineRequest;
    use uuid::Uuid;
    use validator::Validate;

    #[test]
    fn test_create_fine_request_rejects_zero_amount() {
        let request = CreateFineRequest {
            owner_id: Uuid::new_v4(),
            fine_amount: 0.0,
            description: "Noise complaint".to_string(),
            supporting_documentation: None,
        };
        assert!(request.validate().is_err());
    }
}
