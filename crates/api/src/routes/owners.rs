//! Owner endpoint handlers.

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::record_record_inserted;
use domain::models::{CreateOwnerRequest, ListOwnersResponse, Owner};
use persistence::repositories::OwnerRepository;

/// List all owners.
///
/// GET /api/v1/owners
pub async fn list_owners(
    State(state): State<AppState>,
) -> Result<Json<ListOwnersResponse>, ApiError> {
    let repo = OwnerRepository::new(state.pool.clone());
    let owners: Vec<Owner> = repo
        .list_all()
        .await?
        .into_iter()
        .map(Owner::from)
        .collect();

    Ok(Json(ListOwnersResponse::new(owners)))
}

/// Create a new owner.
///
/// POST /api/v1/owners
///
/// Field values are persisted exactly as submitted; on failure nothing is
/// written and the client keeps its draft.
pub async fn create_owner(
    State(state): State<AppState>,
    Json(request): Json<CreateOwnerRequest>,
) -> Result<(StatusCode, Json<Owner>), ApiError> {
    request.validate()?;

    let repo = OwnerRepository::new(state.pool.clone());
    let owner: Owner = repo.insert(&request).await?.into();

    info!(owner_id = %owner.id, unit_number = %owner.unit_number, "Owner created");
    record_record_inserted("owners");

    Ok((StatusCode::CREATED, Json(owner)))
}

#[cfg(test)]
mod tests {
    use domain::models::CreateOwnerRequest;
    use validator::Validate;

    #[test]
    fn test_create_owner_request_rejects_blank_first_name() {
        let request = CreateOwnerRequest {
            unit_number: "5B".to_string(),
            first_name: " ".to_string(),
            last_name: "Doe".to_string(),
            email: "doe@example.com".to_string(),
            phone_number: None,
            tax_number: None,
            alternate_address: None,
            alternate_email: None,
            dependants: None,
        };
        assert!(request.validate().is_err());
    }
}
