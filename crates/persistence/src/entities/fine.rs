//! Fine entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use domain::models::{Fine, FineStatus};

/// Database row mapping for the fines table.
#[derive(Debug, Clone, FromRow)]
pub struct FineEntity {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub owner_email: String,
    pub fine_amount: f64,
    pub description: String,
    pub supporting_documentation: Option<String>,
    pub status: FineStatus,
    pub created_at: DateTime<Utc>,
}

impl From<FineEntity> for Fine {
    fn from(e: FineEntity) -> Self {
        Fine {
            id: e.id,
            owner_id: e.owner_id,
            owner_email: e.owner_email,
            fine_amount: e.fine_amount,
            description: e.description,
            supporting_documentation: e.supporting_documentation,
            status: e.status,
            created_at: e.created_at,
        }
    }
}
