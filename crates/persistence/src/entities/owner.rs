//! Owner entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use domain::models::Owner;

/// Database row mapping for the owners table.
#[derive(Debug, Clone, FromRow)]
pub struct OwnerEntity {
    pub id: Uuid,
    pub unit_number: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub tax_number: Option<String>,
    pub alternate_address: Option<String>,
    pub alternate_email: Option<String>,
    pub dependants: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<OwnerEntity> for Owner {
    fn from(e: OwnerEntity) -> Self {
        Owner {
            id: e.id,
            unit_number: e.unit_number,
            first_name: e.first_name,
            last_name: e.last_name,
            email: e.email,
            phone_number: e.phone_number,
            tax_number: e.tax_number,
            alternate_address: e.alternate_address,
            alternate_email: e.alternate_email,
            dependants: e.dependants,
            created_at: e.created_at,
        }
    }
}
