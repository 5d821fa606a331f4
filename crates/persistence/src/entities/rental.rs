//! Rental waitlist and current rental entities (database row mappings).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use domain::models::{CurrentRental, WaitlistEntry};

/// Database row mapping for the rental_waitlist table.
///
/// Only `request_date` is interpreted by the application; the rest of the
/// externally seeded row lives in the jsonb `details` column.
#[derive(Debug, Clone, FromRow)]
pub struct WaitlistEntryEntity {
    pub id: Uuid,
    pub request_date: DateTime<Utc>,
    pub details: serde_json::Value,
}

impl From<WaitlistEntryEntity> for WaitlistEntry {
    fn from(e: WaitlistEntryEntity) -> Self {
        WaitlistEntry {
            id: e.id,
            request_date: e.request_date,
            details: e.details,
        }
    }
}

/// Database row mapping for the current_rentals table.
#[derive(Debug, Clone, FromRow)]
pub struct CurrentRentalEntity {
    pub id: Uuid,
    pub details: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl From<CurrentRentalEntity> for CurrentRental {
    fn from(e: CurrentRentalEntity) -> Self {
        CurrentRental {
            id: e.id,
            details: e.details,
            created_at: e.created_at,
        }
    }
}
