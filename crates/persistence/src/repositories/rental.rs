//! Rental waitlist and current rental repositories.
//!
//! Both collections are read-only from the application's perspective;
//! their rows are seeded out-of-band.

use sqlx::PgPool;

use crate::entities::{CurrentRentalEntity, WaitlistEntryEntity};
use crate::metrics::QueryTimer;

/// Repository for the rental_waitlist table.
#[derive(Clone)]
pub struct WaitlistRepository {
    pool: PgPool,
}

impl WaitlistRepository {
    /// Creates a new WaitlistRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all waitlist entries ordered by request_date ascending.
    ///
    /// The ordering is the queue invariant: oldest request first.
    pub async fn list_all(&self) -> Result<Vec<WaitlistEntryEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_rental_waitlist");
        let result = sqlx::query_as::<_, WaitlistEntryEntity>(
            r#"
            SELECT id, request_date, details
            FROM rental_waitlist
            ORDER BY request_date
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }
}

/// Repository for the current_rentals table.
#[derive(Clone)]
pub struct RentalRepository {
    pool: PgPool,
}

impl RentalRepository {
    /// Creates a new RentalRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all active rental assignments.
    pub async fn list_all(&self) -> Result<Vec<CurrentRentalEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_current_rentals");
        let result = sqlx::query_as::<_, CurrentRentalEntity>(
            r#"
            SELECT id, details, created_at
            FROM current_rentals
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }
}

#[cfg(test)]
mod tests {
    // Note: repository tests require a database connection and are covered
    // by the integration tests.
}
