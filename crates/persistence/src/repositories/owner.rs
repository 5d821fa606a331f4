//! Owner repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::OwnerEntity;
use crate::metrics::QueryTimer;
use domain::models::CreateOwnerRequest;

/// Repository for owner-related database operations.
#[derive(Clone)]
pub struct OwnerRepository {
    pool: PgPool,
}

impl OwnerRepository {
    /// Creates a new OwnerRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new owner and return the stored row.
    ///
    /// Field values are stored exactly as submitted. Unit numbers are not
    /// required to be unique; a unit can have multiple registered owners.
    pub async fn insert(&self, request: &CreateOwnerRequest) -> Result<OwnerEntity, sqlx::Error> {
        let timer = QueryTimer::new("insert_owner");
        let result = sqlx::query_as::<_, OwnerEntity>(
            r#"
            INSERT INTO owners (id, unit_number, first_name, last_name, email, phone_number, tax_number, alternate_address, alternate_email, dependants)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            RETURNING id, unit_number, first_name, last_name, email, phone_number, tax_number, alternate_address, alternate_email, dependants, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&request.unit_number)
        .bind(&request.first_name)
        .bind(&request.last_name)
        .bind(&request.email)
        .bind(&request.phone_number)
        .bind(&request.tax_number)
        .bind(&request.alternate_address)
        .bind(&request.alternate_email)
        .bind(&request.dependants)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List all owners in insertion order.
    pub async fn list_all(&self) -> Result<Vec<OwnerEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_owners");
        let result = sqlx::query_as::<_, OwnerEntity>(
            r#"
            SELECT id, unit_number, first_name, last_name, email, phone_number, tax_number, alternate_address, alternate_email, dependants, created_at
            FROM owners
            ORDER BY created_at
            "#,
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Find an owner by ID.
    ///
    /// Used when issuing a fine to capture the owner's email at that
    /// moment.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<OwnerEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_owner_by_id");
        let result = sqlx::query_as::<_, OwnerEntity>(
            r#"
            SELECT id, unit_number, first_name, last_name, email, phone_number, tax_number, alternate_address, alternate_email, dependants, created_at
            FROM owners
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }
}

#[cfg(test)]
mod tests {
    // Note: OwnerRepository tests require a database connection and are
    // covered by the integration tests.
}
