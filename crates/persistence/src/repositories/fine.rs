//! Fine repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::FineEntity;
use crate::metrics::QueryTimer;
use domain::models::FineStatus;

/// Repository for fine-related database operations.
#[derive(Clone)]
pub struct FineRepository {
    pool: PgPool,
}

impl FineRepository {
    /// Creates a new FineRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new fine and return the stored row.
    ///
    /// `owner_email` is the denormalized copy captured by the caller at
    /// creation time. Every fine starts as `pending`; there is no status
    /// transition path in this system.
    pub async fn insert(
        &self,
        owner_id: Uuid,
        owner_email: &str,
        fine_amount: f64,
        description: &str,
        supporting_documentation: Option<&str>,
    ) -> Result<FineEntity, sqlx::Error> {
        let timer = QueryTimer::new("insert_fine");
        let result = sqlx::query_as::<_, FineEntity>(
            r#"
            INSERT INTO fines (id, owner_id, owner_email, fine_amount, description, supporting_documentation, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, owner_id, owner_email, fine_amount, description, supporting_documentation, status, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(owner_id)
        .bind(owner_email)
        .bind(fine_amount)
        .bind(description)
        .bind(supporting_documentation)
        .bind(FineStatus::Pending)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }

    /// List all fines, newest first.
    pub async fn list_all(&self) -> Result<Vec<FineEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_fines");
        let result = sqlx::query_as::<_, FineEntity>(
            r#"
            SELECT id, owner_id, owner_email, fine_amount, description, supporting_documentation, status, created_at
            FROM fines
            ORDER BY created_at DESC
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
    // Note: FineRepository tests require a database connection and are
    // covered by the integration tests.
}
