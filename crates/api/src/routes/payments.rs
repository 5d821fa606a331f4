//! Payments placeholder endpoint.
//!
//! Online payment collection is not built yet; the tab exists in the
//! console and this endpoint backs it with a static announcement.

use axum::Json;
use serde::Serialize;

/// Payments status response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PaymentsStatusResponse {
    pub status: String,
    pub message: String,
}

/// Report the payments feature status.
///
/// GET /api/v1/payments
pub async fn payments_status() -> Json<PaymentsStatusResponse> {
    Json(PaymentsStatusResponse {
        status: "coming_soon".to_string(),
        message: "Online payments are coming soon. Please check back later.".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_payments_status_is_coming_soon() {
        let response = payments_status().await;
        assert_eq!(response.0.status, "coming_soon");
        assert!(!response.0.message.is_empty());
    }
}
