//! Fine domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

use shared::validation::not_blank;

/// Lifecycle status of a fine.
///
/// There is no transition endpoint in this system; a fine is created as
/// `pending` and any status change happens directly in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "text", rename_all = "lowercase")]
pub enum FineStatus {
    Pending,
    Paid,
}

impl FineStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            FineStatus::Pending => "pending",
            FineStatus::Paid => "paid",
        }
    }
}

impl FromStr for FineStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(FineStatus::Pending),
            "paid" => Ok(FineStatus::Paid),
            _ => Err(format!("Invalid fine status: {}", s)),
        }
    }
}

impl fmt::Display for FineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents a fine issued against an owner.
///
/// `owner_email` is a denormalized copy of the owner's email captured at
/// creation time, not a live join; later changes to the owner do not
/// affect existing fines.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Fine {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub owner_email: String,
    pub fine_amount: f64,
    pub description: String,
    pub supporting_documentation: Option<String>,
    pub status: FineStatus,
    pub created_at: DateTime<Utc>,
}

/// Request payload for issuing a fine.
///
/// The server resolves `owner_id` and captures that owner's email itself;
/// the client never supplies `owner_email` directly.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateFineRequest {
    pub owner_id: Uuid,

    #[validate(range(min = 0.01, message = "Fine amount must be positive"))]
    pub fine_amount: f64,

    #[validate(custom(function = "not_blank"))]
    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: String,

    #[serde(default)]
    pub supporting_documentation: Option<String>,
}

/// Response payload for listing fines.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ListFinesResponse {
    pub fines: Vec<Fine>,
    pub total: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ListFinesResponse {
    pub fn new(fines: Vec<Fine>) -> Self {
        let total = fines.len() as i64;
        let hint = fines
            .is_empty()
            .then(|| "No fines issued yet.".to_string());
        Self { fines, total, hint }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateFineRequest {
        CreateFineRequest {
            owner_id: Uuid::new_v4(),
            fine_amount: 125.50,
            description: "Parking in a fire lane".to_string(),
            supporting_documentation: None,
        }
    }

    #[test]
    fn test_fine_status_round_trip() {
        assert_eq!(FineStatus::from_str("pending").unwrap(), FineStatus::Pending);
        assert_eq!(FineStatus::from_str("PAID").unwrap(), FineStatus::Paid);
        assert_eq!(FineStatus::Pending.as_str(), "pending");
        assert_eq!(FineStatus::Paid.to_string(), "paid");
    }

    #[test]
    fn test_fine_status_invalid() {
        assert!(FineStatus::from_str("waived").is_err());
    }

    #[test]
    fn test_create_fine_request_valid() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_create_fine_request_zero_amount() {
        let mut request = valid_request();
        request.fine_amount = 0.0;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_fine_request_negative_amount() {
        let mut request = valid_request();
        request.fine_amount = -25.0;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_fine_request_blank_description() {
        let mut request = valid_request();
        request.description = "  ".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_list_response_empty_has_hint() {
        let response = ListFinesResponse::new(vec![]);
        assert_eq!(response.hint.as_deref(), Some("No fines issued yet."));
    }
}
