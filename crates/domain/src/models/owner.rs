//! Condo owner domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use shared::validation::not_blank;

/// Represents a condo owner record.
///
/// Owners are append-only in this system: once created they are never
/// mutated or deleted, only referenced by fines.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Owner {
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

/// Request payload for creating an owner.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "snake_case")]
pub struct CreateOwnerRequest {
    #[validate(custom(function = "not_blank"))]
    #[validate(length(max = 20, message = "Unit number must be at most 20 characters"))]
    pub unit_number: String,

    #[validate(custom(function = "not_blank"))]
    #[validate(length(max = 100, message = "First name must be at most 100 characters"))]
    pub first_name: String,

    #[validate(custom(function = "not_blank"))]
    #[validate(length(max = 100, message = "Last name must be at most 100 characters"))]
    pub last_name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[serde(default)]
    pub phone_number: Option<String>,

    #[serde(default)]
    pub tax_number: Option<String>,

    #[serde(default)]
    pub alternate_address: Option<String>,

    #[validate(email(message = "Invalid alternate email format"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternate_email: Option<String>,

    #[serde(default)]
    pub dependants: Option<String>,
}

/// Response payload for listing owners.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ListOwnersResponse {
    pub owners: Vec<Owner>,
    pub total: i64,
    /// Guidance text shown in place of rows when the collection is empty.
    /// Distinct from a fetch failure, which surfaces as an error response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ListOwnersResponse {
    pub fn new(owners: Vec<Owner>) -> Self {
        let total = owners.len() as i64;
        let hint = owners.is_empty().then(|| {
            "No owners added yet. Click \"Add New Owner\" to get started.".to_string()
        });
        Self {
            owners,
            total,
            hint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateOwnerRequest {
        CreateOwnerRequest {
            unit_number: "2A".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone_number: None,
            tax_number: None,
            alternate_address: None,
            alternate_email: None,
            dependants: None,
        }
    }

    fn sample_owner() -> Owner {
        Owner {
            id: Uuid::new_v4(),
            unit_number: "2A".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone_number: None,
            tax_number: None,
            alternate_address: None,
            alternate_email: None,
            dependants: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_create_owner_request_valid() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_create_owner_request_blank_unit() {
        let mut request = valid_request();
        request.unit_number = "   ".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_owner_request_invalid_email() {
        let mut request = valid_request();
        request.email = "not-an-email".to_string();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_owner_request_invalid_alternate_email() {
        let mut request = valid_request();
        request.alternate_email = Some("also-not-an-email".to_string());
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_owner_request_optional_fields_absent() {
        let request = valid_request();
        assert!(request.phone_number.is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_list_response_empty_has_hint() {
        let response = ListOwnersResponse::new(vec![]);
        assert_eq!(response.total, 0);
        assert!(response.hint.is_some());
    }

    #[test]
    fn test_list_response_populated_has_no_hint() {
        let response = ListOwnersResponse::new(vec![sample_owner()]);
        assert_eq!(response.total, 1);
        assert!(response.hint.is_none());
    }
}
