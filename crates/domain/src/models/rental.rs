//! Rental waitlist and current rental domain models.
//!
//! Both collections are read-only to this application: waitlist entries
//! and rental assignments are seeded by an external process. Beyond
//! `request_date` (the waitlist ordering key) their field sets are not
//! interpreted here, so the remaining columns are carried as opaque JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A prospective renter's request, ordered first-come-first-served.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct WaitlistEntry {
    pub id: Uuid,
    /// Queue ordering key; the waitlist is always listed ascending by this.
    pub request_date: DateTime<Utc>,
    /// Externally contracted payload, passed through untouched.
    pub details: serde_json::Value,
}

/// An active rental assignment, display only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CurrentRental {
    pub id: Uuid,
    pub details: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

/// Response payload for listing the rental waitlist.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ListWaitlistResponse {
    pub waitlist: Vec<WaitlistEntry>,
    pub total: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ListWaitlistResponse {
    pub fn new(waitlist: Vec<WaitlistEntry>) -> Self {
        let total = waitlist.len() as i64;
        let hint = waitlist
            .is_empty()
            .then(|| "No rental requests on the waitlist yet.".to_string());
        Self {
            waitlist,
            total,
            hint,
        }
    }
}

/// Response payload for listing current rentals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ListRentalsResponse {
    pub rentals: Vec<CurrentRental>,
    pub total: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ListRentalsResponse {
    pub fn new(rentals: Vec<CurrentRental>) -> Self {
        let total = rentals.len() as i64;
        let hint = rentals
            .is_empty()
            .then(|| "No active rentals recorded.".to_string());
        Self {
            rentals,
            total,
            hint,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(request_date: DateTime<Utc>) -> WaitlistEntry {
        WaitlistEntry {
            id: Uuid::new_v4(),
            request_date,
            details: json!({"applicant": "A. Tenant"}),
        }
    }

    #[test]
    fn test_waitlist_details_pass_through() {
        let e = entry(Utc::now());
        assert_eq!(e.details["applicant"], "A. Tenant");
    }

    #[test]
    fn test_waitlist_response_empty_has_hint() {
        let response = ListWaitlistResponse::new(vec![]);
        assert!(response.hint.is_some());
        assert_eq!(response.total, 0);
    }

    #[test]
    fn test_waitlist_response_preserves_order() {
        let older = entry(Utc::now() - chrono::Duration::days(2));
        let newer = entry(Utc::now());
        let response = ListWaitlistResponse::new(vec![older.clone(), newer.clone()]);
        assert_eq!(response.waitlist[0].id, older.id);
        assert_eq!(response.waitlist[1].id, newer.id);
    }

    #[test]
    fn test_rentals_response_empty_has_hint() {
        let response = ListRentalsResponse::new(vec![]);
        assert_eq!(response.hint.as_deref(), Some("No active rentals recorded."));
    }
}
