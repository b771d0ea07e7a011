use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

// ============================================================================
// User API Types
// ============================================================================

/// Body of `POST /users`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 100))]
    pub username: String,

    #[validate(length(min = 1, max = 100))]
    pub password: String,
}

// ============================================================================
// Event API Types
// ============================================================================

/// Body of `POST /events`. The event time is always second precision on the
/// wire even though the UI collects it at minute precision.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateEventRequest {
    #[validate(length(min = 1, max = 500))]
    pub title: String,

    #[validate(length(max = 5000))]
    pub description: Option<String>,

    pub event_time: NaiveDateTime,
    pub user_id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 7)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_create_event_request_requires_title() {
        let request = CreateEventRequest {
            title: String::new(),
            description: None,
            event_time: noon(),
            user_id: 1,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_event_request_serializes_camel_case() {
        let request = CreateEventRequest {
            title: "standup".to_string(),
            description: Some("daily sync".to_string()),
            event_time: noon(),
            user_id: 1,
        };
        assert!(request.validate().is_ok());

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains(r#""eventTime":"2026-08-07T12:00:00""#));
        assert!(json.contains(r#""userId":1"#));
    }

    #[test]
    fn test_create_user_request_requires_credentials() {
        let request = CreateUserRequest {
            username: "alice".to_string(),
            password: String::new(),
        };
        assert!(request.validate().is_err());
    }
}
