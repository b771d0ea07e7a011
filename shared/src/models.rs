use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Time-relative situation of an event, as classified either locally or by
/// the backend's notification endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NotificationKind {
    FiveMinutesBefore,
    EventStarted,
    EventExpired,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::FiveMinutesBefore => "FIVE_MINUTES_BEFORE",
            NotificationKind::EventStarted => "EVENT_STARTED",
            NotificationKind::EventExpired => "EVENT_EXPIRED",
        }
    }
}

/// User record as returned by the backend.
///
/// The backend transmits the stored password in the clear and credential
/// comparison happens client side. A known weakness of the backend contract,
/// not something this client can fix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub password: String,
}

/// A timed event owned by a user.
///
/// Event timestamps are zone-less local datetimes on the wire, matching the
/// backend's second-precision format (`2026-08-07T15:04:00`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub event_time: NaiveDateTime,
    pub user_id: i64,
}

/// A notification payload, either derived locally from an [`Event`] or
/// returned pre-classified by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub event_id: i64,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub event_time: NaiveDateTime,
}

/// Human-readable timestamp used in event cards and notification toasts.
pub fn format_event_time(time: &NaiveDateTime) -> String {
    time.format("%b %d, %Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 7)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_event_wire_format() {
        let json = r#"{"id":1,"title":"standup","description":null,"eventTime":"2026-08-07T12:30:00","userId":7}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert_eq!(event.id, 1);
        assert_eq!(event.title, "standup");
        assert_eq!(event.description, None);
        assert_eq!(event.event_time, sample_time());
        assert_eq!(event.user_id, 7);

        let back = serde_json::to_string(&event).unwrap();
        assert!(back.contains(r#""eventTime":"2026-08-07T12:30:00""#));
        assert!(back.contains(r#""userId":7"#));
    }

    #[test]
    fn test_notification_wire_format() {
        let notification = Notification {
            event_id: 3,
            kind: NotificationKind::FiveMinutesBefore,
            title: "Event starting soon".to_string(),
            message: "standup starts in 5 minutes".to_string(),
            event_time: sample_time(),
        };

        let json = serde_json::to_string(&notification).unwrap();
        assert!(json.contains(r#""eventId":3"#));
        assert!(json.contains(r#""type":"FIVE_MINUTES_BEFORE""#));

        let parsed: Notification = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, notification);
    }

    #[test]
    fn test_kind_as_str_matches_wire_names() {
        for kind in [
            NotificationKind::FiveMinutesBefore,
            NotificationKind::EventStarted,
            NotificationKind::EventExpired,
        ] {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn test_format_event_time() {
        assert_eq!(format_event_time(&sample_time()), "Aug 07, 2026 12:30");
    }
}
