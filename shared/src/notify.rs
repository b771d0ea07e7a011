//! Headless notification planning.
//!
//! The poller only fetches data and hands it to this module; deciding which
//! notifications are due, and which were already announced this session,
//! happens here. The module is free of DOM and timer types so the timing
//! windows and dedup rules run under plain `cargo test`.

use std::collections::HashSet;

use chrono::{Duration, NaiveDateTime};

use crate::models::{format_event_time, Event, Notification, NotificationKind};

/// Poll period of the notification checker, in seconds.
pub const POLL_INTERVAL_SECS: u32 = 10;

/// How far ahead the "starting soon" window reaches.
const SOON_WINDOW_MINS: i64 = 5;

/// Half-width of the "started" window around the event time.
const START_WINDOW_SECS: i64 = 60;

/// How long past its time an event must be to count as overdue.
const EXPIRY_GRACE_MINS: i64 = 10;

/// Which (event, situation) pairs were already announced during the current
/// login session.
///
/// "Starting soon" and "started" share one key per event, so whichever fires
/// first suppresses the other. Expiry has its own key and fires regardless of
/// the shared one. Keys live in memory only; logout drops the whole set.
#[derive(Debug, Default)]
pub struct SeenNotifications {
    keys: HashSet<String>,
}

impl SeenNotifications {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything, so a fresh session can re-announce the same
    /// situations.
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Returns true exactly once per key: the first call records it, later
    /// calls see it as already shown.
    fn check_and_record(&mut self, key: String) -> bool {
        self.keys.insert(key)
    }

    fn start_key(event_id: i64) -> String {
        format!("event-{event_id}")
    }

    fn expired_key(event_id: i64) -> String {
        format!("event-{event_id}-expired")
    }

    fn server_key(event_id: i64, kind: NotificationKind) -> String {
        format!("event-{}-{}", event_id, kind.as_str())
    }
}

fn is_starting_soon(event_time: NaiveDateTime, now: NaiveDateTime) -> bool {
    let lead = event_time.signed_duration_since(now);
    lead > Duration::zero() && lead <= Duration::minutes(SOON_WINDOW_MINS)
}

fn is_starting_now(event_time: NaiveDateTime, now: NaiveDateTime) -> bool {
    let offset = now.signed_duration_since(event_time);
    offset >= -Duration::seconds(START_WINDOW_SECS) && offset <= Duration::seconds(START_WINDOW_SECS)
}

fn is_expired(event_time: NaiveDateTime, now: NaiveDateTime) -> bool {
    now.signed_duration_since(event_time) > Duration::minutes(EXPIRY_GRACE_MINS)
}

/// Client-computed mode: derive due notifications from the raw event list.
///
/// Every event is evaluated against a freshly sampled `now` on every tick.
/// Notifications whose key was already recorded are suppressed; the ones
/// returned have just had their keys recorded.
pub fn plan_local(
    events: &[Event],
    now: NaiveDateTime,
    seen: &mut SeenNotifications,
) -> Vec<Notification> {
    let mut due = Vec::new();

    for event in events {
        if is_starting_soon(event.event_time, now)
            && seen.check_and_record(SeenNotifications::start_key(event.id))
        {
            due.push(soon_notification(event));
        }

        if is_starting_now(event.event_time, now)
            && seen.check_and_record(SeenNotifications::start_key(event.id))
        {
            due.push(started_notification(event));
        }

        if is_expired(event.event_time, now)
            && seen.check_and_record(SeenNotifications::expired_key(event.id))
        {
            due.push(expired_notification(event));
        }
    }

    due
}

/// Server-computed mode: filter a pre-classified batch down to unseen ones.
///
/// The dedup key is (eventId, type) exactly as supplied, so the shared-key
/// suppression of the client-computed planner does not apply here.
pub fn plan_server(batch: Vec<Notification>, seen: &mut SeenNotifications) -> Vec<Notification> {
    batch
        .into_iter()
        .filter(|n| seen.check_and_record(SeenNotifications::server_key(n.event_id, n.kind)))
        .collect()
}

fn soon_notification(event: &Event) -> Notification {
    Notification {
        event_id: event.id,
        kind: NotificationKind::FiveMinutesBefore,
        title: "Event starting soon".to_string(),
        message: format!("{} starts in 5 minutes", event.title),
        event_time: event.event_time,
    }
}

fn started_notification(event: &Event) -> Notification {
    Notification {
        event_id: event.id,
        kind: NotificationKind::EventStarted,
        title: "Event started!".to_string(),
        message: format!("{} is starting now", event.title),
        event_time: event.event_time,
    }
}

fn expired_notification(event: &Event) -> Notification {
    Notification {
        event_id: event.id,
        kind: NotificationKind::EventExpired,
        title: "Event overdue".to_string(),
        message: format!(
            "{} was scheduled for {}",
            event.title,
            format_event_time(&event.event_time)
        ),
        event_time: event.event_time,
    }
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

    fn event_at(id: i64, offset_secs: i64) -> Event {
        Event {
            id,
            title: format!("event {id}"),
            description: None,
            event_time: noon() + Duration::seconds(offset_secs),
            user_id: 1,
        }
    }

    fn kinds(notifications: &[Notification]) -> Vec<NotificationKind> {
        notifications.iter().map(|n| n.kind).collect()
    }

    #[test]
    fn test_soon_fires_once_within_window() {
        let mut seen = SeenNotifications::new();
        let events = vec![event_at(1, 240)];

        let first = plan_local(&events, noon(), &mut seen);
        assert_eq!(kinds(&first), vec![NotificationKind::FiveMinutesBefore]);
        assert_eq!(first[0].event_id, 1);
        assert_eq!(first[0].message, "event 1 starts in 5 minutes");

        let second = plan_local(&events, noon(), &mut seen);
        assert!(second.is_empty());
    }

    #[test]
    fn test_soon_window_bounds() {
        let mut seen = SeenNotifications::new();

        // Exactly five minutes ahead is still inside the window.
        let at_bound = plan_local(&[event_at(1, 300)], noon(), &mut seen);
        assert_eq!(kinds(&at_bound), vec![NotificationKind::FiveMinutesBefore]);

        // One second past it is not.
        let past_bound = plan_local(&[event_at(2, 301)], noon(), &mut seen);
        assert!(past_bound.is_empty());
    }

    #[test]
    fn test_started_fires_within_symmetric_window() {
        let mut seen = SeenNotifications::new();

        let early = plan_local(&[event_at(1, -60)], noon(), &mut seen);
        assert_eq!(kinds(&early), vec![NotificationKind::EventStarted]);

        let late = plan_local(&[event_at(2, -61)], noon(), &mut seen);
        assert!(late.is_empty());
    }

    #[test]
    fn test_soon_blocks_started_in_same_tick() {
        // Thirty seconds ahead satisfies both windows; only the first check
        // fires because they share a key.
        let mut seen = SeenNotifications::new();
        let due = plan_local(&[event_at(1, 30)], noon(), &mut seen);
        assert_eq!(kinds(&due), vec![NotificationKind::FiveMinutesBefore]);
    }

    #[test]
    fn test_soon_blocks_started_across_ticks() {
        let mut seen = SeenNotifications::new();
        let events = vec![event_at(1, 240)];

        let first = plan_local(&events, noon(), &mut seen);
        assert_eq!(kinds(&first), vec![NotificationKind::FiveMinutesBefore]);

        // Four minutes later the event is starting, but the shared key was
        // consumed by the five-minute alert.
        let at_start = plan_local(&events, noon() + Duration::seconds(240), &mut seen);
        assert!(at_start.is_empty());
    }

    #[test]
    fn test_started_consumes_shared_key() {
        let mut seen = SeenNotifications::new();
        let events = vec![event_at(1, 30)];

        let started = plan_local(&events, noon() + Duration::seconds(60), &mut seen);
        assert_eq!(kinds(&started), vec![NotificationKind::EventStarted]);

        // The shared key now also suppresses the five-minute alert.
        let soon = plan_local(&events, noon() - Duration::seconds(120), &mut seen);
        assert!(soon.is_empty());
    }

    #[test]
    fn test_expired_fires_independently_of_shared_key() {
        let mut seen = SeenNotifications::new();
        let events = vec![event_at(1, 240)];

        let soon = plan_local(&events, noon(), &mut seen);
        assert_eq!(kinds(&soon), vec![NotificationKind::FiveMinutesBefore]);

        let overdue = plan_local(&events, noon() + Duration::seconds(240 + 601), &mut seen);
        assert_eq!(kinds(&overdue), vec![NotificationKind::EventExpired]);
        assert!(overdue[0].message.contains("was scheduled for"));

        let again = plan_local(&events, noon() + Duration::seconds(240 + 700), &mut seen);
        assert!(again.is_empty());
    }

    #[test]
    fn test_expired_boundary_is_strict() {
        let mut seen = SeenNotifications::new();

        let at_bound = plan_local(&[event_at(1, -600)], noon(), &mut seen);
        assert!(at_bound.is_empty());

        let past_bound = plan_local(&[event_at(2, -601)], noon(), &mut seen);
        assert_eq!(kinds(&past_bound), vec![NotificationKind::EventExpired]);
    }

    #[test]
    fn test_far_future_event_is_silent() {
        let mut seen = SeenNotifications::new();
        let due = plan_local(&[event_at(1, 3_600)], noon(), &mut seen);
        assert!(due.is_empty());
    }

    #[test]
    fn test_events_dedup_independently() {
        let mut seen = SeenNotifications::new();
        let events = vec![event_at(1, 240), event_at(2, 120), event_at(3, -700)];

        let due = plan_local(&events, noon(), &mut seen);
        assert_eq!(
            kinds(&due),
            vec![
                NotificationKind::FiveMinutesBefore,
                NotificationKind::FiveMinutesBefore,
                NotificationKind::EventExpired,
            ]
        );

        let again = plan_local(&events, noon(), &mut seen);
        assert!(again.is_empty());
    }

    #[test]
    fn test_clear_allows_refire() {
        let mut seen = SeenNotifications::new();
        let events = vec![event_at(1, 240)];

        assert_eq!(plan_local(&events, noon(), &mut seen).len(), 1);
        assert!(plan_local(&events, noon(), &mut seen).is_empty());

        // Logout then fresh login.
        seen.clear();
        assert_eq!(plan_local(&events, noon(), &mut seen).len(), 1);
    }

    fn server_notification(event_id: i64, kind: NotificationKind) -> Notification {
        Notification {
            event_id,
            kind,
            title: "from server".to_string(),
            message: "from server".to_string(),
            event_time: noon(),
        }
    }

    #[test]
    fn test_server_plan_dedups_across_ticks() {
        let mut seen = SeenNotifications::new();
        let batch = vec![server_notification(1, NotificationKind::FiveMinutesBefore)];

        let first = plan_server(batch.clone(), &mut seen);
        assert_eq!(first.len(), 1);

        let second = plan_server(batch, &mut seen);
        assert!(second.is_empty());
    }

    #[test]
    fn test_server_plan_dedups_within_batch() {
        let mut seen = SeenNotifications::new();
        let batch = vec![
            server_notification(1, NotificationKind::EventStarted),
            server_notification(1, NotificationKind::EventStarted),
        ];

        let due = plan_server(batch, &mut seen);
        assert_eq!(due.len(), 1);
    }

    #[test]
    fn test_server_plan_keys_by_event_and_type() {
        // Unlike the local planner, the server's FIVE_MINUTES_BEFORE and
        // EVENT_STARTED carry distinct keys and both surface.
        let mut seen = SeenNotifications::new();
        let batch = vec![
            server_notification(1, NotificationKind::FiveMinutesBefore),
            server_notification(1, NotificationKind::EventStarted),
            server_notification(1, NotificationKind::EventExpired),
        ];

        let due = plan_server(batch, &mut seen);
        assert_eq!(due.len(), 3);
    }
}
