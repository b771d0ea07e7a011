//! Timer-driven notification polling.
//!
//! The poller is mounted only while a session exists; unmounting it cancels
//! the interval and drops the dedup state, which is what logout relies on.
//! Classification and dedup live in `shared::notify`; this component only
//! fetches, plans, and hands the due notifications to the presentation layer.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::timers::callback::Interval;
use yew::prelude::*;

use shared::models::Notification;
use shared::notify::{plan_local, plan_server, SeenNotifications, POLL_INTERVAL_SECS};

use crate::services::api::ApiService;

/// Where notification contents come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollMode {
    /// Fetch raw events and classify them client side.
    ClientComputed,
    /// Fetch notifications the backend already classified.
    ServerComputed,
}

#[derive(Properties, PartialEq)]
pub struct NotificationPollerProps {
    pub user_id: i64,
    pub mode: PollMode,
    pub on_notifications: Callback<Vec<Notification>>,
}

#[function_component(NotificationPoller)]
pub fn notification_poller(props: &NotificationPollerProps) -> Html {
    let user_id = props.user_id;
    let mode = props.mode;
    let on_notifications = props.on_notifications.clone();

    use_effect_with((user_id, mode), move |_| {
        let seen = Rc::new(RefCell::new(SeenNotifications::new()));
        // A slow poll may still be in flight when the next tick fires; the
        // tick is skipped rather than stacking requests.
        let in_flight = Rc::new(Cell::new(false));
        // Flipped on unmount so a response that raced logout is discarded
        // instead of touching dedup state or rendering into a dead view.
        let cancelled = Rc::new(Cell::new(false));

        let tick = {
            let seen = seen.clone();
            let in_flight = in_flight.clone();
            let cancelled = cancelled.clone();
            move || {
                if in_flight.get() {
                    tracing::debug!("previous poll still in flight, skipping tick");
                    return;
                }
                in_flight.set(true);

                let seen = seen.clone();
                let in_flight = in_flight.clone();
                let cancelled = cancelled.clone();
                let on_notifications = on_notifications.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let due = poll_once(user_id, mode, &seen, &cancelled).await;
                    in_flight.set(false);
                    if cancelled.get() {
                        return;
                    }
                    if let Some(due) = due {
                        if !due.is_empty() {
                            on_notifications.emit(due);
                        }
                    }
                });
            }
        };

        // The first check runs immediately so a due notification does not
        // wait a full period after login.
        tick();
        let interval = Interval::new(POLL_INTERVAL_SECS * 1_000, tick);

        move || {
            cancelled.set(true);
            drop(interval);
        }
    });

    html! {}
}

/// One poll cycle. Failures are logged and swallowed; the next tick retries
/// with dedup state untouched.
async fn poll_once(
    user_id: i64,
    mode: PollMode,
    seen: &Rc<RefCell<SeenNotifications>>,
    cancelled: &Rc<Cell<bool>>,
) -> Option<Vec<Notification>> {
    match mode {
        PollMode::ClientComputed => match ApiService::events_for_user(user_id).await {
            Ok(events) => {
                if cancelled.get() {
                    return None;
                }
                let now = chrono::Local::now().naive_local();
                Some(plan_local(&events, now, &mut seen.borrow_mut()))
            }
            Err(e) => {
                tracing::warn!("notification poll failed: {e}");
                None
            }
        },
        PollMode::ServerComputed => match ApiService::notifications_for_user(user_id).await {
            Ok(batch) => {
                if cancelled.get() {
                    return None;
                }
                Some(plan_server(batch, &mut seen.borrow_mut()))
            }
            Err(e) => {
                tracing::warn!("notification poll failed: {e}");
                None
            }
        },
    }
}
