use gloo::timers::callback::Timeout;
use yew::prelude::*;

use shared::models::{format_event_time, Notification, NotificationKind};

const AUTO_DISMISS_MS: u32 = 10_000;
const EXIT_ANIMATION_MS: u32 = 300;

/// A toast currently on screen. The id distinguishes repeated notifications
/// for dismissal; it never reaches the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveToast {
    pub id: u64,
    pub notification: Notification,
}

fn icon(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::FiveMinutesBefore => "🔔",
        NotificationKind::EventStarted => "⏰",
        NotificationKind::EventExpired => "⚠️",
    }
}

fn severity(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::FiveMinutesBefore => "info",
        NotificationKind::EventStarted | NotificationKind::EventExpired => "urgent",
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub toast: ActiveToast,
    pub on_dismiss: Callback<u64>,
}

/// One dismissible notification card.
///
/// Auto-removes after ten seconds; the close control takes the same animated
/// exit path early.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let leaving = use_state(|| false);

    let begin_dismiss = {
        let leaving = leaving.clone();
        let on_dismiss = props.on_dismiss.clone();
        let toast_id = props.toast.id;
        Callback::from(move |_: ()| {
            if *leaving {
                return;
            }
            leaving.set(true);
            let on_dismiss = on_dismiss.clone();
            Timeout::new(EXIT_ANIMATION_MS, move || on_dismiss.emit(toast_id)).forget();
        })
    };

    {
        let begin_dismiss = begin_dismiss.clone();
        use_effect_with(props.toast.id, move |_| {
            let auto_dismiss = Timeout::new(AUTO_DISMISS_MS, move || begin_dismiss.emit(()));
            move || drop(auto_dismiss)
        });
    }

    let notification = &props.toast.notification;
    let class = format!(
        "notification notification-{}{}",
        severity(notification.kind),
        if *leaving { " notification-leaving" } else { "" },
    );

    html! {
        <div {class}>
            <div class="notification-icon">{ icon(notification.kind) }</div>
            <div class="notification-content">
                <div class="notification-title">{ &notification.title }</div>
                <div class="notification-message">{ &notification.message }</div>
                <div class="notification-time">{ format_event_time(&notification.event_time) }</div>
            </div>
            <button class="notification-close" onclick={begin_dismiss.reform(|_: MouseEvent| ())}>
                { "×" }
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationAreaProps {
    pub toasts: Vec<ActiveToast>,
    pub on_dismiss: Callback<u64>,
}

/// Container for the live toasts. Emptied wholesale by the controller on
/// logout.
#[function_component(NotificationArea)]
pub fn notification_area(props: &NotificationAreaProps) -> Html {
    html! {
        <div id="notifications-container">
            { for props.toasts.iter().map(|toast| html! {
                <Toast
                    key={toast.id.to_string()}
                    toast={toast.clone()}
                    on_dismiss={props.on_dismiss.clone()}
                />
            }) }
        </div>
    }
}
