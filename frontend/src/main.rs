mod components;
mod poller;
mod services;

use yew::prelude::*;

use shared::models::{Notification, User};

use crate::components::auth::AuthPanel;
use crate::components::event_form::EventForm;
use crate::components::event_list::EventList;
use crate::components::notifications::{ActiveToast, NotificationArea};
use crate::poller::{NotificationPoller, PollMode};

/// Which notification pipeline this build uses. `ClientComputed` derives
/// situations from the raw event list on every tick; `ServerComputed` renders
/// whatever `/notifications/user/{id}` returns.
const POLL_MODE: PollMode = PollMode::ClientComputed;

#[function_component(App)]
fn app() -> Html {
    // The page controller owns the session; auth, events, and the poller get
    // it through props instead of reading ambient globals.
    let session = use_state(services::session::restore);
    let toasts = use_state(Vec::<ActiveToast>::new);
    let next_toast_id = use_mut_ref(|| 0u64);
    let events_refresh = use_state(|| 0u32);

    let on_login = {
        let session = session.clone();
        Callback::from(move |user: User| {
            services::session::save(&user);
            session.set(Some(user));
        })
    };

    let on_logout = {
        let session = session.clone();
        let toasts = toasts.clone();
        Callback::from(move |_: MouseEvent| {
            services::session::clear();
            toasts.set(Vec::new());
            session.set(None);
        })
    };

    let on_notifications = {
        let toasts = toasts.clone();
        let next_toast_id = next_toast_id.clone();
        Callback::from(move |batch: Vec<Notification>| {
            if batch.is_empty() {
                return;
            }
            let mut current = (*toasts).clone();
            let mut id = next_toast_id.borrow_mut();
            for notification in batch {
                *id += 1;
                current.push(ActiveToast {
                    id: *id,
                    notification,
                });
            }
            toasts.set(current);
        })
    };

    let on_dismiss = {
        let toasts = toasts.clone();
        Callback::from(move |toast_id: u64| {
            let remaining: Vec<ActiveToast> = toasts
                .iter()
                .filter(|toast| toast.id != toast_id)
                .cloned()
                .collect();
            toasts.set(remaining);
        })
    };

    let on_events_changed = {
        let events_refresh = events_refresh.clone();
        Callback::from(move |_: ()| events_refresh.set(*events_refresh + 1))
    };

    html! {
        <div id="app">
            <header class="header">
                <div class="container">
                    <h1>{ "Task Reminder" }</h1>
                    if let Some(user) = &*session {
                        <div class="user-info">
                            <span class="user-name">{ &user.username }</span>
                            <button class="logout-btn" onclick={on_logout}>{ "Log out" }</button>
                        </div>
                    }
                </div>
            </header>
            <main class="container">
                if let Some(user) = &*session {
                    <EventForm user_id={user.id} on_created={on_events_changed} />
                    <EventList user_id={user.id} refresh={*events_refresh} />
                    <NotificationPoller
                        user_id={user.id}
                        mode={POLL_MODE}
                        on_notifications={on_notifications}
                    />
                } else {
                    <AuthPanel on_login={on_login} />
                }
            </main>
            <NotificationArea toasts={(*toasts).clone()} on_dismiss={on_dismiss} />
        </div>
    }
}

fn main() {
    // Initialize tracing
    tracing_wasm::set_as_global_default();

    yew::Renderer::<App>::new().render();
}
