use yew::prelude::*;

use shared::models::{format_event_time, Event};

use crate::components::message::{StatusLine, StatusMessage};
use crate::services::api::{ApiError, ApiService};

#[derive(Properties, PartialEq)]
pub struct EventListProps {
    pub user_id: i64,
    /// Bumped by the parent when something outside this component (the
    /// creation form) changed the backing data.
    pub refresh: u32,
}

/// The user's events, rendered in the order the backend returns them.
#[function_component(EventList)]
pub fn event_list(props: &EventListProps) -> Html {
    let events = use_state(Vec::<Event>::new);
    let loading = use_state(|| true);
    let load_failed = use_state(|| false);
    let message = use_state(|| None::<StatusLine>);
    let local_refresh = use_state(|| 0u32);

    {
        let events = events.clone();
        let loading = loading.clone();
        let load_failed = load_failed.clone();

        use_effect_with(
            (props.user_id, props.refresh, *local_refresh),
            move |(user_id, _, _)| {
                let user_id = *user_id;
                wasm_bindgen_futures::spawn_local(async move {
                    match ApiService::events_for_user(user_id).await {
                        Ok(list) => {
                            events.set(list);
                            load_failed.set(false);
                        }
                        Err(e) => {
                            tracing::warn!("failed to load events: {e}");
                            load_failed.set(true);
                        }
                    }
                    loading.set(false);
                });
                || ()
            },
        );
    }

    let on_refresh = {
        let local_refresh = local_refresh.clone();
        Callback::from(move |_: MouseEvent| local_refresh.set(*local_refresh + 1))
    };

    let on_message_clear = {
        let message = message.clone();
        Callback::from(move |_: ()| message.set(None))
    };

    let on_delete = {
        let message = message.clone();
        let local_refresh = local_refresh.clone();
        Callback::from(move |event_id: i64| {
            if !gloo::dialogs::confirm("Delete this event?") {
                return;
            }
            let message = message.clone();
            let local_refresh = local_refresh.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ApiService::delete_event(event_id).await {
                    Ok(()) => {
                        message.set(Some(StatusLine::success("Event deleted!")));
                        local_refresh.set(*local_refresh + 1);
                    }
                    Err(ApiError::NotFound) => {
                        message.set(Some(StatusLine::error("Error: event not found")));
                    }
                    Err(e) => {
                        tracing::warn!("event deletion failed: {e}");
                        message.set(Some(StatusLine::error("Error: could not delete the event")));
                    }
                }
            });
        })
    };

    let body = if *loading {
        html! { <p class="loading">{ "Loading events..." }</p> }
    } else if *load_failed {
        html! { <div class="error">{ "Failed to load events" }</div> }
    } else if events.is_empty() {
        html! { <div class="no-events">{ "No events yet" }</div> }
    } else {
        events
            .iter()
            .map(|event| {
                let event_id = event.id;
                let on_delete = on_delete.clone();
                let description = event
                    .description
                    .as_deref()
                    .filter(|d| !d.is_empty())
                    .map(str::to_owned);

                html! {
                    <div key={event.id.to_string()} class="event-card">
                        <h4>{ &event.title }</h4>
                        <div class="event-time">
                            { format!("📅 {}", format_event_time(&event.event_time)) }
                        </div>
                        if let Some(description) = description {
                            <div class="event-description">{ description }</div>
                        }
                        <button
                            class="delete-btn"
                            onclick={Callback::from(move |_| on_delete.emit(event_id))}
                        >
                            { "Delete" }
                        </button>
                    </div>
                }
            })
            .collect::<Html>()
    };

    html! {
        <div class="events-section">
            <div class="events-header">
                <h3>{ "My events" }</h3>
                <button class="refresh-btn" onclick={on_refresh}>{ "Refresh" }</button>
            </div>
            <StatusMessage message={(*message).clone()} on_clear={on_message_clear} />
            <div class="events-container">
                { body }
            </div>
        </div>
    }
}
