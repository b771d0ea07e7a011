use chrono::{Local, NaiveDateTime};
use validator::Validate;
use yew::prelude::*;

use shared::api::CreateEventRequest;

use crate::components::bind_input;
use crate::components::message::{StatusLine, StatusMessage};
use crate::services::api::ApiService;

#[derive(Properties, PartialEq)]
pub struct EventFormProps {
    pub user_id: i64,
    pub on_created: Callback<()>,
}

/// Form for scheduling a new event.
#[function_component(EventForm)]
pub fn event_form(props: &EventFormProps) -> Html {
    let user_id = props.user_id;
    let title = use_state(String::new);
    let description = use_state(String::new);
    let time_value = use_state(now_input_value);
    let message = use_state(|| None::<StatusLine>);

    let on_message_clear = {
        let message = message.clone();
        Callback::from(move |_: ()| message.set(None))
    };

    let on_submit = {
        let title = title.clone();
        let description = description.clone();
        let time_value = time_value.clone();
        let message = message.clone();
        let on_created = props.on_created.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let Some(event_time) = parse_input_time(&time_value) else {
                message.set(Some(StatusLine::error("Enter a valid event time")));
                return;
            };
            let request = CreateEventRequest {
                title: (*title).clone(),
                description: Some((*description).clone()).filter(|d| !d.trim().is_empty()),
                event_time,
                user_id,
            };
            if request.validate().is_err() {
                message.set(Some(StatusLine::error("Enter a title for the event")));
                return;
            }

            let title = title.clone();
            let description = description.clone();
            let time_value = time_value.clone();
            let message = message.clone();
            let on_created = on_created.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ApiService::create_event(&request).await {
                    Ok(_) => {
                        message.set(Some(StatusLine::success("Event created!")));
                        title.set(String::new());
                        description.set(String::new());
                        time_value.set(now_input_value());
                        on_created.emit(());
                    }
                    Err(e) => {
                        tracing::warn!("event creation failed: {e}");
                        message.set(Some(StatusLine::error("Error: could not create the event")));
                    }
                }
            });
        })
    };

    html! {
        <div class="event-form-container">
            <h3>{ "New event" }</h3>
            <StatusMessage message={(*message).clone()} on_clear={on_message_clear} />
            <form class="event-form" onsubmit={on_submit}>
                <input
                    type="text"
                    placeholder="Title"
                    value={(*title).clone()}
                    oninput={bind_input(&title)}
                />
                <input
                    type="text"
                    placeholder="Description (optional)"
                    value={(*description).clone()}
                    oninput={bind_input(&description)}
                />
                <input
                    type="datetime-local"
                    value={(*time_value).clone()}
                    oninput={bind_input(&time_value)}
                />
                <button type="submit">{ "Create event" }</button>
            </form>
        </div>
    }
}

/// Current local time at the minute precision a datetime-local input takes.
fn now_input_value() -> String {
    Local::now().format("%Y-%m-%dT%H:%M").to_string()
}

/// Extend the minute-precision input value to the second-precision timestamp
/// the backend expects. Some user agents already include seconds, so that
/// shape is accepted as-is.
fn parse_input_time(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(&format!("{value}:00"), "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minute_precision_input() {
        let parsed = parse_input_time("2026-08-07T12:30").unwrap();
        assert_eq!(parsed.format("%Y-%m-%dT%H:%M:%S").to_string(), "2026-08-07T12:30:00");
    }

    #[test]
    fn test_parse_second_precision_input() {
        let parsed = parse_input_time("2026-08-07T12:30:45").unwrap();
        assert_eq!(parsed.format("%H:%M:%S").to_string(), "12:30:45");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_input_time("not a time").is_none());
        assert!(parse_input_time("").is_none());
    }
}
