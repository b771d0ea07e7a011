pub mod auth;
pub mod event_form;
pub mod event_list;
pub mod message;
pub mod notifications;

use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Bind a text input to a string state handle.
pub(crate) fn bind_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}
