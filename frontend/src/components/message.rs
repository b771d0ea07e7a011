use gloo::timers::callback::Timeout;
use yew::prelude::*;

const CLEAR_AFTER_MS: u32 = 3_000;

/// Visual style of a transient status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    fn class(self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

/// A transient message bound to one screen area.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusLine {
    pub kind: MessageKind,
    pub text: String,
}

impl StatusLine {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct StatusMessageProps {
    pub message: Option<StatusLine>,
    pub on_clear: Callback<()>,
}

/// Inline status area. Each new message schedules a one-shot 3 second clear.
/// The timer is not canceled when a newer message replaces the text, so with
/// messages in quick succession the earliest pending clear wipes the area.
#[function_component(StatusMessage)]
pub fn status_message(props: &StatusMessageProps) -> Html {
    {
        let on_clear = props.on_clear.clone();
        use_effect_with(props.message.clone(), move |message| {
            if message.is_some() {
                Timeout::new(CLEAR_AFTER_MS, move || on_clear.emit(())).forget();
            }
            || ()
        });
    }

    match &props.message {
        Some(line) => html! { <div class={line.kind.class()}>{ &line.text }</div> },
        None => html! {},
    }
}
