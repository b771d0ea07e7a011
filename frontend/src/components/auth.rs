use yew::prelude::*;

use shared::models::User;

use crate::components::bind_input;
use crate::components::message::{StatusLine, StatusMessage};
use crate::services::auth;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthView {
    Login,
    Register,
}

#[derive(Properties, PartialEq)]
pub struct AuthPanelProps {
    pub on_login: Callback<User>,
}

/// Login and registration forms with a toggle between them.
///
/// Successful registration drops back to the login view with the username
/// pre-filled; the account is not logged in automatically.
#[function_component(AuthPanel)]
pub fn auth_panel(props: &AuthPanelProps) -> Html {
    let view = use_state(|| AuthView::Login);
    let message = use_state(|| None::<StatusLine>);

    let login_username = use_state(String::new);
    let login_password = use_state(String::new);
    let reg_username = use_state(String::new);
    let reg_password = use_state(String::new);
    let reg_confirm = use_state(String::new);

    let on_message_clear = {
        let message = message.clone();
        Callback::from(move |_: ()| message.set(None))
    };

    let show_register = {
        let view = view.clone();
        let message = message.clone();
        Callback::from(move |_: MouseEvent| {
            message.set(None);
            view.set(AuthView::Register);
        })
    };

    let show_login = {
        let view = view.clone();
        let message = message.clone();
        Callback::from(move |_: MouseEvent| {
            message.set(None);
            view.set(AuthView::Login);
        })
    };

    let on_login_submit = {
        let login_username = login_username.clone();
        let login_password = login_password.clone();
        let message = message.clone();
        let on_login = props.on_login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let username = (*login_username).clone();
            let password = (*login_password).clone();
            if username.is_empty() || password.is_empty() {
                return;
            }
            let message = message.clone();
            let on_login = on_login.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match auth::login(&username, &password).await {
                    Ok(user) => on_login.emit(user),
                    Err(e) => message.set(Some(StatusLine::error(format!("Error: {e}")))),
                }
            });
        })
    };

    let on_register_submit = {
        let reg_username = reg_username.clone();
        let reg_password = reg_password.clone();
        let reg_confirm = reg_confirm.clone();
        let login_username = login_username.clone();
        let view = view.clone();
        let message = message.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let username = (*reg_username).clone();
            let password = (*reg_password).clone();
            let confirm = (*reg_confirm).clone();
            if username.is_empty() || password.is_empty() {
                return;
            }
            let reg_username = reg_username.clone();
            let reg_password = reg_password.clone();
            let reg_confirm = reg_confirm.clone();
            let login_username = login_username.clone();
            let view = view.clone();
            let message = message.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match auth::register(&username, &password, &confirm).await {
                    Ok(user) => {
                        message.set(Some(StatusLine::success(
                            "Registration successful! Now log in.",
                        )));
                        login_username.set(user.username);
                        reg_username.set(String::new());
                        reg_password.set(String::new());
                        reg_confirm.set(String::new());
                        view.set(AuthView::Login);
                    }
                    Err(e) => message.set(Some(StatusLine::error(format!("Error: {e}")))),
                }
            });
        })
    };

    html! {
        <div class="auth-container">
            <StatusMessage message={(*message).clone()} on_clear={on_message_clear} />
            { match *view {
                AuthView::Login => html! {
                    <form class="auth-form" onsubmit={on_login_submit}>
                        <h2>{ "Log in" }</h2>
                        <input
                            type="text"
                            placeholder="Username"
                            value={(*login_username).clone()}
                            oninput={bind_input(&login_username)}
                        />
                        <input
                            type="password"
                            placeholder="Password"
                            value={(*login_password).clone()}
                            oninput={bind_input(&login_password)}
                        />
                        <button type="submit">{ "Log in" }</button>
                        <button type="button" class="link-btn" onclick={show_register}>
                            { "Need an account? Register" }
                        </button>
                    </form>
                },
                AuthView::Register => html! {
                    <form class="auth-form" onsubmit={on_register_submit}>
                        <h2>{ "Register" }</h2>
                        <input
                            type="text"
                            placeholder="Username"
                            value={(*reg_username).clone()}
                            oninput={bind_input(&reg_username)}
                        />
                        <input
                            type="password"
                            placeholder="Password"
                            value={(*reg_password).clone()}
                            oninput={bind_input(&reg_password)}
                        />
                        <input
                            type="password"
                            placeholder="Confirm password"
                            value={(*reg_confirm).clone()}
                            oninput={bind_input(&reg_confirm)}
                        />
                        <button type="submit">{ "Register" }</button>
                        <button type="button" class="link-btn" onclick={show_login}>
                            { "Back to log in" }
                        </button>
                    </form>
                },
            }}
        </div>
    }
}
