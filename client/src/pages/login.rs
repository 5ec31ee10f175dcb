//! Login page: username/password with an optional remember-me.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::state::session::AppSession;

const MISSING_FIELDS: &str = "Enter both username and password.";

/// Trim the username and require both fields.
fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok((username.to_owned(), password.to_owned()))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<AppSession>>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember_me = RwSignal::new(false);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (user_value, pass_value) = match validate_login_input(&username.get(), &password.get()) {
            Ok(values) => values,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        let remember = remember_me.get();
        busy.set(true);
        info.set("Signing in...".to_owned());

        // A successful login changes the session; the guard on this route
        // then redirects home.
        leptos::task::spawn_local(async move {
            match crate::net::api::login(&user_value, &pass_value).await {
                Ok(identity) => {
                    session.update(|s| s.login(identity, remember));
                    info.set(String::new());
                }
                Err(e) => info.set(format!("Sign-in failed: {e}")),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <form class="login-form" on:submit=on_submit>
                <h1>"Survey"</h1>
                <input
                    class="login-input"
                    type="text"
                    placeholder="Username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    class="login-input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <label class="login-remember">
                    <input
                        type="checkbox"
                        prop:checked=move || remember_me.get()
                        on:change=move |ev| remember_me.set(event_target_checked(&ev))
                    />
                    {move || format!("Remember me for {} days", session.with(|s| s.config().remember_me_days))}
                </label>
                <button class="login-button" type="submit" disabled=move || busy.get()>
                    "Sign in"
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
                <a href="/about">"About"</a>
            </form>
        </div>
    }
}
