//! Header strip showing the signed-in user and a logout button.

use leptos::prelude::*;

use crate::state::session::AppSession;

#[component]
pub fn SessionBar() -> impl IntoView {
    let session = expect_context::<RwSignal<AppSession>>();

    let username = move || session.with(|s| s.identity().map(|i| i.username.clone()).unwrap_or_default());
    let is_admin = move || session.with(AppSession::is_admin);

    // Guarded re-renders on the session change and redirects to login.
    let on_logout = move |_| session.update(AppSession::logout);

    view! {
        <header class="session-bar">
            <span class="session-bar__user">{username}</span>
            <Show when=is_admin>
                <a href="/admin" class="session-bar__admin">"Admin"</a>
            </Show>
            <button class="session-bar__logout" on:click=on_logout>
                "Log out"
            </button>
        </header>
    }
}
