//! Authenticated landing page.

use leptos::prelude::*;

use crate::components::session_bar::SessionBar;
use crate::state::session::AppSession;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<AppSession>>();
    let greeting = move || {
        session.with(|s| match s.identity() {
            Some(identity) => format!("Welcome, {}.", identity.username),
            None => String::new(),
        })
    };

    view! {
        <div class="home-page">
            <SessionBar/>
            <h1>"Surveys"</h1>
            <p>{greeting}</p>
        </div>
    }
}
