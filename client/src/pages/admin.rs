//! Admin-only page. The guard sends everyone else home.

use leptos::prelude::*;

use crate::components::session_bar::SessionBar;

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <div class="admin-page">
            <SessionBar/>
            <h1>"Administration"</h1>
        </div>
    }
}
