//! Public page reachable without signing in.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="about-page">
            <h1>"About"</h1>
            <p>"Collects survey responses."</p>
            <a href="/login">"Sign in"</a>
        </div>
    }
}
