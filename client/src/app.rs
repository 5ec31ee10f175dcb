//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use survey_session::RouteGuard;

use crate::components::guarded::Guarded;
use crate::pages::{about::AboutPage, admin::AdminPage, home::HomePage, login::LoginPage};
use crate::state::session::new_app_session;

/// Root application component.
///
/// Restores the session from browser storage once at startup, provides it and
/// the route guard as context, and wraps every route in [`Guarded`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let mut store = new_app_session();
    store.initialize();
    let session = RwSignal::new(store);

    provide_context(session);
    provide_context(RouteGuard::default());

    view! {
        <Title text="Survey"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=|| view! { <Guarded><LoginPage/></Guarded> }/>
                <Route path=StaticSegment("about") view=|| view! { <Guarded><AboutPage/></Guarded> }/>
                <Route path=StaticSegment("admin") view=|| view! { <Guarded><AdminPage/></Guarded> }/>
                <Route path=StaticSegment("") view=|| view! { <Guarded><HomePage/></Guarded> }/>
            </Routes>
        </Router>
    }
}
