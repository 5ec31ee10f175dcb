//! Route wrapper that applies the navigation guard before rendering a page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `leptos_router` has no before-navigation hook, so every routed page is
//! wrapped in `Guarded`. The guard pass runs synchronously while the route
//! renders; a denied navigation renders a `Redirect` instead of the page, so
//! protected markup is never produced for a session that may not see it.

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;
use survey_session::{Navigation, RouteGuard};

use crate::state::session::AppSession;
use crate::util::auth::run_guard;

#[component]
pub fn Guarded(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<AppSession>>();
    let guard = expect_context::<RouteGuard>();
    let location = use_location();

    move || {
        let path = location.pathname.get();

        // Only notify observers when the pass actually restored or expired
        // the identity, otherwise this view would re-run itself forever.
        let mut navigation = Navigation::Proceed;
        session.maybe_update(|store| {
            let outcome = run_guard(&guard, &path, store);
            navigation = outcome.navigation;
            outcome.session_changed
        });
        session.track();

        match navigation {
            Navigation::Redirect(to) => view! { <Redirect path=to/> }.into_any(),
            Navigation::Proceed => children().into_any(),
        }
    }
}
