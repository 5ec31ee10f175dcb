//! Shared auth helpers for routed views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed page runs the same guard pass before rendering, so the
//! restore-then-decide step lives here, independent of Leptos signals.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use survey_session::{Clock, Navigation, RouteGuard, SessionStore, Storage};

/// Result of one guard pass over a navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardOutcome {
    /// The pass restored or expired the identity; observers must re-render.
    pub session_changed: bool,
    pub navigation: Navigation,
}

/// Restore the session if needed, then decide where `path` lands.
pub fn run_guard<D, S, C>(guard: &RouteGuard, path: &str, session: &mut SessionStore<D, S, C>) -> GuardOutcome
where
    D: Storage,
    S: Storage,
    C: Clock,
{
    let session_changed = session.ensure_initialized();
    let navigation = guard.decide(path, session.access());
    GuardOutcome { session_changed, navigation }
}
