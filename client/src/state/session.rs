//! The browser-bound session store provided to the component tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds one [`AppSession`], restores it from storage, and provides it
//! as an `RwSignal<AppSession>` context. Pages read identity from it, the
//! login page and logout buttons mutate it, and `Guarded` consults it on
//! every navigation.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use survey_session::{SessionConfig, SessionStore};

use crate::util::browser_clock::BrowserClock;
use crate::util::browser_storage::BrowserStorage;

pub type AppSession = SessionStore<BrowserStorage, BrowserStorage, BrowserClock>;

/// Build an unrestored session over `localStorage`/`sessionStorage`.
pub fn new_app_session() -> AppSession {
    SessionStore::new(BrowserStorage::Local, BrowserStorage::Session, BrowserClock, session_config())
}

/// Session config with overrides baked in at build time.
pub fn session_config() -> SessionConfig {
    SessionConfig::from_lookup(build_env)
}

/// Build-time values for the keys `SessionConfig::from_lookup` reads.
fn build_env(key: &str) -> Option<String> {
    let value = match key {
        "SESSION_USER_KEY" => option_env!("SESSION_USER_KEY"),
        "SESSION_TOKEN_KEY" => option_env!("SESSION_TOKEN_KEY"),
        "SESSION_REMEMBER_ME_DAYS" => option_env!("SESSION_REMEMBER_ME_DAYS"),
        _ => None,
    };
    value.map(str::to_owned)
}
