//! Navigation guard run before every in-app route change.
//!
//! Rules are evaluated in a fixed order and the first match wins:
//!
//! 1. login path while authenticated: go home
//! 2. non-public path while anonymous: go to login
//! 3. admin path without admin access: go home
//! 4. otherwise proceed
//!
//! The guard holds no session state of its own. It reads the
//! [`SessionStore`] and, via [`RouteGuard::before_each`], lets the store lazily
//! restore itself first.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::clock::Clock;
use crate::config::GuardConfig;
use crate::identity::Access;
use crate::storage::Storage;
use crate::store::SessionStore;

/// Outcome of a guard check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
    /// Replace the navigation with one to this path.
    Redirect(String),
}

impl Navigation {
    #[must_use]
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            Self::Proceed => None,
            Self::Redirect(path) => Some(path),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteGuard {
    config: GuardConfig,
}

impl RouteGuard {
    #[must_use]
    pub fn new(config: GuardConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// Restore the session if needed, then decide where `target` lands.
    pub fn before_each<D, S, C>(&self, target: &str, session: &mut SessionStore<D, S, C>) -> Navigation
    where
        D: Storage,
        S: Storage,
        C: Clock,
    {
        session.ensure_initialized();
        self.decide(target, session.access())
    }

    /// Decide where a navigation to `target` lands for a session with `access`.
    ///
    /// Query strings and fragments are ignored when matching paths.
    #[must_use]
    pub fn decide(&self, target: &str, access: Access) -> Navigation {
        let path = path_of(target);
        let cfg = &self.config;

        let redirect = if path == cfg.login_path && access.is_authenticated() {
            Some(&cfg.home_path)
        } else if !cfg.is_public(path) && !access.is_authenticated() {
            Some(&cfg.login_path)
        } else if path == cfg.admin_path && !access.is_admin() {
            Some(&cfg.home_path)
        } else {
            None
        };

        match redirect {
            Some(to) => {
                tracing::debug!(path, to = %to, ?access, "navigation redirected");
                Navigation::Redirect(to.clone())
            }
            None => Navigation::Proceed,
        }
    }
}

fn path_of(target: &str) -> &str {
    target.split(['?', '#']).next().unwrap_or(target)
}
