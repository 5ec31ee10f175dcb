//! Current-user session state with browser-style persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! One [`SessionStore`] is constructed at application start and handed to the
//! route guard and the UI layer. It is the only writer of the `user`/`token`
//! keys in both storage areas.
//!
//! PERSISTENCE
//! ===========
//! A remember-me login is written to the durable area with an expiry; any
//! other login is written to the session-scoped area. At most one area holds
//! a record for the current identity.
//!
//! ERROR HANDLING
//! ==============
//! Every public operation is total. Malformed records are logged and purged,
//! storage failures are logged, and the session degrades to anonymous rather
//! than surfacing an error during startup or navigation.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::clock::{Clock, duration_ms};
use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::identity::{Access, Identity, StoredRecord};
use crate::storage::Storage;

/// Where the current identity is persisted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Persistence {
    #[default]
    None,
    /// Session-scoped area, gone when the tab closes.
    SessionScoped,
    /// Durable area, bounded by an expiry.
    RememberMe,
}

#[derive(Clone, Debug)]
pub struct SessionStore<D, S, C> {
    durable: D,
    session: S,
    clock: C,
    config: SessionConfig,
    identity: Option<Identity>,
    persistence: Persistence,
    expires_at: Option<i64>,
}

impl<D, S, C> SessionStore<D, S, C>
where
    D: Storage,
    S: Storage,
    C: Clock,
{
    /// Create an empty, unauthenticated store. Nothing is read until
    /// [`Self::initialize`].
    pub fn new(durable: D, session: S, clock: C, config: SessionConfig) -> Self {
        Self { durable, session, clock, config, identity: None, persistence: Persistence::None, expires_at: None }
    }

    /// Restore a persisted identity.
    ///
    /// A live remember-me record in the durable area takes precedence. An
    /// expired or non-remember-me durable record is purged. Otherwise a
    /// session-scoped record is adopted. Unparsable records are purged.
    pub fn initialize(&mut self) {
        let now = self.clock.now_ms();

        match read_record(&self.durable, &self.config) {
            Ok(Some(record)) if record.is_live_remember_me(now) => {
                let expires = record.expires;
                self.adopt(record.into_identity(), Persistence::RememberMe, Some(expires));
                return;
            }
            Ok(Some(record)) => {
                tracing::debug!(
                    username = %record.username,
                    expires = record.expires,
                    now,
                    "discarding expired remember-me session"
                );
                purge(&self.durable, &self.config);
            }
            Ok(None) => {}
            Err(e) => discard_unreadable(&self.durable, &self.config, &e),
        }

        match read_record(&self.session, &self.config) {
            Ok(Some(record)) => self.adopt(record.into_identity(), Persistence::SessionScoped, None),
            Ok(None) => {}
            Err(e) => discard_unreadable(&self.session, &self.config, &e),
        }
    }

    /// Bring the in-memory session up to date before a navigation.
    ///
    /// A remember-me session whose expiry has passed is logged out; with no
    /// identity held, storage is consulted via [`Self::initialize`]. Returns
    /// `true` when the identity changed.
    pub fn ensure_initialized(&mut self) -> bool {
        if let Some(expires) = self.expires_at {
            if expires <= self.clock.now_ms() {
                tracing::debug!(expires, "remember-me session expired");
                self.logout();
                return true;
            }
        }
        if self.identity.is_some() {
            return false;
        }
        self.initialize();
        self.identity.is_some()
    }

    /// Make `identity` the current user and persist it.
    ///
    /// With `remember_me` the record goes to the durable area with an expiry
    /// of now plus the configured horizon; otherwise it goes to the
    /// session-scoped area. A stale record in the other area is removed.
    pub fn login(&mut self, identity: Identity, remember_me: bool) {
        let (persistence, expires_at) = if remember_me {
            let horizon = duration_ms(self.config.remember_me_horizon());
            (Persistence::RememberMe, Some(self.clock.now_ms().saturating_add(horizon)))
        } else {
            (Persistence::SessionScoped, None)
        };
        let record = StoredRecord::new(&identity, remember_me, expires_at.unwrap_or(0));

        if remember_me {
            purge(&self.session, &self.config);
            persist(&self.durable, &self.config, &record);
        } else {
            purge(&self.durable, &self.config);
            persist(&self.session, &self.config, &record);
        }

        tracing::debug!(username = %identity.username, role = ?identity.role, remember_me, "session login");
        self.adopt(identity, persistence, expires_at);
    }

    /// Forget the current user and remove records from both areas.
    pub fn logout(&mut self) {
        if let Some(identity) = self.identity.take() {
            tracing::debug!(username = %identity.username, "session logout");
        }
        self.persistence = Persistence::None;
        self.expires_at = None;
        purge(&self.durable, &self.config);
        purge(&self.session, &self.config);
    }

    fn adopt(&mut self, identity: Identity, persistence: Persistence, expires_at: Option<i64>) {
        self.identity = Some(identity);
        self.persistence = persistence;
        self.expires_at = expires_at;
    }
}

impl<D, S, C> SessionStore<D, S, C> {
    #[must_use]
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    #[must_use]
    pub fn access(&self) -> Access {
        Access::of(self.identity.as_ref())
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.identity.as_ref().is_some_and(|i| i.role.is_admin())
    }

    /// Authenticated and not an admin.
    #[must_use]
    pub fn is_user(&self) -> bool {
        self.identity.as_ref().is_some_and(|i| !i.role.is_admin())
    }

    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.identity.as_ref().map(|i| i.token.as_str())
    }

    #[must_use]
    pub fn persistence(&self) -> Persistence {
        self.persistence
    }

    /// Remember-me expiry in epoch milliseconds.
    #[must_use]
    pub fn expires_at(&self) -> Option<i64> {
        self.expires_at
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn durable(&self) -> &D {
        &self.durable
    }

    #[must_use]
    pub fn session_scoped(&self) -> &S {
        &self.session
    }

    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }
}

fn read_record<T: Storage>(storage: &T, config: &SessionConfig) -> Result<Option<StoredRecord>, SessionError> {
    let Some(raw) = storage.get_item(&config.user_key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| SessionError::Malformed { area: storage.area(), source })
}

fn write_record<T: Storage>(storage: &T, config: &SessionConfig, record: &StoredRecord) -> Result<(), SessionError> {
    let raw = serde_json::to_string(record).map_err(SessionError::Encode)?;
    storage.set_item(&config.user_key, &raw)?;
    storage.set_item(&config.token_key, &record.token)?;
    Ok(())
}

/// Write `record`, leaving the area empty rather than half-written on failure.
fn persist<T: Storage>(storage: &T, config: &SessionConfig, record: &StoredRecord) {
    if let Err(e) = write_record(storage, config, record) {
        tracing::warn!(area = %storage.area(), error = %e, "failed to persist session; keeping it in memory only");
        purge(storage, config);
    }
}

fn remove_keys<T: Storage>(storage: &T, config: &SessionConfig) -> Result<(), SessionError> {
    storage.remove_item(&config.user_key)?;
    storage.remove_item(&config.token_key)?;
    Ok(())
}

fn purge<T: Storage>(storage: &T, config: &SessionConfig) {
    if let Err(e) = remove_keys(storage, config) {
        tracing::warn!(area = %storage.area(), error = %e, "failed to clear stored session");
    }
}

fn discard_unreadable<T: Storage>(storage: &T, config: &SessionConfig, error: &SessionError) {
    match error {
        SessionError::Malformed { .. } => {
            tracing::warn!(area = %storage.area(), error = %error, "purging malformed stored session");
            purge(storage, config);
        }
        _ => tracing::warn!(area = %storage.area(), error = %error, "stored session unreadable"),
    }
}
