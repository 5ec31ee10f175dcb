//! Canonical identity schema and the persisted session record.
//!
//! DESIGN
//! ======
//! Privilege is a [`Role`] enum. Older clients persisted a boolean `is_admin`
//! instead; both shapes are accepted on read so a user who logged in with
//! remember-me before the change is not signed out. Writes always emit `role`.

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use serde::{Deserialize, Serialize};

/// Privilege level granted by the backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl Role {
    #[must_use]
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// The authenticated user as returned by the login endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "IdentityWire")]
pub struct Identity {
    /// Backend user id, when the endpoint provides one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub username: String,
    pub role: Role,
    /// Bearer token for API calls.
    pub token: String,
}

impl Identity {
    #[must_use]
    pub fn new(username: impl Into<String>, role: Role, token: impl Into<String>) -> Self {
        Self { id: None, username: username.into(), role, token: token.into() }
    }

    #[must_use]
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }
}

/// What the current session is allowed to reach.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Access {
    Anonymous,
    User,
    Admin,
}

impl Access {
    #[must_use]
    pub fn of(identity: Option<&Identity>) -> Self {
        match identity.map(|i| i.role) {
            None => Self::Anonymous,
            Some(Role::User) => Self::User,
            Some(Role::Admin) => Self::Admin,
        }
    }

    #[must_use]
    pub fn is_authenticated(self) -> bool {
        !matches!(self, Self::Anonymous)
    }

    #[must_use]
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// Accepts both the `role` and the legacy `is_admin` shapes.
#[derive(Deserialize)]
struct IdentityWire {
    #[serde(default)]
    id: Option<u64>,
    username: String,
    #[serde(default)]
    role: Option<Role>,
    #[serde(default)]
    is_admin: Option<bool>,
    token: String,
}

impl From<IdentityWire> for Identity {
    fn from(wire: IdentityWire) -> Self {
        let role = wire.role.unwrap_or(if wire.is_admin.unwrap_or(false) { Role::Admin } else { Role::User });
        Self { id: wire.id, username: wire.username, role, token: wire.token }
    }
}

/// JSON document stored under the `user` key.
///
/// `expires` is epoch milliseconds, `0` when `remember_me` is false.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct StoredRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing)]
    pub is_admin: Option<bool>,
    pub token: String,
    #[serde(rename = "rememberMe", default)]
    pub remember_me: bool,
    #[serde(default)]
    pub expires: i64,
}

impl StoredRecord {
    pub fn new(identity: &Identity, remember_me: bool, expires: i64) -> Self {
        Self {
            id: identity.id,
            username: identity.username.clone(),
            role: Some(identity.role),
            is_admin: None,
            token: identity.token.clone(),
            remember_me,
            expires,
        }
    }

    /// True when this is a remember-me record whose expiry is still ahead.
    pub fn is_live_remember_me(&self, now_ms: i64) -> bool {
        self.remember_me && self.expires > now_ms
    }

    pub fn into_identity(self) -> Identity {
        IdentityWire {
            id: self.id,
            username: self.username,
            role: self.role,
            is_admin: self.is_admin,
            token: self.token,
        }
        .into()
    }
}
