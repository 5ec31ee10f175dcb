//! Session storage keys, remember-me horizon, and guard paths.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use time::Duration;

pub const DEFAULT_USER_KEY: &str = "user";
pub const DEFAULT_TOKEN_KEY: &str = "token";
pub const DEFAULT_REMEMBER_ME_DAYS: u32 = 10;

pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_HOME_PATH: &str = "/";
pub const DEFAULT_ADMIN_PATH: &str = "/admin";
pub const DEFAULT_PUBLIC_PATHS: [&str; 3] = ["/login", "/register", "/about"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Key holding the serialized identity record.
    pub user_key: String,
    /// Key holding the raw token string.
    pub token_key: String,
    /// How long a remember-me login stays valid.
    pub remember_me_days: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            user_key: DEFAULT_USER_KEY.to_owned(),
            token_key: DEFAULT_TOKEN_KEY.to_owned(),
            remember_me_days: DEFAULT_REMEMBER_ME_DAYS,
        }
    }
}

impl SessionConfig {
    /// Build config from a key lookup.
    ///
    /// Optional:
    /// - `SESSION_USER_KEY`: default `user`
    /// - `SESSION_TOKEN_KEY`: default `token`
    /// - `SESSION_REMEMBER_ME_DAYS`: default 10
    ///
    /// Blank or unparsable values fall back to the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        Self {
            user_key: non_blank("SESSION_USER_KEY").unwrap_or_else(|| DEFAULT_USER_KEY.to_owned()),
            token_key: non_blank("SESSION_TOKEN_KEY").unwrap_or_else(|| DEFAULT_TOKEN_KEY.to_owned()),
            remember_me_days: non_blank("SESSION_REMEMBER_ME_DAYS")
                .and_then(|v| parse_days(&v))
                .unwrap_or(DEFAULT_REMEMBER_ME_DAYS),
        }
    }

    /// Build config from process environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match std::env::var(key) {
            Ok(value) => Some(value),
            Err(_) => None,
        })
    }

    /// Remember-me validity window.
    #[must_use]
    pub fn remember_me_horizon(&self) -> Duration {
        Duration::days(i64::from(self.remember_me_days))
    }
}

fn parse_days(raw: &str) -> Option<u32> {
    match raw.parse::<u32>() {
        Ok(0) | Err(_) => None,
        Ok(days) => Some(days),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardConfig {
    pub login_path: String,
    pub home_path: String,
    /// Path reserved for admins.
    pub admin_path: String,
    /// Paths reachable without authentication.
    pub public_paths: Vec<String>,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            home_path: DEFAULT_HOME_PATH.to_owned(),
            admin_path: DEFAULT_ADMIN_PATH.to_owned(),
            public_paths: DEFAULT_PUBLIC_PATHS.iter().map(|p| (*p).to_owned()).collect(),
        }
    }
}

impl GuardConfig {
    #[must_use]
    pub fn is_public(&self, path: &str) -> bool {
        self.public_paths.iter().any(|p| p == path)
    }
}
