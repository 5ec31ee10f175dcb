//! Authentication session layer for the survey web client.
//!
//! This crate is platform-independent: it owns the current user's identity,
//! persists it into two key/value storage areas (durable and session-scoped),
//! and decides where an in-app navigation should land given that identity.
//! Browser bindings for the storage areas and the clock live in the `client`
//! crate; tests and non-browser builds use the in-memory backends here.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`identity`] | Canonical identity schema and the persisted record format |
//! | [`storage`] | Key/value storage trait and the in-memory backend |
//! | [`clock`] | Millisecond clock trait with system and manual clocks |
//! | [`config`] | Storage keys, remember-me horizon, guard paths |
//! | [`store`] | [`store::SessionStore`]: login, logout, restore, derived flags |
//! | [`guard`] | [`guard::RouteGuard`]: per-navigation redirect decision |
//! | [`error`] | Typed storage and session errors |

pub mod clock;
pub mod config;
pub mod error;
pub mod guard;
pub mod identity;
pub mod storage;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{GuardConfig, SessionConfig};
pub use error::{SessionError, StorageError};
pub use guard::{Navigation, RouteGuard};
pub use identity::{Access, Identity, Role};
pub use storage::{MemoryStorage, Storage, StorageArea};
pub use store::{Persistence, SessionStore};
