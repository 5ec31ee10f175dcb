//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page is mounted inside `Guarded`, so pages assume the guard already
//! admitted the current session.

pub mod about;
pub mod admin;
pub mod home;
pub mod login;
