//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write the shared session through Leptos context.

pub mod guarded;
pub mod session_bar;
