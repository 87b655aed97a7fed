//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared state from the Leptos context providers set up in
//! `App`; they never own state themselves.

pub mod loading_screen;
pub mod theme_toggle;
