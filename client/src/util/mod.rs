//! Browser glue and scheduling helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything that touches `web_sys` lives here behind `hydrate` gates, so
//! state modules stay pure and testable on the host.

pub mod dom;
pub mod schedule;
pub mod theme_store;
