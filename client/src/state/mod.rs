//! Client-side state models.
//!
//! DESIGN
//! ======
//! The theme and the loading animation share nothing, so each gets its own
//! module. Components hold these values in `RwSignal`s provided by `App`.

pub mod progress;
pub mod theme;
