//! Simulated loading progress.
//!
//! The counter climbs from 0 to 100 in fixed steps on a repeating timer.
//! Step size divides the target exactly, so the final value is always 100.

#[cfg(test)]
#[path = "progress_test.rs"]
mod progress_test;

/// Amount added on every tick.
pub const PROGRESS_STEP: u8 = 2;
/// Counter value that completes the animation.
pub const PROGRESS_COMPLETE: u8 = 100;
/// Period of the repeating tick timer.
pub const TICK_INTERVAL_MS: u32 = 20;
/// Delay between the final tick and revealing the main content.
pub const REVEAL_DELAY_MS: u32 = 300;

/// Result of a single tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Counter advanced and is still below completion.
    Advanced(u8),
    /// Counter advanced and reached completion on this tick.
    Completed(u8),
    /// Counter had already completed; nothing changed.
    Finished,
}

/// Ephemeral progress counter, one per page load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProgressState {
    value: u8,
}

impl ProgressState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn value(&self) -> u8 {
        self.value
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.value >= PROGRESS_COMPLETE
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.is_complete() {
            return TickOutcome::Finished;
        }
        self.value += PROGRESS_STEP;
        if self.is_complete() {
            TickOutcome::Completed(self.value)
        } else {
            TickOutcome::Advanced(self.value)
        }
    }

    /// CSS width of the fill element.
    #[must_use]
    pub fn width(&self) -> String {
        format!("{}%", self.value)
    }

    /// Text shown in the percentage label.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}%", self.value)
    }
}

/// Which view the page is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadingPhase {
    #[default]
    Loading,
    Revealed,
}

impl LoadingPhase {
    #[must_use]
    pub fn is_revealed(self) -> bool {
        self == Self::Revealed
    }

    /// CSS `display` value for the main content.
    #[must_use]
    pub fn content_display(self) -> &'static str {
        match self {
            Self::Loading => "none",
            Self::Revealed => "block",
        }
    }
}
