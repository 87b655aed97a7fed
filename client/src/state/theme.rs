//! Theme preference and icon state.
//!
//! DESIGN
//! ======
//! `ThemeController` owns the current theme only. Persistence goes through a
//! `PreferenceStore` passed in per call, so the same logic runs against
//! `localStorage` in the browser and an in-memory map in tests and SSR.
//! Applying the theme to `<body>` and the icons is left to reactive views.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;

use crate::error::PageError;
use crate::util::theme_store::PreferenceStore;

/// Storage key holding the persisted theme name.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Visual mode of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Class name applied to `<body>` and the value written to storage.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Interpret a stored preference.
    ///
    /// Missing or empty values fall back to `Dark`. Anything that is not
    /// `"dark"` behaves as light, since only the dark class is ever tested.
    #[must_use]
    pub fn from_stored(raw: Option<&str>) -> Self {
        match raw {
            None | Some("" | "dark") => Self::Dark,
            Some(_) => Self::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which of the two toggle glyphs is shown.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconVisibility {
    pub sun: bool,
    pub moon: bool,
}

impl IconVisibility {
    #[must_use]
    pub fn for_theme(theme: Theme) -> Self {
        let sun = theme == Theme::Dark;
        Self { sun, moon: !sun }
    }

    /// CSS `display` value for the sun icon.
    #[must_use]
    pub fn sun_display(self) -> &'static str {
        display(self.sun)
    }

    /// CSS `display` value for the moon icon.
    #[must_use]
    pub fn moon_display(self) -> &'static str {
        display(self.moon)
    }
}

fn display(visible: bool) -> &'static str {
    if visible { "block" } else { "none" }
}

/// Current theme plus the toggle/persist operations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeController {
    theme: Theme,
}

impl ThemeController {
    /// Build a controller from the persisted preference, defaulting to dark.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn initialize(store: &impl PreferenceStore) -> Result<Self, PageError> {
        let stored = store.get(THEME_STORAGE_KEY)?;
        Ok(Self { theme: Theme::from_stored(stored.as_deref()) })
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn icons(&self) -> IconVisibility {
        IconVisibility::for_theme(self.theme)
    }

    /// Flip the theme and persist the new value.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the write; the theme is left
    /// unchanged in that case.
    pub fn toggle(&mut self, store: &mut impl PreferenceStore) -> Result<Theme, PageError> {
        let next = self.theme.toggled();
        store.set(THEME_STORAGE_KEY, next.as_str())?;
        self.theme = next;
        Ok(next)
    }
}
