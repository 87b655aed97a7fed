//! Direct DOM writes that sit outside the Leptos view tree.
//!
//! `<body>` is rendered by the SSR shell rather than by `App`, so the theme
//! class is written imperatively. SSR paths no-op.

use crate::error::PageError;
use crate::state::theme::Theme;

/// Replace the class attribute of `<body>` with the theme name.
///
/// # Errors
///
/// Returns an error if the window, document, or body is missing.
pub fn apply_theme(theme: Theme) -> Result<(), PageError> {
    #[cfg(feature = "hydrate")]
    {
        let document = web_sys::window()
            .ok_or(PageError::MissingWindow)?
            .document()
            .ok_or(PageError::MissingDocument)?;
        let body = document.body().ok_or(PageError::MissingBody)?;
        body.set_class_name(theme.as_str());
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
        Ok(())
    }
}
