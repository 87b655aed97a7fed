//! Theme toggle button with the sun/moon glyph pair.

use leptos::prelude::*;

use crate::state::theme::ThemeController;

/// Button that flips between dark and light.
///
/// The sun shows while the page is dark and the moon while it is light;
/// exactly one glyph is displayed at a time.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let controller = expect_context::<RwSignal<ThemeController>>();
    let icons = move || controller.get().icons();

    let on_toggle = move |_| {
        #[cfg(feature = "hydrate")]
        {
            use crate::util::theme_store::LocalStore;

            let mut next = controller.get_untracked();
            match LocalStore::open().and_then(|mut store| next.toggle(&mut store)) {
                Ok(theme) => {
                    log::debug!("theme toggled to {theme}");
                    controller.set(next);
                }
                Err(e) => log::error!("theme toggle failed: {e}"),
            }
        }
    };

    view! {
        <button id="themeToggle" class="theme-toggle" title="Toggle theme" on:click=on_toggle>
            <span
                id="sunIcon"
                class="theme-toggle__icon"
                style:display=move || icons().sun_display()
            >
                "\u{2600}"
            </span>
            <span
                id="moonIcon"
                class="theme-toggle__icon"
                style:display=move || icons().moon_display()
            >
                "\u{263E}"
            </span>
        </button>
    }
}
