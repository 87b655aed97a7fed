//! Landing page: loading overlay, theme toggle, and the main content.
//!
//! ARCHITECTURE
//! ============
//! Both behaviors start once, after hydration, from a single effect. The
//! theme is read from storage and written to `<body>`; the loading animation
//! runs as one local task that reveals the content when it finishes. A
//! storage fault while reading the theme stops startup before the animation.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::loading_screen::LoadingScreen;
use crate::components::theme_toggle::ThemeToggle;
use crate::error::PageError;
use crate::state::progress::{LoadingPhase, ProgressState};
use crate::state::theme::ThemeController;
use crate::util::theme_store::PreferenceStore;

#[component]
pub fn HomePage() -> impl IntoView {
    let controller = expect_context::<RwSignal<ThemeController>>();
    let progress = expect_context::<RwSignal<ProgressState>>();
    let phase = expect_context::<RwSignal<LoadingPhase>>();

    #[cfg(feature = "hydrate")]
    {
        Effect::new(move || {
            let started = start_page(
                crate::util::theme_store::LocalStore::open(),
                |initial| controller.set(initial),
                || start_loading(progress, phase),
            );
            if let Err(e) = started {
                log::error!("page startup aborted: {e}");
            }
        });

        Effect::new(move || {
            let theme = controller.get().theme();
            if let Err(e) = crate::util::dom::apply_theme(theme) {
                log::error!("applying theme failed: {e}");
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (controller, progress);
    }

    view! {
        <LoadingScreen/>
        <header class="page-header">
            <span class="page-header__title">"Pageshell"</span>
            <ThemeToggle/>
        </header>
        <main
            id="main-content"
            class="main-content"
            class:fade-in=move || phase.get().is_revealed()
            style:display=move || phase.get().content_display()
        >
            <h1>"Welcome"</h1>
            <p>"Everything is loaded. Use the button in the corner to switch themes."</p>
        </main>
    }
}

/// Read the theme preference, hand it to `apply_theme`, then start loading.
///
/// Any storage fault returns early, so the animation never starts.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn start_page<S, A, L>(store: Result<S, PageError>, apply_theme: A, start_loading: L) -> Result<(), PageError>
where
    S: PreferenceStore,
    A: FnOnce(ThemeController),
    L: FnOnce(),
{
    let initial = ThemeController::initialize(&store?)?;
    apply_theme(initial);
    start_loading();
    Ok(())
}

#[cfg(feature = "hydrate")]
fn start_loading(progress: RwSignal<ProgressState>, phase: RwSignal<LoadingPhase>) {
    leptos::task::spawn_local(async move {
        let finished = crate::util::schedule::animate_in_browser(move |p| progress.set(p)).await;
        if finished.is_revealed() {
            log::debug!("loading complete, revealing content");
            phase.set(finished);
        }
    });
}
