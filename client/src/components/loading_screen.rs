//! Full-page loading view with a progress bar and percentage label.

use leptos::prelude::*;

use crate::state::progress::{LoadingPhase, ProgressState};

/// Loading overlay.
///
/// Stays in the DOM after the reveal; the `hidden` class takes it out of view.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    let progress = expect_context::<RwSignal<ProgressState>>();
    let phase = expect_context::<RwSignal<LoadingPhase>>();

    view! {
        <div
            id="loading-screen"
            class="loading-screen"
            class:hidden=move || phase.get().is_revealed()
        >
            <div class="loading-screen__track">
                <div
                    id="progress-fill"
                    class="loading-screen__fill"
                    style:width=move || progress.get().width()
                ></div>
            </div>
            <span id="progress-percent" class="loading-screen__percent">
                {move || progress.get().label()}
            </span>
        </div>
    }
}
