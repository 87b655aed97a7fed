//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::progress::{LoadingPhase, ProgressState};
use crate::state::theme::{Theme, ThemeController};

/// HTML shell rendered on the server for SSR + hydration.
///
/// `<body>` starts with the default theme class; the stored preference is
/// applied once the client hydrates.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class={Theme::default().as_str()}>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the theme, progress, and loading-phase signals and mounts the
/// single page route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let controller = RwSignal::new(ThemeController::default());
    let progress = RwSignal::new(ProgressState::new());
    let phase = RwSignal::new(LoadingPhase::default());

    provide_context(controller);
    provide_context(progress);
    provide_context(phase);

    view! {
        <Stylesheet id="leptos" href="/pkg/pageshell.css"/>
        <Title text="Pageshell"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
