//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::detector::DetectorPage;
use crate::state::detect::DetectState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the detection form state and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let detect = RwSignal::new(DetectState::default());
    provide_context(detect);

    view! {
        <Stylesheet id="leptos" href="/pkg/language-detector.css"/>
        <Title text="Detector de Linguagem"/>

        <Router>
            <Routes fallback=|| "Página não encontrada.".into_view()>
                <Route path=StaticSegment("") view=DetectorPage/>
            </Routes>
        </Router>
    }
}
