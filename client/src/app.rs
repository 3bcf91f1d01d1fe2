//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_host::ToastHost;
use crate::pages::{operator_detail::OperatorDetailPage, personnels::PersonnelsPage};
use crate::state::{navigation::NavigationState, toast::ToastState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="tr">
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
/// Provides the shared navigation and toast contexts and sets up client-side
/// routing. Page-local state (operator record, delete flow) is owned by the
/// pages themselves.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let navigation = RwSignal::new(NavigationState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(navigation);
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/ratio-console.css"/>
        <Title text="Ratio"/>

        <Router>
            <main class="app-layout">
                <Routes fallback=|| "Sayfa bulunamadı.".into_view()>
                    <Route path=StaticSegment("") view=PersonnelsPage/>
                    <Route path=StaticSegment("personnels") view=PersonnelsPage/>
                    <Route
                        path=(StaticSegment("personnels"), StaticSegment("detail"))
                        view=OperatorDetailPage
                    />
                </Routes>
            </main>
            <ToastHost/>
        </Router>
    }
}
