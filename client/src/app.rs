//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};

use crate::components::app_header::AppHeader;
use crate::pages::{cameras::CamerasPage, home::HomePage, users::UsersPage};
use crate::routes::{CAMERAS, HOME, USERS};
use crate::state::dashboard::{SharedDashboardSource, StaticDashboard};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    shell_with(options, Arc::new(StaticDashboard))
}

/// HTML shell around an app that reads its home-page data from `source`.
pub fn shell_with(options: LeptosOptions, source: SharedDashboardSource) -> impl IntoView {
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
                <AppWith source=source/>
            </body>
        </html>
    }
}

/// Root application component backed by the placeholder dashboard data.
#[component]
pub fn App() -> impl IntoView {
    let source: SharedDashboardSource = Arc::new(StaticDashboard);
    view! { <AppWith source=source/> }
}

/// Root application component with an explicit home-page data source.
///
/// The header is mounted once for every location. Pages are declared from
/// the shared route table; nested locations (`/users/42`) mount their parent
/// page and unmatched locations render nothing below the header.
#[component]
pub fn AppWith(source: SharedDashboardSource) -> impl IntoView {
    provide_meta_context();
    provide_context(source);

    #[cfg(feature = "hydrate")]
    spawn_registry_log();

    view! {
        <Stylesheet id="leptos" href="/pkg/controle-acesso.css"/>
        <Title text="Controle de Acesso"/>

        <Router>
            <AppHeader/>
            <main class="app-main">
                <Routes fallback=|| ()>
                    <Route path=StaticSegment(HOME.segment()) view=HomePage/>
                    <Route path=StaticSegment(CAMERAS.segment()) view=CamerasPage/>
                    <Route path=(StaticSegment(CAMERAS.segment()), WildcardSegment("rest")) view=CamerasPage/>
                    <Route path=StaticSegment(USERS.segment()) view=UsersPage/>
                    <Route path=(StaticSegment(USERS.segment()), WildcardSegment("rest")) view=UsersPage/>
                </Routes>
            </main>
        </Router>
    }
}

/// Read the vehicle registry once in the background and log what comes back.
#[cfg(feature = "hydrate")]
fn spawn_registry_log() {
    use crate::net::documents::{self, FirestoreConfig, VEHICLE_REGISTRY};

    match FirestoreConfig::from_build_env() {
        Some(config) => leptos::task::spawn_local(documents::log_collection(config, VEHICLE_REGISTRY)),
        None => log::info!("FIRESTORE_PROJECT_ID not set at build time; skipping {VEHICLE_REGISTRY} read"),
    }
}
