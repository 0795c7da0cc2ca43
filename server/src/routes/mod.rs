//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the small JSON API, the static asset directories, and
//! Leptos SSR rendering under a single Axum router. Page locations come from
//! the app's own `<Routes>` via `generate_route_list`; every other location
//! still gets the shell, with nothing mounted below the header.

pub mod error;



use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::extract::{FromRef, Request, State};
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{any, get};
use dashboard_client::app::{App, shell_with};
use dashboard_client::routes::{RouteEntry, menu_entries};
use dashboard_client::state::dashboard::{SharedDashboardSource, StaticDashboard};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use self::error::ApiError;
use crate::config::ServerConfig;

/// API routes. Independent of Leptos so they can be served and tested alone.
pub fn api_routes<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/routes", get(route_table).fallback(method_not_allowed))
        .route("/api", any(api_not_found))
        .route("/api/{*rest}", any(api_not_found))
}

/// State shared by the SSR handlers.
#[derive(Clone)]
pub struct PageState {
    pub leptos_options: LeptosOptions,
    pub source: SharedDashboardSource,
}

impl FromRef<PageState> for LeptosOptions {
    fn from_ref(state: &PageState) -> Self {
        state.leptos_options.clone()
    }
}

/// Full application backed by the placeholder dashboard data.
pub fn app(config: &ServerConfig, leptos_options: LeptosOptions) -> Router {
    app_with(config, leptos_options, Arc::new(StaticDashboard))
}

/// Full application: API + assets + Leptos SSR, with home-page data from
/// `source`.
pub fn app_with(config: &ServerConfig, leptos_options: LeptosOptions, source: SharedDashboardSource) -> Router {
    let site_root = PathBuf::from(leptos_options.site_root.as_ref());
    let pkg_dir = site_root.join(leptos_options.site_pkg_dir.as_ref());
    let routes = generate_route_list(App);
    let state = PageState { leptos_options, source };

    let pages = Router::new()
        .leptos_routes(&state, routes, {
            let PageState { leptos_options, source } = state.clone();
            move || shell_with(leptos_options.clone(), source.clone())
        })
        .fallback(render_app)
        .with_state(state);

    api_routes()
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .nest_service("/assets", ServeDir::new(&config.assets_dir))
        .merge(pages)
        .layer(CompressionLayer::new())
        .layer(cors())
        .layer(TraceLayer::new_for_http())
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// `GET /api/routes`: the navigation table, in menu order.
async fn route_table() -> Json<&'static [RouteEntry]> {
    Json(menu_entries())
}

async fn api_not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no API route for {}", uri.path()))
}

async fn method_not_allowed(method: Method) -> ApiError {
    ApiError::MethodNotAllowed(method.to_string())
}

/// Server-render the bare shell for locations no page route claims.
async fn render_app(State(state): State<PageState>, req: Request<Body>) -> Response {
    let PageState { leptos_options, source } = state;
    let context_options = leptos_options.clone();
    let handler = leptos_axum::render_app_to_stream_with_context(
        move || provide_context(context_options.clone()),
        move || shell_with(leptos_options.clone(), source.clone()),
    );
    handler(req).await.into_response()
}
