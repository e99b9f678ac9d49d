//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the enquiry relay API and Leptos SSR rendering under a
//! single Axum router. Page routes render the marketing site; `/api`
//! carries the form relay; static assets are served from the public
//! directory.

pub mod enquiries;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Enquiry relay API. CORS stays permissive so the static-host + serverless
/// deployment shape keeps working when pages and API live on different
/// origins.
pub(crate) fn api_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/enquiries/contact", post(enquiries::submit_contact))
        .route("/api/enquiries/room", post(enquiries::submit_room))
        .route("/api/enquiries/banquet", post(enquiries::submit_banquet))
        .route("/healthz", get(healthz))
        .layer(cors)
        .with_state(state)
}

/// Resolve the static assets directory (photography, favicons).
fn assets_dir() -> PathBuf {
    std::env::var("SITE_ASSETS_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../public"))
}

/// Full site: relay API + Leptos SSR pages + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` metadata section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // Leptos static assets (WASM, CSS, JS) from the site root /pkg directory.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .nest_service("/assets", ServeDir::new(assets_dir()))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
