//! Router assembly.
//!
//! Stitches the server-rendered Leptos app, its compiled `/pkg` assets and a
//! health probe under a single Axum router. The configured API base URL is
//! provided as Leptos context during SSR and written into the HTML shell for
//! the hydrated client.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use teplo_client::app::{App, shell};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::SiteConfig;
use crate::error::SiteError;

/// Build the full site router.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(config: &SiteConfig) -> Result<Router, SiteError> {
    let conf = get_configuration(None).map_err(|e| SiteError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(App);

    let leptos_router = Router::new()
        .leptos_routes_with_context(
            &leptos_options,
            routes,
            {
                let api = config.api.clone();
                move || provide_context(api.clone())
            },
            {
                let opts = leptos_options.clone();
                let api = config.api.clone();
                move || shell(opts.clone(), api.clone())
            },
        )
        .with_state(leptos_options.clone());

    let pkg_dir = PathBuf::from(leptos_options.site_root.as_ref()).join(&*leptos_options.site_pkg_dir);

    Ok(base_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg_dir))
        .layer(TraceLayer::new_for_http()))
}

/// Routes that do not depend on the Leptos build output.
fn base_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
