//! Axum server rendering the site with Leptos SSR

use std::net::SocketAddr;

use axum::{http::StatusCode, response::IntoResponse, routing::get, Router};
use leptos::{get_configuration, LeptosOptions};
use leptos_axum::{generate_route_list, LeptosRoutes};
use thiserror::Error;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::app::App;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[source] std::io::Error),
}

pub type ServerResult<T> = Result<T, ServerError>;

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Build the router serving page routes, the wasm bundle, assets and the
/// health endpoint.
///
/// Static prefixes outrank the catch-all page route, so `/pkg` and `/assets`
/// never fall through to the not-found page.
pub fn build_router(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(App);
    let site_root = leptos_options.site_root.to_string();
    let pkg_dir = leptos_options.site_pkg_dir.to_string();

    Router::new()
        .route("/api/health", get(health_check))
        .nest_service(
            &format!("/{pkg_dir}"),
            ServeDir::new(format!("{site_root}/{pkg_dir}")),
        )
        .nest_service("/assets", ServeDir::new(format!("{site_root}/assets")))
        .leptos_routes(&leptos_options, routes, App)
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options)
}

/// Load configuration from `[package.metadata.leptos]` and `LEPTOS_*`
/// variables, then serve until the process is stopped.
pub async fn run() -> ServerResult<()> {
    let conf = get_configuration(None)
        .await
        .map_err(|e| ServerError::Config(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let app = build_router(leptos_options);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;
    info!("Docs site listening on http://{}", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .map_err(ServerError::Serve)
}
