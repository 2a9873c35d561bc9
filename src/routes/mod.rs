//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API (auth, account, items, health) and stitches
//! it with Leptos SSR rendering and the `/pkg` static assets under a single
//! Axum router. Client pages never share a path with an API route.

pub mod auth;
pub mod items;
pub mod user;

use std::path::PathBuf;

use axum::Router;
use axum::extract::FromRequest;
use axum::extract::rejection::JsonRejection;
use axum::http::{HeaderValue, Method, StatusCode, header};
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, patch, post};
use client::net::types::ErrorBody;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use serde::Serialize;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// JSON error response in the `{ "detail": ... }` shape the client parses.
pub(crate) fn error_response(status: StatusCode, detail: impl Into<String>) -> Response {
    (status, Json(ErrorBody::new(detail))).into_response()
}

/// Request body rejected before the handler ran.
pub(crate) struct BodyRejection(JsonRejection);

impl From<JsonRejection> for BodyRejection {
    fn from(rejection: JsonRejection) -> Self {
        Self(rejection)
    }
}

impl IntoResponse for BodyRejection {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self.0, "rejected request body");
        error_response(self.0.status(), self.0.body_text())
    }
}

/// `Json` extractor whose failures keep the `{ detail }` error shape.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(BodyRejection))]
pub(crate) struct JsonBody<T>(pub T);

/// CORS for the configured browser origins. Unparsable origins are skipped.
pub(crate) fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// API routes: auth, account, items demo, and health.
pub fn api_routes(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/api/auth/signup", post(auth::signup))
        .route("/api/auth/signin", post(auth::signin))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/user/profile", patch(user::update_profile))
        .route("/api/user/change-password", post(user::change_password))
        .route("/items", get(items::list_items).post(items::create_item))
        .route("/health", get(health))
        .layer(cors_layer(cors_origins))
        .with_state(state)
}

/// API routes + Leptos SSR + `/pkg` assets.
pub fn leptos_app(state: AppState, cors_origins: &[String], leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    api_routes(state, cors_origins)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
}

/// Full application router. Falls back to the bare API when the Leptos
/// configuration cannot be loaded (no `LEPTOS_*` environment and no usable
/// `Cargo.toml` metadata).
pub fn app(state: AppState, cors_origins: &[String]) -> Router {
    let router = match get_configuration(None) {
        Ok(conf) => leptos_app(state, cors_origins, conf.leptos_options),
        Err(e) => {
            tracing::warn!(error = %e, "leptos SSR disabled; serving API routes only");
            api_routes(state, cors_origins)
        }
    };
    router.layer(CompressionLayer::new()).layer(TraceLayer::new_for_http())
}

#[derive(Serialize)]
struct Health {
    status: &'static str,
}

async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
