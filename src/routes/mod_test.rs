use axum::body::{Body, to_bytes};
use axum::http::Request;
use tower::ServiceExt;

use super::*;
use crate::state::test_helpers;

fn router() -> Router {
    api_routes(test_helpers::test_app_state(), &["http://localhost:5173".to_owned()])
}

#[tokio::test]
async fn health_reports_ok() {
    let response = router()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, serde_json::json!({ "status": "ok" }));
}

#[tokio::test]
async fn cors_allows_configured_origin_only() {
    let preflight = |origin: &str| {
        Request::builder()
            .method("OPTIONS")
            .uri("/api/auth/signin")
            .header("Origin", origin)
            .header("Access-Control-Request-Method", "POST")
            .body(Body::empty())
            .unwrap()
    };

    let allowed = router().oneshot(preflight("http://localhost:5173")).await.unwrap();
    assert_eq!(
        allowed.headers().get("access-control-allow-origin").and_then(|v| v.to_str().ok()),
        Some("http://localhost:5173")
    );

    let denied = router().oneshot(preflight("https://evil.example")).await.unwrap();
    assert!(denied.headers().get("access-control-allow-origin").is_none());
}

#[tokio::test]
async fn error_response_uses_detail_shape() {
    let response = error_response(StatusCode::BAD_REQUEST, "nope");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["detail"], "nope");
}

#[test]
fn cors_layer_skips_invalid_origins() {
    // Construction must not panic on header-invalid input.
    let _ = cors_layer(&["http://ok.example".to_owned(), "bad\norigin".to_owned()]);
}

#[tokio::test]
async fn malformed_body_rejection_uses_detail_shape() {
    let response = router()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/signin")
                .header("Content-Type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(json["detail"].as_str().is_some_and(|d| !d.is_empty()));
}

// =============================================================================
// SSR assembly
// =============================================================================

fn test_leptos_options() -> LeptosOptions {
    LeptosOptions::builder().output_name("anima").build()
}

#[tokio::test]
async fn page_routes_do_not_shadow_api_paths() {
    let api_paths = ["/api", "/items", "/health"];
    for listing in generate_route_list(client::app::App) {
        let path = listing.path();
        assert!(
            !api_paths.iter().any(|api| path == *api || path.starts_with(&format!("{api}/"))),
            "page route {path} collides with the API"
        );
    }
}

#[tokio::test]
async fn ssr_router_keeps_items_api() {
    let app = leptos_app(test_helpers::test_app_state(), &[], test_leptos_options());

    let response = app
        .oneshot(Request::builder().uri("/items").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, serde_json::json!({ "items": [] }));
}
