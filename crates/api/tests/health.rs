//! Integration tests for the health check endpoint and general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get, send, TEST_ORIGIN};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: GET /health returns 200 with expected JSON fields
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn health_check_returns_healthy(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["database"], "connected");
    assert!(json.get("error").is_none());
}

// ---------------------------------------------------------------------------
// Test: health check reports 500 once the pool can no longer reach the store
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn health_check_reports_unhealthy_when_pool_closed(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    pool.close().await;

    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["status"], "unhealthy");
    assert!(json["error"].is_string());
}

// ---------------------------------------------------------------------------
// Test: routes are also served under the /api prefix
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn api_prefix_serves_same_routes(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = get(app, "/api/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/todos").await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404 with a JSON error body
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_route_returns_json_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Resource not found");
}

// ---------------------------------------------------------------------------
// Test: Unsupported method on a known path returns a JSON 405
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn unsupported_method_returns_json_405(pool: PgPool) {
    let app = common::build_test_app(pool);
    let request = Request::builder()
        .method(Method::PATCH)
        .uri("/todos")
        .body(Body::empty())
        .unwrap();
    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "METHOD_NOT_ALLOWED");
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn response_contains_x_request_id_header(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("Response must contain an x-request-id header");

    // The value should be a UUID string (36 chars with hyphens).
    assert_eq!(request_id.to_str().unwrap().len(), 36);
}

// ---------------------------------------------------------------------------
// Test: CORS preflight OPTIONS request returns correct headers
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn cors_preflight_returns_correct_headers(pool: PgPool) {
    for (uri, method) in [
        ("/todos", "POST"),
        ("/todos/1", "PUT"),
        ("/todos/1", "DELETE"),
        ("/todos/stats", "GET"),
        ("/health", "GET"),
    ] {
        let app = common::build_test_app(pool.clone());
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri(uri)
            .header("Origin", TEST_ORIGIN)
            .header("Access-Control-Request-Method", method)
            .header("Access-Control-Request-Headers", "content-type")
            .body(Body::empty())
            .unwrap();

        let response = send(app, request).await;
        assert_eq!(response.status(), StatusCode::OK, "preflight for {method} {uri}");

        let headers = response.headers();
        let allow_origin = headers
            .get("access-control-allow-origin")
            .expect("Missing Access-Control-Allow-Origin header")
            .to_str()
            .unwrap();
        assert_eq!(allow_origin, TEST_ORIGIN);

        let allow_methods = headers
            .get("access-control-allow-methods")
            .expect("Missing Access-Control-Allow-Methods header")
            .to_str()
            .unwrap();
        assert!(
            allow_methods.contains(method),
            "Allow-Methods should contain {method}, got: {allow_methods}"
        );
    }
}

// ---------------------------------------------------------------------------
// Test: an untrusted origin gets no CORS grant
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn cors_rejects_other_origins(pool: PgPool) {
    let app = common::build_test_app(pool);
    let request = Request::builder()
        .method(Method::GET)
        .uri("/todos")
        .header("Origin", "http://evil.example.com")
        .body(Body::empty())
        .unwrap();

    let response = send(app, request).await;
    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_none());
}

// ---------------------------------------------------------------------------
// Test: the trusted origin is echoed on simple requests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn cors_allows_configured_origin(pool: PgPool) {
    let app = common::build_test_app(pool);
    let request = Request::builder()
        .method(Method::GET)
        .uri("/todos")
        .header("Origin", TEST_ORIGIN)
        .body(Body::empty())
        .unwrap();

    let response = send(app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap()
            .to_str()
            .unwrap(),
        TEST_ORIGIN
    );
}
