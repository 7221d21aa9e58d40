//! In-process HTTP tests against the full router.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::fs;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use futures_util::future::join_all;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use chirpy_core::HitCounter;
use chirpy_server::{app_state::AppState, config, router};

struct TestApp {
    hits: Arc<HitCounter>,
    router: Router,
    _root: TempDir,
}

fn app() -> TestApp {
    let root = tempfile::tempdir().unwrap();
    fs::write(root.path().join("index.html"), "<h1>Welcome to Chirpy</h1>").unwrap();
    fs::create_dir(root.path().join("assets")).unwrap();
    fs::write(root.path().join("assets/logo.txt"), "chirp").unwrap();

    let root_str = root.path().display().to_string();
    let yaml = format!("version: 1\nserver:\n  file_root: {root_str:?}\n");
    let cfg = config::load_from_str(&yaml).unwrap();
    let hits = Arc::new(HitCounter::new());
    let router = router::build_router(AppState::new(cfg, Arc::clone(&hits)));
    TestApp {
        hits,
        router,
        _root: root,
    }
}

async fn send(router: &Router, req: Request<Body>) -> (StatusCode, Option<String>, Vec<u8>) {
    let res = router.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let ctype = res
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    (status, ctype, body.to_vec())
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn post(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

async fn location(router: &Router, uri: &str) -> (StatusCode, Option<String>) {
    let res = router.clone().oneshot(get(uri)).await.unwrap();
    let loc = res
        .headers()
        .get(header::LOCATION)
        .map(|v| v.to_str().unwrap().to_string());
    (res.status(), loc)
}

async fn validate(router: &Router, body: Value) -> (StatusCode, Value) {
    let (status, ctype, raw) = send(router, post("/api/validate_chirp", body.to_string())).await;
    assert_eq!(ctype.as_deref(), Some("application/json"));
    (status, serde_json::from_slice(&raw).unwrap())
}

#[tokio::test]
async fn healthz_is_plain_ok() {
    let t = app();
    let (status, ctype, body) = send(&t.router, get("/api/healthz")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ctype.as_deref(), Some("text/plain; charset=utf-8"));
    assert_eq!(body, b"OK");
}

#[tokio::test]
async fn healthz_rejects_post() {
    let t = app();
    let (status, _, _) = send(&t.router, post("/api/healthz", "")).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn validate_chirp_cleans_profanity() {
    let t = app();
    let (status, body) = validate(
        &t.router,
        json!({ "body": "This is a kerfuffle opinion I need to share with the world" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "cleaned_body": "This is a **** opinion I need to share with the world" })
    );
}

#[tokio::test]
async fn validate_chirp_keeps_token_count() {
    let t = app();
    let input = "  Sharbert  is fine,  FORNAX  ";
    let (status, body) = validate(&t.router, json!({ "body": input })).await;
    assert_eq!(status, StatusCode::OK);
    let cleaned = body["cleaned_body"].as_str().unwrap();
    assert_eq!(cleaned, "  ****  is fine,  ****  ");
    assert_eq!(cleaned.split(' ').count(), input.split(' ').count());
}

#[tokio::test]
async fn validate_chirp_length_limit() {
    let t = app();

    let (status, _) = validate(&t.router, json!({ "body": "a".repeat(140) })).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = validate(&t.router, json!({ "body": "a".repeat(141) })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Chirp is too long" }));
}

#[tokio::test]
async fn validate_chirp_malformed_is_500() {
    let t = app();
    for raw in ["{not json", "", r#"{"body": 7}"#] {
        let (status, ctype, body) = send(&t.router, post("/api/validate_chirp", raw)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{raw}");
        assert_eq!(ctype.as_deref(), Some("application/json"));
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, json!({ "error": "Something went wrong" }));
    }
}

#[tokio::test]
async fn validate_chirp_decodes_leniently() {
    let t = app();
    let cases = [
        (r#"{"Body":"kerfuffle x"}"#, "**** x"),
        (r#"{"body":null}"#, ""),
        ("null", ""),
        (r#"{"body":"a fornax"} trailing"#, "a ****"),
    ];
    for (raw, cleaned) in cases {
        let (status, _, body) = send(&t.router, post("/api/validate_chirp", raw)).await;
        assert_eq!(status, StatusCode::OK, "{raw}");
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body, json!({ "cleaned_body": cleaned }), "{raw}");
    }
}

#[tokio::test]
async fn validate_chirp_uses_configured_denylist() {
    let yaml = "version: 1\nchirp:\n  max_len: 10\n  banned_words: [Gosh]\n";
    let cfg = config::load_from_str(yaml).unwrap();
    let router = router::build_router(AppState::new(cfg, Arc::new(HitCounter::new())));

    let (status, body) = validate(&router, json!({ "body": "oh GOSH" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["cleaned_body"], "oh ****");

    let (status, _) = validate(&router, json!({ "body": "kerfuffle!" })).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = validate(&router, json!({ "body": "eleven char" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn app_serves_files_and_counts_hits() {
    let t = app();

    let (status, _, body) = send(&t.router, get("/app/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"<h1>Welcome to Chirpy</h1>");

    let (status, _, body) = send(&t.router, get("/app/assets/logo.txt")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"chirp");

    let (status, _, _) = send(&t.router, get("/app/missing.txt")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    assert_eq!(t.hits.read(), 3);
}

#[tokio::test]
async fn directory_redirect_stays_under_app() {
    let t = app();
    let (status, loc) = location(&t.router, "/app/assets").await;
    assert!(status.is_redirection(), "{status}");
    assert_eq!(loc.as_deref(), Some("/app/assets/"));
}

#[tokio::test]
async fn bare_app_redirects_without_counting() {
    let t = app();
    let (status, loc) = location(&t.router, "/app").await;
    assert_eq!(status, StatusCode::MOVED_PERMANENTLY);
    assert_eq!(loc.as_deref(), Some("/app/"));
    assert_eq!(t.hits.read(), 0);

    let (_, loc) = location(&t.router, "/app?x=1").await;
    assert_eq!(loc.as_deref(), Some("/app/?x=1"));
}

#[tokio::test]
async fn non_app_routes_do_not_count() {
    let t = app();
    send(&t.router, get("/api/healthz")).await;
    send(&t.router, get("/admin/metrics")).await;
    validate(&t.router, json!({ "body": "hi" })).await;
    send(&t.router, get("/nowhere")).await;
    assert_eq!(t.hits.read(), 0);
}

#[tokio::test]
async fn metrics_page_renders_count() {
    let t = app();
    for _ in 0..3 {
        send(&t.router, get("/app/")).await;
    }

    let (status, ctype, body) = send(&t.router, get("/admin/metrics")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ctype.as_deref(), Some("text/html"));
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("<h1>Welcome, Chirpy Admin</h1>"));
    assert!(html.contains("<p>Chirpy has been visited 3 times!</p>"));
}

#[tokio::test]
async fn reset_zeroes_counter() {
    let t = app();
    for _ in 0..5 {
        send(&t.router, get("/app/")).await;
    }
    assert_eq!(t.hits.read(), 5);

    let (status, _, body) = send(&t.router, post("/admin/reset", "")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
    assert_eq!(t.hits.read(), 0);

    let (_, _, body) = send(&t.router, get("/admin/metrics")).await;
    assert!(String::from_utf8(body).unwrap().contains("visited 0 times!"));
}

#[tokio::test]
async fn reset_requires_post() {
    let t = app();
    let (status, _, _) = send(&t.router, get("/admin/reset")).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_app_hits_are_all_counted() {
    const N: usize = 200;
    let t = app();

    let tasks = (0..N).map(|_| {
        let router = t.router.clone();
        tokio::spawn(async move { send(&router, get("/app/assets/logo.txt")).await.0 })
    });
    for status in join_all(tasks).await {
        assert_eq!(status.unwrap(), StatusCode::OK);
    }

    assert_eq!(t.hits.read(), N as u64);
}
