use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use http_body_util::BodyExt;
use pay_relay::{
    handlers::{self, AppState},
    services::{GatewayClient, OrderSequence},
};
use std::sync::Arc;
use tower::ServiceExt;

fn relay_with_assets(static_dir: &std::path::Path) -> Router {
    let state = AppState {
        gateway: Arc::new(GatewayClient::new("http://127.0.0.1:9")),
        orders: Arc::new(OrderSequence::starting_at(
            NaiveDate::from_ymd_opt(2026, 8, 6).unwrap(),
            1,
        )),
    };
    handlers::router(state, static_dir)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn assets_are_served_for_non_api_paths() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>shop</h1>").unwrap();
    std::fs::create_dir(dir.path().join("css")).unwrap();
    std::fs::write(dir.path().join("css").join("site.css"), "body{}").unwrap();

    let app = relay_with_assets(dir.path());

    let response = app.clone().oneshot(get("/index.html")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"<h1>shop</h1>");

    let response = app.clone().oneshot(get("/css/site.css")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn the_root_path_serves_the_index_document() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>shop</h1>").unwrap();

    let app = relay_with_assets(dir.path());
    let response = app.oneshot(get("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"<h1>shop</h1>");
}

#[tokio::test]
async fn unknown_assets_are_a_plain_404() {
    let dir = tempfile::tempdir().unwrap();

    let app = relay_with_assets(dir.path());
    let response = app.oneshot(get("/missing.js")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
