//! Tests for serving the single-page frontend next to the API.

mod common;

use std::path::PathBuf;

use axum::http::StatusCode;
use common::{body_json, body_text, build_test_app_with, get, test_config};
use sqlx::PgPool;

fn frontend_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../frontend")
}

fn app_with_frontend(pool: PgPool) -> axum::Router {
    let mut config = test_config();
    config.static_dir = Some(frontend_dir());
    build_test_app_with(pool, config)
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn root_serves_index_html(pool: PgPool) {
    let response = get(app_with_frontend(pool), "/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"), "got {content_type}");
    assert!(body_text(response).await.contains("Career Path Explorer"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn client_side_routes_fall_back_to_index_html(pool: PgPool) {
    for path in ["/roles/5", "/roles/new"] {
        let response = get(app_with_frontend(pool.clone()), path).await;
        assert_eq!(response.status(), StatusCode::OK, "{path}");
        assert!(body_text(response).await.contains("Career Path Explorer"));
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn script_is_served_as_javascript(pool: PgPool) {
    let response = get(app_with_frontend(pool), "/app.js").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap();
    assert!(content_type.contains("javascript"), "got {content_type}");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn api_routes_win_over_static_files(pool: PgPool) {
    let app = app_with_frontend(pool);

    let response = get(app.clone(), "/api/v1/roles").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["data"].is_array());

    let response = get(app, "/api/v1/unknown").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}
