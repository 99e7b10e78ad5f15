//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests call `IntoResponse` directly on `AppError` values; no HTTP
//! server or database is involved.

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use careerpath_api::error::{validation_details, AppError};
use careerpath_core::error::CoreError;
use http_body_util::BodyExt;
use validator::{ValidationError, ValidationErrors};

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Role",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Role with id 42 not found");
    assert!(json.get("details").is_none());
}

#[tokio::test]
async fn core_validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("bad filter".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "bad filter");
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = AppError::BadRequest("invalid field value".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "invalid field value");
}

#[tokio::test]
async fn conflict_error_returns_409() {
    let err = AppError::Core(CoreError::Conflict("duplicate name".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
}

#[tokio::test]
async fn no_route_returns_404() {
    let (status, json) = error_to_response(AppError::NoRoute("/api/v1/nope".into())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "No API route for /api/v1/nope");
}

#[tokio::test]
async fn internal_errors_return_500_and_sanitize_message() {
    for err in [
        AppError::InternalError("secret database credentials leaked".into()),
        AppError::Core(CoreError::Internal("stack trace here".into())),
        AppError::Database(sqlx::Error::PoolTimedOut),
    ] {
        let (status, json) = error_to_response(err).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["code"], "INTERNAL_ERROR");
        assert_eq!(json["error"], "An internal error occurred");
    }
}

#[tokio::test]
async fn row_not_found_returns_404() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn validation_errors_include_details() {
    let mut errors = ValidationErrors::new();
    errors.add(
        "name",
        ValidationError::new("length").with_message("name must be 1-100 characters".into()),
    );
    errors.add("url", ValidationError::new("url"));

    let (status, json) = error_to_response(AppError::InvalidInput(errors)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["details"]["name"][0], "name must be 1-100 characters");
    assert_eq!(json["details"]["url"][0], "invalid value (url)");
}

#[test]
fn validation_details_are_sorted_by_path() {
    let mut errors = ValidationErrors::new();
    errors.add("skills", ValidationError::new("a"));
    errors.add("name", ValidationError::new("b"));

    let details = validation_details(&errors);
    let keys: Vec<&String> = details.keys().collect();
    assert_eq!(keys, ["name", "skills"]);
    assert_matches!(details.get("name").map(Vec::len), Some(1));
}

#[tokio::test]
async fn method_not_allowed_returns_405() {
    let err = AppError::MethodNotAllowed {
        method: "DELETE".into(),
        path: "/api/v1/roles/1".into(),
    };

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(json["code"], "METHOD_NOT_ALLOWED");
    assert_eq!(json["error"], "Method DELETE is not allowed for /api/v1/roles/1");
}
