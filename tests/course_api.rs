//! Course endpoint tests
//!
//! Drive the full router: argument parsing, status codes and JSON bodies.

mod common;

use axum::http::StatusCode;
use common::{app, send, send_raw};
use serde_json::json;

fn algebra() -> serde_json::Value {
    json!({
        "course_name": "Algebra",
        "course_code": "MA101",
        "course_description": "Groups and rings"
    })
}

// =============================================================================
// Create
// =============================================================================

#[tokio::test]
async fn test_create_returns_201_and_record() {
    let app = app().await;
    let (status, body) = send(&app, "POST", "/api/course", Some(algebra())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["course_id"].is_i64());
    assert_eq!(body["course_name"], "Algebra");
    assert_eq!(body["course_code"], "MA101");
    assert_eq!(body["course_description"], "Groups and rings");
}

#[tokio::test]
async fn test_created_ids_are_fresh() {
    let app = app().await;
    let (_, first) = send(&app, "POST", "/api/course", Some(algebra())).await;
    let (_, second) = send(
        &app,
        "POST",
        "/api/course",
        Some(json!({"course_name": "Calculus", "course_code": "MA102"})),
    )
    .await;

    assert_ne!(first["course_id"], second["course_id"]);
    assert_eq!(second["course_description"], serde_json::Value::Null);
}

#[tokio::test]
async fn test_duplicate_code_is_409_and_original_untouched() {
    let app = app().await;
    let (_, original) = send(&app, "POST", "/api/course", Some(algebra())).await;

    let (status, body) = send(
        &app,
        "POST",
        "/api/course",
        Some(json!({"course_name": "Other", "course_code": "MA101"})),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, json!({"error_message": "Course Code already exists"}));

    let path = format!("/api/course/{}", original["course_id"]);
    let (_, fetched) = send(&app, "GET", &path, None).await;
    assert_eq!(fetched, original);
}

#[tokio::test]
async fn test_empty_code_is_course002() {
    let app = app().await;
    let (status, body) = send(
        &app,
        "POST",
        "/api/course",
        Some(json!({"course_name": "Algebra", "course_code": ""})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"error_code": "COURSE002", "error_message": "Course Code is required"})
    );
}

#[tokio::test]
async fn test_null_name_is_course001() {
    let app = app().await;
    let (status, body) = send(
        &app,
        "POST",
        "/api/course",
        Some(json!({"course_name": null, "course_code": "MA101"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error_code"], "COURSE001");

    // Nothing was stored, so the code is still free
    let (status, _) = send(&app, "POST", "/api/course", Some(algebra())).await;
    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_missing_name_reports_help_text() {
    let app = app().await;
    let (status, body) = send(
        &app,
        "POST",
        "/api/course",
        Some(json!({"course_code": "MA101"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"message": {"course_name": "Course Name is required"}}));
}

#[tokio::test]
async fn test_malformed_body() {
    let app = app().await;
    let (status, body) = send_raw(&app, "POST", "/api/course", "{oops").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"message": "Failed to decode JSON object"}));
}

// =============================================================================
// Read / Update / Delete
// =============================================================================

#[tokio::test]
async fn test_round_trip() {
    let app = app().await;
    let (_, created) = send(&app, "POST", "/api/course", Some(algebra())).await;

    let path = format!("/api/course/{}", created["course_id"]);
    let (status, fetched) = send(&app, "GET", &path, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_nonexistent_course_is_404_everywhere() {
    let app = app().await;
    let not_found = json!({"message": "Course not found"});

    let (status, body) = send(&app, "GET", "/api/course/42", None).await;
    assert_eq!((status, body), (StatusCode::NOT_FOUND, not_found.clone()));

    let (status, body) = send(&app, "PUT", "/api/course/42", Some(algebra())).await;
    assert_eq!((status, body), (StatusCode::NOT_FOUND, not_found.clone()));

    let (status, body) = send(&app, "DELETE", "/api/course/42", None).await;
    assert_eq!((status, body), (StatusCode::NOT_FOUND, not_found));
}

#[tokio::test]
async fn test_non_integer_id_is_404() {
    let app = app().await;
    let (status, _) = send(&app, "GET", "/api/course/abc", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_signed_id_is_404_before_body_parsing() {
    let app = app().await;
    send(&app, "POST", "/api/course", Some(algebra())).await;

    for path in ["/api/course/-1", "/api/course/+1"] {
        let (status, body) = send(&app, "PUT", path, Some(json!({}))).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", path);
        assert_eq!(body, json!({"message": "Not Found"}));

        let (status, _) = send(&app, "GET", path, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", path);
    }
}

#[tokio::test]
async fn test_update_overwrites_all_fields() {
    let app = app().await;
    let (_, created) = send(&app, "POST", "/api/course", Some(algebra())).await;
    let path = format!("/api/course/{}", created["course_id"]);

    let (status, body) = send(
        &app,
        "PUT",
        &path,
        Some(json!({"course_name": "Linear Algebra", "course_code": "MA201"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "course_id": created["course_id"],
            "course_name": "Linear Algebra",
            "course_code": "MA201",
            "course_description": null
        })
    );
}

#[tokio::test]
async fn test_update_requires_code_argument() {
    let app = app().await;
    let (status, body) = send(
        &app,
        "PUT",
        "/api/course/1",
        Some(json!({"course_name": "Only name"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"]["course_code"].is_string());
}

#[tokio::test]
async fn test_delete_then_get() {
    let app = app().await;
    let (_, created) = send(&app, "POST", "/api/course", Some(algebra())).await;
    let path = format!("/api/course/{}", created["course_id"]);

    let (status, body) = send(&app, "DELETE", &path, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"message": "Successfully Deleted"}));

    let (status, _) = send(&app, "GET", &path, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_post_on_singleton_is_405() {
    let app = app().await;
    let (status, _) = send(&app, "POST", "/api/course/1", Some(algebra())).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_health() {
    let app = app().await;
    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}
