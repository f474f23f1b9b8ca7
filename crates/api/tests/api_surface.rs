//! Router-level tests that exercise auth, RBAC, and input validation
//! without a database: the lazy pool never connects because every request
//! here is rejected (or answered) before a query runs.

mod common;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn admin_route_requires_token() {
    let app = common::build_app_without_mail(common::lazy_pool());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/admin/members/pending")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn member_token_cannot_reach_admin_route() {
    let app = common::build_app_without_mail(common::lazy_pool());
    let token = common::token_for(7, "member");

    let response = app
        .oneshot(
            Request::builder()
                .method("PATCH")
                .uri("/api/v1/admin/members/1/status")
                .header(AUTHORIZATION, format!("Bearer {token}"))
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"verification_status":"approved"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["code"], "FORBIDDEN");
}

#[tokio::test]
async fn garbage_token_is_unauthorized() {
    let app = common::build_app_without_mail(common::lazy_pool());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/admin/members/pending")
                .header(AUTHORIZATION, "Bearer not-a-jwt")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unknown_notification_type_is_rejected_before_lookup() {
    let app = common::build_app_without_mail(common::lazy_pool());
    let token = common::token_for(1, "admin");

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/notifications")
                .header(AUTHORIZATION, format!("Bearer {token}"))
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"type":"director_promoted","user_id":1}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("director_promoted"));
}

#[tokio::test]
async fn short_profession_query_returns_empty_without_database() {
    let app = common::build_app_without_mail(common::lazy_pool());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/professions/search?q=a")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"], serde_json::json!([]));
}

#[tokio::test]
async fn directory_listing_requires_occupation() {
    let app = common::build_app_without_mail(common::lazy_pool());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/members")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn invalid_signup_payload_is_rejected() {
    let app = common::build_app_without_mail(common::lazy_pool());

    // Invalid email and a too-short password; rejected before any insert.
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/members")
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(
                    r#"{"fullname_th":"สมชาย","fullname_en":"Somchai","email":"not-an-email","password":"short","occupation":"director"}"#,
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}
