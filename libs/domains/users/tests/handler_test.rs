//! Handler tests for the Users domain
//!
//! These tests drive the users router directly (not nested under
//! `/users`) and check:
//! - Status codes for every route
//! - The JSON error envelope on failures
//! - Email uniqueness under concurrent requests

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_users::*;
use futures::future::join_all;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::collections::HashSet;
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn app() -> Router {
    let service = UserService::new(InMemoryUserRepository::new());
    handlers::router(service)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn create(app: &Router, name: &str, email: &str) -> User {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/",
            json!({ "name": name, "email": email }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response.into_body()).await
}

#[tokio::test]
async fn test_create_user_returns_201_then_409_for_same_email() {
    let app = app();

    let alice = create(&app, "Alice", "alice@x.io").await;
    assert_eq!(alice.name, "Alice");
    assert_eq!(alice.email, "alice@x.io");
    assert!(!alice.id.is_empty());
    assert_eq!(alice.created_at, alice.updated_at);

    let response = app
        .oneshot(json_request(
            "POST",
            "/",
            json!({ "name": "Alice Again", "email": "alice@x.io" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"]["type"], "CONFLICT_ERROR");
}

#[tokio::test]
async fn test_create_user_rejects_undecodable_body() {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"]["type"], "BAD_REQUEST_ERROR");
    assert_eq!(body["error"]["message"], "invalid JSON body");
}

#[tokio::test]
async fn test_create_user_rejects_unknown_fields() {
    let response = app()
        .oneshot(json_request(
            "POST",
            "/",
            json!({ "name": "Alice", "email": "alice@x.io", "role": "admin" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_user_missing_name_is_validation_error() {
    let response = app()
        .oneshot(json_request("POST", "/", json!({ "email": "alice@x.io" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"]["type"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["field"], "name");
    assert_eq!(body["error"]["message"], "name cannot be empty");
}

#[tokio::test]
async fn test_create_user_invalid_email_is_validation_error() {
    let app = app();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/",
            json!({ "name": "Alice", "email": "alice.example.com" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"]["field"], "email");

    // Nothing was stored
    let response = app.oneshot(empty_request("GET", "/")).await.unwrap();
    let users: Vec<User> = json_body(response.into_body()).await;
    assert!(users.is_empty());
}

#[tokio::test]
async fn test_list_users_returns_created_users() {
    let app = app();
    create(&app, "Alice", "alice@x.io").await;
    create(&app, "Bob", "bob@x.io").await;

    let response = app.oneshot(empty_request("GET", "/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let users: Vec<User> = json_body(response.into_body()).await;
    let emails: Vec<&str> = users.iter().map(|u| u.email.as_str()).collect();
    assert_eq!(emails, vec!["alice@x.io", "bob@x.io"]);
}

#[tokio::test]
async fn test_get_user_returns_200_and_404() {
    let app = app();
    let alice = create(&app, "Alice", "alice@x.io").await;

    let response = app
        .clone()
        .oneshot(empty_request("GET", &format!("/{}", alice.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: User = json_body(response.into_body()).await;
    assert_eq!(fetched, alice);

    let response = app
        .oneshot(empty_request("GET", "/non-existing"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"]["type"], "NOT_FOUND_ERROR");
}

#[tokio::test]
async fn test_undecodable_id_is_json_not_found() {
    let app = app();

    for request in [
        empty_request("GET", "/%FF"),
        json_request("PUT", "/%FF", json!({ "name": "X" })),
        empty_request("DELETE", "/%FF"),
    ] {
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: Value = json_body(response.into_body()).await;
        assert_eq!(body["error"]["type"], "NOT_FOUND_ERROR");
    }
}

#[tokio::test]
async fn test_update_user_name_only() {
    let app = app();
    let alice = create(&app, "Alice", "alice@x.io").await;

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/{}", alice.id),
            json!({ "name": "Alicia" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let updated: User = json_body(response.into_body()).await;
    assert_eq!(updated.id, alice.id);
    assert_eq!(updated.name, "Alicia");
    assert_eq!(updated.email, "alice@x.io");
    assert_eq!(updated.created_at, alice.created_at);
    assert!(updated.updated_at > alice.updated_at);
}

#[tokio::test]
async fn test_update_user_invalid_email_leaves_record_unchanged() {
    let app = app();
    let alice = create(&app, "Alice", "alice@x.io").await;

    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/{}", alice.id),
            json!({ "name": "Alicia", "email": "bad" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"]["type"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["field"], "email");

    let response = app
        .oneshot(empty_request("GET", &format!("/{}", alice.id)))
        .await
        .unwrap();
    let stored: User = json_body(response.into_body()).await;
    assert_eq!(stored, alice);
}

#[tokio::test]
async fn test_update_user_to_taken_email_is_conflict() {
    let app = app();
    let alice = create(&app, "Alice", "alice@x.io").await;
    create(&app, "Bob", "bob@x.io").await;

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/{}", alice.id),
            json!({ "email": "bob@x.io" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_update_unknown_user_is_not_found() {
    let response = app()
        .oneshot(json_request("PUT", "/missing", json!({ "name": "X" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_user_returns_204_then_404() {
    let app = app();
    let alice = create(&app, "Alice", "alice@x.io").await;
    let uri = format!("/{}", alice.id);

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", &uri))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert!(bytes.is_empty());

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", &uri))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(empty_request("GET", &uri)).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_deleted_email_can_be_reused() {
    let app = app();
    let alice = create(&app, "Alice", "alice@x.io").await;

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", &format!("/{}", alice.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let again = create(&app, "Alice", "alice@x.io").await;
    assert_ne!(again.id, alice.id);
}

#[tokio::test]
async fn test_unsupported_methods_return_405() {
    let app = app();

    let response = app
        .clone()
        .oneshot(empty_request("PATCH", "/"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"]["type"], "METHOD_NOT_ALLOWED_ERROR");

    let response = app
        .oneshot(empty_request("POST", "/some-id"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_with_distinct_emails_all_succeed() {
    let app = app();
    let n = 50;

    let tasks = (0..n).map(|i| {
        let app = app.clone();
        tokio::spawn(async move {
            let request = json_request(
                "POST",
                "/",
                json!({ "name": format!("User {i}"), "email": format!("user{i}@x.io") }),
            );
            let response = app.oneshot(request).await.unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
            json_body::<User>(response.into_body()).await.id
        })
    });

    let ids: HashSet<String> = join_all(tasks)
        .await
        .into_iter()
        .map(|r| r.unwrap())
        .collect();
    assert_eq!(ids.len(), n);

    let response = app.oneshot(empty_request("GET", "/")).await.unwrap();
    let users: Vec<User> = json_body(response.into_body()).await;
    assert_eq!(users.len(), n);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_with_same_email_admit_exactly_one() {
    let app = app();
    let n = 50;

    let tasks = (0..n).map(|i| {
        let app = app.clone();
        tokio::spawn(async move {
            let request = json_request(
                "POST",
                "/",
                json!({ "name": format!("User {i}"), "email": "same@x.io" }),
            );
            app.oneshot(request).await.unwrap().status()
        })
    });

    let statuses: Vec<StatusCode> = join_all(tasks)
        .await
        .into_iter()
        .map(|r| r.unwrap())
        .collect();

    let created = statuses
        .iter()
        .filter(|s| **s == StatusCode::CREATED)
        .count();
    let conflicts = statuses
        .iter()
        .filter(|s| **s == StatusCode::CONFLICT)
        .count();
    assert_eq!(created, 1);
    assert_eq!(conflicts, n - 1);
}
