//! Handler tests for the Users domain

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use core_common::{MessageResponse, Repository};
use domain_users::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn register(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn app(repository: InMemoryUserRepository) -> Router {
    handlers::router(UserService::new(repository, Argon2HashService::new()))
}

#[tokio::test]
async fn test_create_user_returns_201_without_password() {
    let response = app(InMemoryUserRepository::new())
        .oneshot(register(
            json!({ "name": "Ann", "email": "ann@x.com", "password": "pw1" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body, json!({ "id": 1, "name": "Ann", "email": "ann@x.com" }));
}

#[tokio::test]
async fn test_create_user_missing_password_returns_400() {
    let response = app(InMemoryUserRepository::new())
        .oneshot(register(json!({ "name": "Ann", "email": "ann@x.com" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let failure: MessageResponse = json_body(response.into_body()).await;
    assert_eq!(
        failure.message,
        "An error occurred while creating the User: The password is required."
    );
}

/// Same email twice: the second registration is refused and nothing is stored.
#[tokio::test]
async fn test_duplicate_email_is_refused() {
    let repository = InMemoryUserRepository::new();
    let app = app(repository.clone());

    let first = app
        .clone()
        .oneshot(register(
            json!({ "name": "Ann", "email": "ann@x.com", "password": "pw1" }),
        ))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);
    let created: CreateUserResponse = json_body(first.into_body()).await;

    let second = app
        .oneshot(register(
            json!({ "name": "Ann2", "email": "ann@x.com", "password": "pw2" }),
        ))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);

    let failure: MessageResponse = json_body(second.into_body()).await;
    assert_eq!(
        failure.message,
        "An error occurred while creating the User: Email already in use."
    );

    let stored = repository.get_by_email("ann@x.com").await.into_success();
    assert_eq!(stored.id, created.id);
    assert_eq!(stored.name, "Ann");
    assert!(Argon2HashService::new().verify("pw1", &stored.password));
    assert!(repository.get_by_id(created.id + 1).await.is_error());
}
