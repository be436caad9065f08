use axum::{Json, Router, extract::State, http::StatusCode, response::Response, routing::post};
use core_common::MessageResponse;
use core_common::http::respond;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::hashing::HashService;
use crate::models::{CreateUserRequest, CreateUserResponse};
use crate::repository::UserRepository;
use crate::service::UserService;

pub const TAG: &str = "Users";

/// OpenAPI documentation for Users API
#[derive(OpenApi)]
#[openapi(
    paths(create_user),
    components(schemas(CreateUserRequest, CreateUserResponse, MessageResponse)),
    tags(
        (name = TAG, description = "User registration")
    )
)]
pub struct ApiDoc;

/// Create the user router
pub fn router<R, H>(service: UserService<R, H>) -> Router
where
    R: UserRepository + 'static,
    H: HashService + 'static,
{
    Router::new()
        .route("/", post(create_user))
        .with_state(Arc::new(service))
}

/// Register a user
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = CreateUserResponse),
        (status = 400, description = "Invalid request, email in use or storage failure", body = MessageResponse)
    )
)]
async fn create_user<R: UserRepository, H: HashService>(
    State(service): State<Arc<UserService<R, H>>>,
    Json(request): Json<CreateUserRequest>,
) -> Response {
    respond(service.create_user(request).await, StatusCode::CREATED)
}
