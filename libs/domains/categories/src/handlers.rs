use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::Response,
    routing::get,
};
use core_common::MessageResponse;
use core_common::http::respond;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::models::{
    CategoryBreakdownResponse, CategoryIdQuery, CategoryResponse, CreateCategoryRequest,
    UpdateCategoryRequest, UserAndTypeQuery, UserQuery,
};
use crate::repository::CategoryRepository;
use crate::service::CategoryService;

pub const TAG: &str = "Categories";

/// OpenAPI documentation for Categories API
#[derive(OpenApi)]
#[openapi(
    paths(
        create_category,
        update_category,
        delete_category,
        get_category,
        get_categories_by_user,
        get_categories_by_user_and_type,
    ),
    components(schemas(
        CreateCategoryRequest,
        UpdateCategoryRequest,
        CategoryResponse,
        CategoryBreakdownResponse,
        MessageResponse
    )),
    tags(
        (name = TAG, description = "Income and expense categories")
    )
)]
pub struct ApiDoc;

/// Create the category router with all HTTP endpoints
pub fn router<R: CategoryRepository + 'static>(service: CategoryService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route(
            "/",
            get(get_category)
                .post(create_category)
                .patch(update_category)
                .delete(delete_category),
        )
        .route("/byuser", get(get_categories_by_user))
        .route("/byuserandtype", get(get_categories_by_user_and_type))
        .with_state(shared_service)
}

/// Create a category
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created", body = CategoryResponse),
        (status = 400, description = "Invalid request or storage failure", body = MessageResponse)
    )
)]
async fn create_category<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    Json(request): Json<CreateCategoryRequest>,
) -> Response {
    respond(service.create_category(request).await, StatusCode::CREATED)
}

/// Replace the name and type of a category
#[utoipa::path(
    patch,
    path = "",
    tag = TAG,
    request_body = UpdateCategoryRequest,
    responses(
        (status = 200, description = "Category updated", body = CategoryResponse),
        (status = 400, description = "Invalid request or category not found", body = MessageResponse)
    )
)]
async fn update_category<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    Json(request): Json<UpdateCategoryRequest>,
) -> Response {
    respond(service.update_category(request).await, StatusCode::OK)
}

/// Soft delete a category
#[utoipa::path(
    delete,
    path = "",
    tag = TAG,
    params(CategoryIdQuery),
    responses(
        (status = 200, description = "Category removed", body = MessageResponse),
        (status = 400, description = "Invalid id or category not found", body = MessageResponse)
    )
)]
async fn delete_category<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    Query(query): Query<CategoryIdQuery>,
) -> Response {
    respond(service.delete_category(query.id).await, StatusCode::OK)
}

/// Get a category by id, including removed ones
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(CategoryIdQuery),
    responses(
        (status = 200, description = "Category found", body = CategoryResponse),
        (status = 400, description = "Invalid id or category not found", body = MessageResponse)
    )
)]
async fn get_category<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    Query(query): Query<CategoryIdQuery>,
) -> Response {
    respond(service.get_category_by_id(query.id).await, StatusCode::OK)
}

/// Active categories of a user, split into incomes and expenses
#[utoipa::path(
    get,
    path = "/byuser",
    tag = TAG,
    params(UserQuery),
    responses(
        (status = 200, description = "Categories found", body = CategoryBreakdownResponse),
        (status = 400, description = "Invalid user id or no categories", body = MessageResponse)
    )
)]
async fn get_categories_by_user<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    Query(query): Query<UserQuery>,
) -> Response {
    respond(
        service.get_categories_by_user(query.user_id).await,
        StatusCode::OK,
    )
}

/// Active categories of a user with one transaction type
#[utoipa::path(
    get,
    path = "/byuserandtype",
    tag = TAG,
    params(UserAndTypeQuery),
    responses(
        (status = 200, description = "Categories found", body = Vec<CategoryResponse>),
        (status = 400, description = "Invalid arguments or no categories", body = MessageResponse)
    )
)]
async fn get_categories_by_user_and_type<R: CategoryRepository>(
    State(service): State<Arc<CategoryService<R>>>,
    Query(query): Query<UserAndTypeQuery>,
) -> Response {
    let outcome = service
        .get_categories_by_user_and_type(query.user_id, query.transaction_type)
        .await;
    respond(outcome, StatusCode::OK)
}
