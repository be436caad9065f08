use core_common::messages::{ID, USER_ID, field_required, operation_failed, operation_succeeded};
use core_common::{
    Either, EntityId, MessageResponse, Operation, Outcome, RepositoryOutcome, RequestValidator,
    ServiceOutcome,
};
use std::sync::Arc;

use crate::models::{
    CATEGORY, CategoryBreakdownResponse, CategoryResponse, CreateCategoryRequest,
    TRANSACTION_TYPE, TransactionType, UpdateCategoryRequest,
};
use crate::repository::CategoryRepository;
use crate::validation::{CreateCategoryValidator, UpdateCategoryValidator};

/// Service layer for Category business logic.
///
/// Every operation runs one validation pass and at most one repository round
/// trip. Validation failures are wrapped in the "An error occurred while ..."
/// envelope; repository failures are passed through with their own message.
#[derive(Clone)]
pub struct CategoryService<R: CategoryRepository> {
    repository: Arc<R>,
}

impl<R: CategoryRepository> CategoryService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn create_category(
        &self,
        request: CreateCategoryRequest,
    ) -> ServiceOutcome<CategoryResponse> {
        tracing::info!(user_id = request.user_id, "Create category request received");

        if let Some(error) = CreateCategoryValidator.first_error(&request) {
            return rejected(Operation::Creating, &error.message);
        }

        let outcome = self.repository.add(request.into_domain_entity()).await;
        respond_with(outcome, Operation::Creating, CategoryResponse::from)
    }

    pub async fn update_category(
        &self,
        request: UpdateCategoryRequest,
    ) -> ServiceOutcome<CategoryResponse> {
        tracing::info!(category_id = request.id, user_id = request.user_id, "Update category request received");

        if let Some(error) = UpdateCategoryValidator.first_error(&request) {
            return rejected(Operation::Updating, &error.message);
        }

        let outcome = self.repository.update(request.into_domain_entity()).await;
        respond_with(outcome, Operation::Updating, CategoryResponse::from)
    }

    /// Soft delete; the row stays reachable through [`Self::get_category_by_id`]
    pub async fn delete_category(&self, id: EntityId) -> ServiceOutcome<MessageResponse> {
        tracing::info!(category_id = id, "Delete category request received");

        if id <= 0 {
            return rejected(Operation::Removing, &field_required(ID));
        }

        let outcome = self.repository.delete(id).await;
        respond_with(outcome, Operation::Removing, |_| {
            MessageResponse::new(operation_succeeded(CATEGORY, Outcome::Removed))
        })
    }

    pub async fn get_category_by_id(&self, id: EntityId) -> ServiceOutcome<CategoryResponse> {
        tracing::info!(category_id = id, "Get category request received");

        if id <= 0 {
            return rejected(Operation::Retrieving, &field_required(ID));
        }

        let outcome = self.repository.get_by_id(id).await;
        respond_with(outcome, Operation::Retrieving, CategoryResponse::from)
    }

    /// Active categories of a user, split into incomes and expenses
    pub async fn get_categories_by_user(
        &self,
        user_id: EntityId,
    ) -> ServiceOutcome<CategoryBreakdownResponse> {
        tracing::info!(user_id, "Get categories by user request received");

        if user_id <= 0 {
            return rejected(Operation::Retrieving, &field_required(USER_ID));
        }

        let outcome = self.repository.get_all_by_user(user_id).await;
        respond_with(outcome, Operation::Retrieving, |categories| {
            categories.into_iter().collect()
        })
    }

    /// Active categories of a user with one transaction type.
    ///
    /// Unlike the other operations, both argument errors are reported
    /// together, one per line.
    pub async fn get_categories_by_user_and_type(
        &self,
        user_id: EntityId,
        transaction_type: TransactionType,
    ) -> ServiceOutcome<Vec<CategoryResponse>> {
        tracing::info!(user_id, %transaction_type, "Get categories by user and type request received");

        let mut errors = Vec::new();
        if user_id <= 0 {
            errors.push(field_required(USER_ID));
        }
        if !transaction_type.is_set() {
            errors.push(field_required(TRANSACTION_TYPE));
        }
        if !errors.is_empty() {
            return rejected(Operation::Retrieving, &errors.join("\n"));
        }

        let outcome = self
            .repository
            .get_all_by_user_and_type(user_id, transaction_type)
            .await;
        respond_with(outcome, Operation::Retrieving, |categories| {
            categories.into_iter().map(CategoryResponse::from).collect()
        })
    }
}

fn rejected<T>(operation: Operation, detail: &str) -> ServiceOutcome<T> {
    tracing::error!(%operation, error = detail, "Category request rejected");
    Either::from_error(MessageResponse::new(operation_failed(
        operation, CATEGORY, detail,
    )))
}

fn respond_with<T, U>(
    outcome: RepositoryOutcome<T>,
    operation: Operation,
    project: impl FnOnce(T) -> U,
) -> ServiceOutcome<U> {
    if let Some(error) = outcome.err() {
        tracing::error!(%operation, %error, "Category repository call failed");
    }
    outcome
        .map(project)
        .map_error(|error| MessageResponse::new(error.to_string()))
}
