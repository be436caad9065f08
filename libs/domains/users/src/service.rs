use core_common::messages::operation_failed;
use core_common::{Either, MessageResponse, Operation, RequestValidator, ServiceOutcome};
use std::sync::Arc;

use crate::hashing::HashService;
use crate::models::{CreateUserRequest, CreateUserResponse, EMAIL_ALREADY_IN_USE, USER};
use crate::repository::UserRepository;
use crate::validation::CreateUserValidator;

/// Service layer for User business logic
#[derive(Clone)]
pub struct UserService<R: UserRepository, H: HashService> {
    repository: Arc<R>,
    hasher: Arc<H>,
}

impl<R: UserRepository, H: HashService> UserService<R, H> {
    pub fn new(repository: R, hasher: H) -> Self {
        Self {
            repository: Arc::new(repository),
            hasher: Arc::new(hasher),
        }
    }

    /// Register a user.
    ///
    /// The email lookup and the insert are two separate round trips, so two
    /// concurrent registrations can both pass the lookup. The unique index on
    /// `users.email` rejects the loser, which then surfaces as a storage failure.
    pub async fn create_user(&self, request: CreateUserRequest) -> ServiceOutcome<CreateUserResponse> {
        tracing::info!(email = %request.email, "Create user request received");

        if let Some(error) = CreateUserValidator.first_error(&request) {
            return rejected(&error.message);
        }

        let existing = self.repository.get_by_email(&request.email).await;
        if existing.is_success() {
            tracing::warn!(email = %request.email, "Email already in use");
            return rejected(EMAIL_ALREADY_IN_USE);
        }
        if let Some(error) = existing.err().filter(|e| !e.is_not_found()) {
            tracing::error!(%error, "Email lookup failed");
            return Either::from_error(MessageResponse::new(error.to_string()));
        }

        let mut user = request.into_domain_entity();
        user.password = match self.hasher.hash(&user.password) {
            Ok(hash) => hash,
            Err(error) => return rejected(&error.to_string()),
        };

        let outcome = self.repository.add(user).await;
        match outcome.ok() {
            Some(created) => tracing::info!(user_id = created.id, "User created"),
            None => tracing::error!(error = %outcome.error(), "Failed to create user"),
        }
        outcome
            .map(CreateUserResponse::from)
            .map_error(|error| MessageResponse::new(error.to_string()))
    }
}

fn rejected<T>(detail: &str) -> ServiceOutcome<T> {
    tracing::error!(error = detail, "User request rejected");
    Either::from_error(MessageResponse::new(operation_failed(
        Operation::Creating,
        USER,
        detail,
    )))
}
