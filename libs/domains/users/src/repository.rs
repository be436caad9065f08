use async_trait::async_trait;
use chrono::Utc;
use core_common::messages::entity_removed;
use core_common::{Either, EntityId, Repository, RepositoryError, RepositoryOutcome};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};
use tokio::sync::RwLock;

use crate::models::{EMAIL, USER, User};

/// Repository trait for User persistence
#[async_trait]
pub trait UserRepository: Repository<User> {
    /// Exact, case-sensitive lookup; `NotFoundBy(User, email)` when absent
    async fn get_by_email(&self, email: &str) -> RepositoryOutcome<User>;
}

pub(crate) fn not_found_by_email() -> RepositoryError {
    RepositoryError::not_found_by(USER, EMAIL)
}

/// Message of the unique-email violation raised by the in-memory store
pub const DUPLICATE_EMAIL_VIOLATION: &str =
    "duplicate key value violates unique constraint \"users_email_key\"";

/// In-memory implementation of UserRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<BTreeMap<EntityId, User>>>,
    sequence: Arc<AtomicI32>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<User> for InMemoryUserRepository {
    async fn get_by_id(&self, id: EntityId) -> RepositoryOutcome<User> {
        let users = self.users.read().await;
        match users.get(&id) {
            Some(user) => Either::from_success(user.clone()),
            None => Either::from_error(RepositoryError::not_found(USER)),
        }
    }

    async fn add(&self, mut user: User) -> RepositoryOutcome<User> {
        let mut users = self.users.write().await;

        if users.values().any(|u| u.email == user.email) {
            tracing::error!("Rejected user with duplicate email");
            return Either::from_error(RepositoryError::persistence(DUPLICATE_EMAIL_VIOLATION));
        }

        user.id = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        users.insert(user.id, user.clone());

        tracing::info!(user_id = user.id, "Created user");
        Either::from_success(user)
    }

    async fn update(&self, user: User) -> RepositoryOutcome<User> {
        let mut users = self.users.write().await;

        if users
            .values()
            .any(|u| u.id != user.id && u.email == user.email)
        {
            return Either::from_error(RepositoryError::persistence(DUPLICATE_EMAIL_VIOLATION));
        }

        let Some(stored) = users.get_mut(&user.id) else {
            return Either::from_error(RepositoryError::not_found(USER));
        };

        stored.name = user.name;
        stored.email = user.email;
        stored.password = user.password;
        stored.updated_at = Utc::now().max(stored.updated_at);

        tracing::info!(user_id = stored.id, "Updated user");
        Either::from_success(stored.clone())
    }

    async fn delete(&self, id: EntityId) -> RepositoryOutcome<String> {
        let mut users = self.users.write().await;

        if users.remove(&id).is_none() {
            return Either::from_error(RepositoryError::not_found(USER));
        }

        tracing::info!(user_id = id, "Deleted user");
        Either::from_success(entity_removed(USER))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn get_by_email(&self, email: &str) -> RepositoryOutcome<User> {
        let users = self.users.read().await;
        match users.values().find(|u| u.email == email) {
            Some(user) => Either::from_success(user.clone()),
            None => Either::from_error(not_found_by_email()),
        }
    }
}
