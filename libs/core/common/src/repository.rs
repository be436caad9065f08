use async_trait::async_trait;
use std::fmt::Display;
use thiserror::Error;

use crate::either::Either;
use crate::messages::{entity_not_found, entity_not_found_by};

/// Integer identity assigned by storage on insert
pub type EntityId = i32;

/// Failure reported by a repository.
///
/// `Display` yields the human-readable message that services forward to callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("{}", entity_not_found(.entity))]
    NotFound { entity: &'static str },

    #[error("{}", entity_not_found_by(.entity, .field))]
    NotFoundBy {
        entity: &'static str,
        field: &'static str,
    },

    /// Raw storage failure message, propagated without reinterpretation
    #[error("{0}")]
    Persistence(String),
}

impl RepositoryError {
    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound { entity }
    }

    pub fn not_found_by(entity: &'static str, field: &'static str) -> Self {
        Self::NotFoundBy { entity, field }
    }

    pub fn persistence(err: impl Display) -> Self {
        Self::Persistence(err.to_string())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. } | Self::NotFoundBy { .. })
    }
}

pub type RepositoryOutcome<T> = Either<RepositoryError, T>;

/// Contract shared by every aggregate repository.
///
/// Aggregate-specific queries live on extension traits that require this one.
#[async_trait]
pub trait Repository<T>: Send + Sync
where
    T: Send + 'static,
{
    /// Fetch by identity; fails with `NotFound` when no row matches
    async fn get_by_id(&self, id: EntityId) -> RepositoryOutcome<T>;

    /// Insert; storage assigns the identity
    async fn add(&self, entity: T) -> RepositoryOutcome<T>;

    /// Full replace by identity; fails with `NotFound` when no prior row exists
    async fn update(&self, entity: T) -> RepositoryOutcome<T>;

    /// Remove by identity, returning a confirmation message
    async fn delete(&self, id: EntityId) -> RepositoryOutcome<String>;
}
