use async_trait::async_trait;
use core_common::messages::entity_removed;
use core_common::{Either, EntityId, Repository, RepositoryError, RepositoryOutcome};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};
use tokio::sync::RwLock;

use crate::models::{BY_USER, CATEGORIES, CATEGORY, Category, TransactionType};

/// Repository trait for Category persistence.
///
/// `get_by_id` (from [`Repository`]) ignores the soft-delete flag; the listing
/// queries below only return rows that are not deleted, and treat an empty
/// result as `NotFoundBy` rather than an empty success.
#[async_trait]
pub trait CategoryRepository: Repository<Category> {
    /// Non-deleted categories owned by `user_id`
    async fn get_all_by_user(&self, user_id: EntityId) -> RepositoryOutcome<Vec<Category>>;

    /// Non-deleted categories owned by `user_id` with the given type
    async fn get_all_by_user_and_type(
        &self,
        user_id: EntityId,
        transaction_type: TransactionType,
    ) -> RepositoryOutcome<Vec<Category>>;
}

pub(crate) fn not_found_by_user() -> RepositoryError {
    RepositoryError::not_found_by(CATEGORIES, BY_USER)
}

/// In-memory implementation of CategoryRepository (for development/testing)
///
/// There is no users table here, so `add` stores categories for any owner id.
/// `PgCategoryRepository` rejects unknown owners through the foreign key.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCategoryRepository {
    categories: Arc<RwLock<BTreeMap<EntityId, Category>>>,
    sequence: Arc<AtomicI32>,
}

impl InMemoryCategoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    async fn list_where(
        &self,
        predicate: impl Fn(&Category) -> bool,
    ) -> RepositoryOutcome<Vec<Category>> {
        let categories = self.categories.read().await;
        let found: Vec<Category> = categories
            .values()
            .filter(|c| !c.is_deleted && predicate(c))
            .cloned()
            .collect();

        if found.is_empty() {
            return Either::from_error(not_found_by_user());
        }
        Either::from_success(found)
    }
}

#[async_trait]
impl Repository<Category> for InMemoryCategoryRepository {
    async fn get_by_id(&self, id: EntityId) -> RepositoryOutcome<Category> {
        let categories = self.categories.read().await;
        match categories.get(&id) {
            Some(category) => Either::from_success(category.clone()),
            None => Either::from_error(RepositoryError::not_found(CATEGORY)),
        }
    }

    async fn add(&self, mut category: Category) -> RepositoryOutcome<Category> {
        let mut categories = self.categories.write().await;

        category.id = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        categories.insert(category.id, category.clone());

        tracing::info!(category_id = category.id, user_id = category.user_id, "Created category");
        Either::from_success(category)
    }

    async fn update(&self, category: Category) -> RepositoryOutcome<Category> {
        let mut categories = self.categories.write().await;

        let Some(stored) = categories
            .get_mut(&category.id)
            .filter(|stored| stored.user_id == category.user_id)
        else {
            return Either::from_error(RepositoryError::not_found(CATEGORY));
        };

        stored.name = category.name;
        stored.transaction_type = category.transaction_type;

        tracing::info!(category_id = stored.id, "Updated category");
        Either::from_success(stored.clone())
    }

    async fn delete(&self, id: EntityId) -> RepositoryOutcome<String> {
        let mut categories = self.categories.write().await;

        let Some(stored) = categories.get_mut(&id) else {
            return Either::from_error(RepositoryError::not_found(CATEGORY));
        };
        stored.is_deleted = true;

        tracing::info!(category_id = id, "Soft deleted category");
        Either::from_success(entity_removed(CATEGORY))
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCategoryRepository {
    async fn get_all_by_user(&self, user_id: EntityId) -> RepositoryOutcome<Vec<Category>> {
        self.list_where(|c| c.user_id == user_id).await
    }

    async fn get_all_by_user_and_type(
        &self,
        user_id: EntityId,
        transaction_type: TransactionType,
    ) -> RepositoryOutcome<Vec<Category>> {
        self.list_where(|c| c.user_id == user_id && c.transaction_type == transaction_type)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn seeded(repo: &InMemoryCategoryRepository, name: &str, kind: TransactionType) -> Category {
        repo.add(Category::new(7, name.to_string(), kind))
            .await
            .into_success()
    }

    #[tokio::test]
    async fn test_add_assigns_sequential_ids() {
        let repo = InMemoryCategoryRepository::new();

        let first = seeded(&repo, "Salary", TransactionType::Income).await;
        let second = seeded(&repo, "Rent", TransactionType::Expense).await;

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert!(!first.is_deleted);
    }

    #[tokio::test]
    async fn test_add_does_not_check_the_owner() {
        let repo = InMemoryCategoryRepository::new();

        let created = repo
            .add(Category::new(404, "Orphan".to_string(), TransactionType::Expense))
            .await
            .into_success();

        assert_eq!(created.user_id, 404);
        assert_eq!(repo.get_all_by_user(404).await.into_success().len(), 1);
    }

    #[tokio::test]
    async fn test_get_by_id_missing() {
        let repo = InMemoryCategoryRepository::new();

        let result = repo.get_by_id(42).await;
        assert_eq!(result.error().to_string(), "Category not found.");
    }

    #[tokio::test]
    async fn test_soft_delete_hides_from_listings_only() {
        let repo = InMemoryCategoryRepository::new();
        let kept = seeded(&repo, "Salary", TransactionType::Income).await;
        let removed = seeded(&repo, "Bonus", TransactionType::Income).await;

        let message = repo.delete(removed.id).await.into_success();
        assert_eq!(message, "Category removed successfully!");

        let listed = repo.get_all_by_user(7).await.into_success();
        assert_eq!(listed, vec![kept.clone()]);

        let by_type = repo
            .get_all_by_user_and_type(7, TransactionType::Income)
            .await
            .into_success();
        assert_eq!(by_type, vec![kept]);

        let fetched = repo.get_by_id(removed.id).await.into_success();
        assert!(fetched.is_deleted);
    }

    #[tokio::test]
    async fn test_empty_listing_is_an_error() {
        let repo = InMemoryCategoryRepository::new();
        seeded(&repo, "Rent", TransactionType::Expense).await;

        let by_user = repo.get_all_by_user(8).await;
        assert_eq!(by_user.error().to_string(), "Categories not found by user.");

        let by_type = repo
            .get_all_by_user_and_type(7, TransactionType::Income)
            .await;
        assert!(by_type.is_error());
    }

    #[tokio::test]
    async fn test_update_replaces_name_and_type_but_keeps_deleted_flag() {
        let repo = InMemoryCategoryRepository::new();
        let created = seeded(&repo, "Groceries", TransactionType::Expense).await;
        repo.delete(created.id).await.into_success();

        let mut replacement = Category::new(7, "Food".to_string(), TransactionType::Income);
        replacement.id = created.id;

        let updated = repo.update(replacement).await.into_success();
        assert_eq!(updated.name, "Food");
        assert_eq!(updated.transaction_type, TransactionType::Income);
        assert!(updated.is_deleted);
    }

    #[tokio::test]
    async fn test_update_missing_or_foreign_row_is_not_found() {
        let repo = InMemoryCategoryRepository::new();
        let created = seeded(&repo, "Groceries", TransactionType::Expense).await;

        let mut missing = Category::new(7, "Food".to_string(), TransactionType::Income);
        missing.id = 99;
        assert!(repo.update(missing).await.error().is_not_found());

        let mut other_owner = Category::new(8, "Food".to_string(), TransactionType::Income);
        other_owner.id = created.id;
        assert!(repo.update(other_owner).await.error().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let repo = InMemoryCategoryRepository::new();
        assert!(repo.delete(3).await.error().is_not_found());
    }
}
