use async_trait::async_trait;
use core_common::messages::entity_removed;
use core_common::{EntityId, Repository, RepositoryError, RepositoryOutcome};
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::{
    entity,
    models::{CATEGORY, Category, TransactionType},
    repository::{CategoryRepository, not_found_by_user},
};

#[derive(Clone)]
pub struct PgCategoryRepository {
    db: DatabaseConnection,
}

impl PgCategoryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find(&self, id: EntityId) -> Result<Category, RepositoryError> {
        entity::Entity::find()
            .filter(entity::Column::Id.eq(id))
            .one(&self.db)
            .await
            .map_err(RepositoryError::persistence)?
            .map(Category::from)
            .ok_or_else(|| RepositoryError::not_found(CATEGORY))
    }

    async fn list_active(
        &self,
        user_id: EntityId,
        transaction_type: Option<TransactionType>,
    ) -> Result<Vec<Category>, RepositoryError> {
        let mut query = entity::Entity::find()
            .filter(entity::Column::UserId.eq(user_id))
            .filter(entity::Column::IsDeleted.eq(false));

        if let Some(transaction_type) = transaction_type {
            query = query.filter(entity::Column::TransactionType.eq(transaction_type));
        }

        let models = query
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await
            .map_err(RepositoryError::persistence)?;

        if models.is_empty() {
            return Err(not_found_by_user());
        }
        Ok(models.into_iter().map(Category::from).collect())
    }

    async fn soft_delete(&self, id: EntityId) -> Result<String, RepositoryError> {
        let category = self.find(id).await?;

        let active_model = entity::ActiveModel {
            id: Unchanged(category.id),
            user_id: Unchanged(category.user_id),
            name: NotSet,
            transaction_type: NotSet,
            is_deleted: Set(true),
        };
        self.write(active_model).await?;

        Ok(entity_removed(CATEGORY))
    }

    async fn write(&self, active_model: entity::ActiveModel) -> Result<Category, RepositoryError> {
        match active_model.update(&self.db).await {
            Ok(model) => Ok(model.into()),
            Err(DbErr::RecordNotUpdated) => Err(RepositoryError::not_found(CATEGORY)),
            Err(e) => Err(RepositoryError::persistence(e)),
        }
    }
}

#[async_trait]
impl Repository<Category> for PgCategoryRepository {
    async fn get_by_id(&self, id: EntityId) -> RepositoryOutcome<Category> {
        self.find(id).await.into()
    }

    async fn add(&self, category: Category) -> RepositoryOutcome<Category> {
        let active_model: entity::ActiveModel = category.into();

        let result = active_model
            .insert(&self.db)
            .await
            .map(Category::from)
            .map_err(RepositoryError::persistence);

        match &result {
            Ok(created) => tracing::info!(category_id = created.id, "Created category"),
            Err(e) => tracing::error!(error = %e, "Failed to insert category"),
        }
        result.into()
    }

    async fn update(&self, category: Category) -> RepositoryOutcome<Category> {
        // Owner is part of the key, so a mismatched user_id matches no row
        let active_model = entity::ActiveModel {
            id: Unchanged(category.id),
            user_id: Unchanged(category.user_id),
            name: Set(category.name),
            transaction_type: Set(category.transaction_type),
            is_deleted: NotSet,
        };

        let result = self.write(active_model).await;
        match &result {
            Ok(updated) => tracing::info!(category_id = updated.id, "Updated category"),
            Err(e) => tracing::error!(category_id = category.id, error = %e, "Failed to update category"),
        }
        result.into()
    }

    async fn delete(&self, id: EntityId) -> RepositoryOutcome<String> {
        let result = self.soft_delete(id).await;

        match &result {
            Ok(_) => tracing::info!(category_id = id, "Soft deleted category"),
            Err(e) => tracing::error!(category_id = id, error = %e, "Failed to soft delete category"),
        }
        result.into()
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn get_all_by_user(&self, user_id: EntityId) -> RepositoryOutcome<Vec<Category>> {
        self.list_active(user_id, None).await.into()
    }

    async fn get_all_by_user_and_type(
        &self,
        user_id: EntityId,
        transaction_type: TransactionType,
    ) -> RepositoryOutcome<Vec<Category>> {
        self.list_active(user_id, Some(transaction_type)).await.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, Statement};

    fn model(id: i32, is_deleted: bool) -> entity::Model {
        entity::Model {
            id,
            user_id: 7,
            name: "Groceries".to_string(),
            transaction_type: TransactionType::Expense,
            is_deleted,
        }
    }

    fn repository(db: MockDatabase) -> PgCategoryRepository {
        PgCategoryRepository::new(db.into_connection())
    }

    /// Repository plus a handle on the same mock connection for reading the SQL log
    fn logged(db: MockDatabase) -> (PgCategoryRepository, DatabaseConnection) {
        let connection = db.into_connection();
        (PgCategoryRepository::new(connection.clone()), connection)
    }

    fn issued(connection: DatabaseConnection) -> Vec<Statement> {
        connection
            .into_transaction_log()
            .iter()
            .flat_map(|transaction| transaction.statements().to_vec())
            .collect()
    }

    /// `(SET clause, WHERE clause onwards)` of an UPDATE statement
    fn split_update(statement: &Statement) -> (&str, &str) {
        assert!(statement.sql.starts_with(r#"UPDATE "categories" SET"#), "{}", statement.sql);
        statement
            .sql
            .split_once(" WHERE ")
            .expect("UPDATE without a WHERE clause")
    }

    #[tokio::test]
    async fn test_get_by_id_returns_soft_deleted_rows() {
        let repo = repository(
            MockDatabase::new(DatabaseBackend::Postgres).append_query_results([vec![model(3, true)]]),
        );

        let category = repo.get_by_id(3).await.into_success();
        assert_eq!(category.id, 3);
        assert!(category.is_deleted);
    }

    #[tokio::test]
    async fn test_get_by_id_missing_row() {
        let repo = repository(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<entity::Model>::new()]),
        );

        let result = repo.get_by_id(3).await;
        assert_eq!(result.error(), &RepositoryError::not_found(CATEGORY));
    }

    #[tokio::test]
    async fn test_add_returns_generated_identity() {
        let repo = repository(
            MockDatabase::new(DatabaseBackend::Postgres).append_query_results([vec![model(11, false)]]),
        );

        let created = repo
            .add(Category::new(7, "Groceries".to_string(), TransactionType::Expense))
            .await
            .into_success();
        assert_eq!(created.id, 11);
    }

    #[tokio::test]
    async fn test_add_propagates_storage_message() {
        let repo = repository(
            MockDatabase::new(DatabaseBackend::Postgres).append_query_errors([DbErr::Custom(
                "violates foreign key constraint".to_string(),
            )]),
        );

        let result = repo
            .add(Category::new(99, "Groceries".to_string(), TransactionType::Expense))
            .await;
        let RepositoryError::Persistence(message) = result.into_error() else {
            panic!("expected a persistence error");
        };
        assert!(message.contains("violates foreign key constraint"));
    }

    #[tokio::test]
    async fn test_update_without_matching_row_is_not_found() {
        let repo = repository(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<entity::Model>::new()]),
        );

        let mut category = Category::new(7, "Food".to_string(), TransactionType::Income);
        category.id = 40;

        assert!(repo.update(category).await.error().is_not_found());
    }

    #[tokio::test]
    async fn test_empty_listing_is_not_found_by_user() {
        let repo = repository(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<entity::Model>::new()]),
        );

        let result = repo.get_all_by_user(7).await;
        assert_eq!(result.error().to_string(), "Categories not found by user.");
    }

    #[tokio::test]
    async fn test_listing_by_type() {
        let repo = repository(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![model(1, false), model(2, false)]]),
        );

        let categories = repo
            .get_all_by_user_and_type(7, TransactionType::Expense)
            .await
            .into_success();
        assert_eq!(categories.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_flags_the_row() {
        let repo = repository(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![model(5, false)]])
                .append_query_results([vec![model(5, true)]]),
        );

        let message = repo.delete(5).await.into_success();
        assert_eq!(message, "Category removed successfully!");
    }

    #[tokio::test]
    async fn test_listing_skips_soft_deleted_rows() {
        let (repo, connection) = logged(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![model(1, false)]])
                .append_query_results([vec![model(1, false)]]),
        );

        let _ = repo.get_all_by_user(7).await.into_success();
        let _ = repo
            .get_all_by_user_and_type(7, TransactionType::Expense)
            .await
            .into_success();

        let statements = issued(connection);
        assert_eq!(statements.len(), 2);
        for statement in &statements {
            assert!(statement.sql.contains(r#""is_deleted" = $"#), "{}", statement.sql);
            assert!(statement.sql.contains(r#""user_id" = $"#), "{}", statement.sql);
        }
        assert!(statements[1].sql.contains(r#""type" = $"#));
    }

    #[tokio::test]
    async fn test_get_by_id_ignores_the_deleted_flag() {
        let (repo, connection) = logged(
            MockDatabase::new(DatabaseBackend::Postgres).append_query_results([vec![model(3, true)]]),
        );

        let _ = repo.get_by_id(3).await.into_success();

        let statements = issued(connection);
        assert_eq!(statements.len(), 1);
        let sql = &statements[0].sql;
        assert!(sql.contains(r#""id" = $"#), "{sql}");
        assert!(!sql.contains(r#""is_deleted" ="#), "{sql}");
    }

    #[tokio::test]
    async fn test_update_keys_on_owner_and_keeps_deleted_flag() {
        let (repo, connection) = logged(
            MockDatabase::new(DatabaseBackend::Postgres).append_query_results([vec![model(4, true)]]),
        );

        let mut category = Category::new(7, "Food".to_string(), TransactionType::Income);
        category.id = 4;
        let _ = repo.update(category).await.into_success();

        let statements = issued(connection);
        assert_eq!(statements.len(), 1);
        let (set, filter) = split_update(&statements[0]);
        assert!(set.contains(r#""name" = $"#), "{set}");
        assert!(set.contains(r#""type" = $"#), "{set}");
        assert!(!set.contains(r#""is_deleted""#), "{set}");
        assert!(filter.contains(r#""id" = $"#), "{filter}");
        assert!(filter.contains(r#""user_id" = $"#), "{filter}");
    }

    #[tokio::test]
    async fn test_soft_delete_writes_only_the_flag() {
        let (repo, connection) = logged(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![model(5, false)]])
                .append_query_results([vec![model(5, true)]]),
        );

        let _ = repo.delete(5).await.into_success();

        let statements = issued(connection);
        assert_eq!(statements.len(), 2);
        assert!(statements[0].sql.starts_with("SELECT"));
        let (set, filter) = split_update(&statements[1]);
        assert!(set.contains(r#""is_deleted" = $"#), "{set}");
        assert!(!set.contains(r#""name""#), "{set}");
        assert!(!set.contains(r#""type""#), "{set}");
        assert!(filter.contains(r#""user_id" = $"#), "{filter}");
    }
}
