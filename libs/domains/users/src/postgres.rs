use async_trait::async_trait;
use chrono::Utc;
use core_common::messages::entity_removed;
use core_common::{EntityId, Repository, RepositoryError, RepositoryOutcome};
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter};

use crate::{
    entity,
    models::{USER, User},
    repository::{UserRepository, not_found_by_email},
};

/// PostgreSQL implementation of UserRepository using SeaORM
#[derive(Clone)]
pub struct PgUserRepository {
    db: DatabaseConnection,
}

impl PgUserRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn find(&self, id: EntityId) -> Result<User, RepositoryError> {
        entity::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(RepositoryError::persistence)?
            .map(User::from)
            .ok_or_else(|| RepositoryError::not_found(USER))
    }

    async fn find_by_email(&self, email: &str) -> Result<User, RepositoryError> {
        entity::Entity::find()
            .filter(entity::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(RepositoryError::persistence)?
            .map(User::from)
            .ok_or_else(not_found_by_email)
    }

    /// Rewrites the mutable columns. `updated_at` never moves backwards, even
    /// when the stored stamp is ahead of this host's clock.
    async fn replace(&self, user: User) -> Result<User, RepositoryError> {
        let stored = self.find(user.id).await?;

        let active_model = entity::ActiveModel {
            id: Unchanged(user.id),
            name: Set(user.name),
            email: Set(user.email),
            password: Set(user.password),
            created_at: NotSet,
            updated_at: Set(Utc::now().max(stored.updated_at)),
        };

        match active_model.update(&self.db).await {
            Ok(model) => Ok(User::from(model)),
            Err(DbErr::RecordNotUpdated) => Err(RepositoryError::not_found(USER)),
            Err(e) => Err(RepositoryError::persistence(e)),
        }
    }

    async fn remove(&self, id: EntityId) -> Result<String, RepositoryError> {
        let result = entity::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(RepositoryError::persistence)?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::not_found(USER));
        }
        Ok(entity_removed(USER))
    }
}

#[async_trait]
impl Repository<User> for PgUserRepository {
    async fn get_by_id(&self, id: EntityId) -> RepositoryOutcome<User> {
        self.find(id).await.into()
    }

    async fn add(&self, user: User) -> RepositoryOutcome<User> {
        let active_model: entity::ActiveModel = user.into();

        let result = active_model
            .insert(&self.db)
            .await
            .map(User::from)
            .map_err(RepositoryError::persistence);

        match &result {
            Ok(created) => tracing::info!(user_id = created.id, "Created user"),
            Err(e) => tracing::error!(error = %e, "Failed to insert user"),
        }
        result.into()
    }

    async fn update(&self, user: User) -> RepositoryOutcome<User> {
        let user_id = user.id;
        let result = self.replace(user).await;

        match &result {
            Ok(_) => tracing::info!(user_id, "Updated user"),
            Err(e) => tracing::error!(user_id, error = %e, "Failed to update user"),
        }
        result.into()
    }

    async fn delete(&self, id: EntityId) -> RepositoryOutcome<String> {
        let result = self.remove(id).await;

        match &result {
            Ok(_) => tracing::info!(user_id = id, "Deleted user"),
            Err(e) => tracing::error!(user_id = id, error = %e, "Failed to delete user"),
        }
        result.into()
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn get_by_email(&self, email: &str) -> RepositoryOutcome<User> {
        self.find_by_email(email).await.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};

    fn model(id: i32, email: &str) -> entity::Model {
        let now = Utc::now();
        entity::Model {
            id,
            name: "Ann".to_string(),
            email: email.to_string(),
            password: "$argon2id$v=19$hash".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn repository(db: MockDatabase) -> PgUserRepository {
        PgUserRepository::new(db.into_connection())
    }

    #[tokio::test]
    async fn test_get_by_email_found() {
        let repo = repository(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![model(4, "ann@x.com")]]),
        );

        let user = repo.get_by_email("ann@x.com").await.into_success();
        assert_eq!(user.id, 4);
    }

    #[tokio::test]
    async fn test_get_by_email_missing() {
        let repo = repository(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<entity::Model>::new()]),
        );

        let result = repo.get_by_email("ann@x.com").await;
        assert_eq!(result.error().to_string(), "User not found by email.");
    }

    #[tokio::test]
    async fn test_add_surfaces_unique_violation() {
        let repo = repository(MockDatabase::new(DatabaseBackend::Postgres).append_query_errors(
            [DbErr::Custom(
                "duplicate key value violates unique constraint \"users_email_key\"".to_string(),
            )],
        ));

        let result = repo
            .add(User::new("Ann".into(), "ann@x.com".into(), "hash".into()))
            .await;
        assert!(result.error().to_string().contains("users_email_key"));
    }

    #[tokio::test]
    async fn test_add_returns_generated_identity() {
        let repo = repository(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([vec![model(21, "ann@x.com")]]),
        );

        let created = repo
            .add(User::new("Ann".into(), "ann@x.com".into(), "hash".into()))
            .await
            .into_success();
        assert_eq!(created.id, 21);
    }

    #[tokio::test]
    async fn test_delete_without_row_is_not_found() {
        let repo = repository(MockDatabase::new(DatabaseBackend::Postgres).append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ]));

        assert!(repo.delete(8).await.error().is_not_found());
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let repo = repository(MockDatabase::new(DatabaseBackend::Postgres).append_exec_results([
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
        ]));

        assert_eq!(repo.delete(8).await.into_success(), "User removed successfully!");
    }

    #[tokio::test]
    async fn test_update_keeps_updated_at_monotonic() {
        let ahead = Utc::now() + Duration::hours(1);
        let stored = entity::Model {
            updated_at: ahead,
            ..model(6, "ann@x.com")
        };
        let connection = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored.clone()]])
            .append_query_results([vec![stored]])
            .into_connection();
        let repo = PgUserRepository::new(connection.clone());

        let user = User {
            id: 6,
            ..User::new("Ann B".into(), "ann@x.com".into(), "hash".into())
        };
        let updated = repo.update(user).await.into_success();
        assert_eq!(updated.updated_at, ahead);

        let log = connection.into_transaction_log();
        let statements: Vec<_> = log.iter().flat_map(|t| t.statements()).collect();
        assert_eq!(statements.len(), 2);
        assert!(statements[1].sql.starts_with(r#"UPDATE "users""#));
        let values = statements[1].values.as_ref().expect("bound values");
        assert!(values.0.contains(&Value::from(ahead)));
    }

    #[tokio::test]
    async fn test_update_without_row_is_not_found() {
        let repo = repository(
            MockDatabase::new(DatabaseBackend::Postgres)
                .append_query_results([Vec::<entity::Model>::new()]),
        );

        let user = User {
            id: 6,
            ..User::new("Ann".into(), "ann@x.com".into(), "hash".into())
        };
        assert!(repo.update(user).await.error().is_not_found());
    }
}
