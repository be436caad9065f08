use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;

use crate::models::{Category, TransactionType};

/// Sea-ORM entity for the categories table.
///
/// Storage keys rows by `(id, user_id)`; `id` alone is still unique because it
/// comes from a sequence.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i32,
    pub name: String,
    #[sea_orm(column_name = "type")]
    pub transaction_type: TransactionType,
    pub is_deleted: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Category {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            name: model.name,
            transaction_type: model.transaction_type,
            is_deleted: model.is_deleted,
        }
    }
}

// Insert shape: the id column is left to the sequence
impl From<Category> for ActiveModel {
    fn from(category: Category) -> Self {
        Self {
            id: NotSet,
            user_id: Set(category.user_id),
            name: Set(category.name),
            transaction_type: Set(category.transaction_type),
            is_deleted: Set(category.is_deleted),
        }
    }
}
