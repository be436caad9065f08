use core_common::EntityId;
use core_common::validation::{non_zero, not_blank};
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use strum::Display;
use thiserror::Error;
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

pub const CATEGORY: &str = "Category";
pub const CATEGORIES: &str = "Categories";
pub const NAME: &str = "name";
pub const TRANSACTION_TYPE: &str = "transaction type";
pub const BY_USER: &str = "user";

/// Maximum category name length accepted by storage
pub const NAME_MAX_CHARS: u64 = 100;

/// Kind of money movement a category classifies.
///
/// Travels and is stored as an integer. `None` is the unset value and is never
/// valid for a persisted category.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    DeriveActiveEnum,
)]
#[sea_orm(rs_type = "i32", db_type = "Integer")]
#[serde(try_from = "i32", into = "i32")]
pub enum TransactionType {
    #[default]
    #[sea_orm(num_value = 0)]
    None,
    #[sea_orm(num_value = 1)]
    Income,
    #[sea_orm(num_value = 2)]
    Expense,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown transaction type: {0}")]
pub struct UnknownTransactionType(pub i32);

impl TryFrom<i32> for TransactionType {
    type Error = UnknownTransactionType;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::Income),
            2 => Ok(Self::Expense),
            other => Err(UnknownTransactionType(other)),
        }
    }
}

impl From<TransactionType> for i32 {
    fn from(value: TransactionType) -> Self {
        match value {
            TransactionType::None => 0,
            TransactionType::Income => 1,
            TransactionType::Expense => 2,
        }
    }
}

impl TransactionType {
    pub fn is_set(self) -> bool {
        self != Self::None
    }
}

fn transaction_type_is_set(value: &TransactionType) -> Result<(), ValidationError> {
    if !value.is_set() {
        return Err(ValidationError::new(core_common::validation::REQUIRED));
    }
    Ok(())
}

/// Category aggregate
///
/// `id` stays 0 until storage assigns one on insert. A category with
/// `is_deleted` set is hidden from the per-user listings but still reachable by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: EntityId,
    pub user_id: EntityId,
    pub name: String,
    pub transaction_type: TransactionType,
    pub is_deleted: bool,
}

impl Category {
    pub fn new(user_id: EntityId, name: String, transaction_type: TransactionType) -> Self {
        Self {
            id: 0,
            user_id,
            name,
            transaction_type,
            is_deleted: false,
        }
    }
}

/// DTO for creating a category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryRequest {
    #[serde(default)]
    #[validate(
        length(min = 1, max = NAME_MAX_CHARS),
        custom(function = "not_blank")
    )]
    pub name: String,
    #[serde(rename = "type", default)]
    #[schema(value_type = i32)]
    #[validate(custom(function = "transaction_type_is_set"))]
    pub transaction_type: TransactionType,
    #[serde(default)]
    #[validate(custom(function = "non_zero"))]
    pub user_id: EntityId,
}

impl CreateCategoryRequest {
    pub fn new(
        name: impl Into<String>,
        transaction_type: TransactionType,
        user_id: EntityId,
    ) -> Self {
        Self {
            name: name.into(),
            transaction_type,
            user_id,
        }
    }

    pub fn into_domain_entity(self) -> Category {
        Category::new(self.user_id, self.name, self.transaction_type)
    }
}

/// DTO for replacing the name and type of an existing category
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCategoryRequest {
    #[serde(default)]
    #[validate(custom(function = "non_zero"))]
    pub id: EntityId,
    #[serde(default)]
    #[validate(custom(function = "non_zero"))]
    pub user_id: EntityId,
    #[serde(default)]
    #[validate(
        length(min = 1, max = NAME_MAX_CHARS),
        custom(function = "not_blank")
    )]
    pub name: String,
    #[serde(rename = "type", default)]
    #[schema(value_type = i32)]
    #[validate(custom(function = "transaction_type_is_set"))]
    pub transaction_type: TransactionType,
}

impl UpdateCategoryRequest {
    pub fn new(
        id: EntityId,
        user_id: EntityId,
        name: impl Into<String>,
        transaction_type: TransactionType,
    ) -> Self {
        Self {
            id,
            user_id,
            name: name.into(),
            transaction_type,
        }
    }

    pub fn into_domain_entity(self) -> Category {
        Category {
            id: self.id,
            ..Category::new(self.user_id, self.name, self.transaction_type)
        }
    }
}

/// Public projection of a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: EntityId,
    pub user_id: EntityId,
    pub name: String,
    #[serde(rename = "type")]
    #[schema(value_type = i32)]
    pub transaction_type: TransactionType,
    pub is_deleted: bool,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            user_id: category.user_id,
            name: category.name,
            transaction_type: category.transaction_type,
            is_deleted: category.is_deleted,
        }
    }
}

/// A user's categories split by transaction type
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategoryBreakdownResponse {
    pub incomes: Vec<CategoryResponse>,
    pub expenses: Vec<CategoryResponse>,
}

impl FromIterator<Category> for CategoryBreakdownResponse {
    fn from_iter<I: IntoIterator<Item = Category>>(categories: I) -> Self {
        let mut breakdown = Self::default();
        for category in categories {
            match category.transaction_type {
                TransactionType::Income => breakdown.incomes.push(category.into()),
                TransactionType::Expense => breakdown.expenses.push(category.into()),
                TransactionType::None => {
                    tracing::warn!(category_id = category.id, "Skipping category without a type");
                }
            }
        }
        breakdown
    }
}

/// `?id=` query used by the single-category endpoints
#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CategoryIdQuery {
    #[serde(default)]
    pub id: EntityId,
}

/// `?userId=` query
#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct UserQuery {
    #[serde(default)]
    pub user_id: EntityId,
}

/// `?userId=&type=` query
#[derive(Debug, Clone, Copy, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct UserAndTypeQuery {
    #[serde(default)]
    pub user_id: EntityId,
    #[serde(rename = "type", default)]
    #[param(value_type = i32)]
    pub transaction_type: TransactionType,
}
