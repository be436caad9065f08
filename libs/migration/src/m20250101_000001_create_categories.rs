use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250101_000000_create_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Categories::Id)
                            .integer()
                            .not_null()
                            .auto_increment(),
                    )
                    .col(integer(Categories::UserId))
                    .col(string_len(Categories::Name, 100))
                    // 0 = none, 1 = income, 2 = expense
                    .col(integer(Categories::Type))
                    .col(boolean(Categories::IsDeleted).default(false))
                    .primary_key(
                        Index::create()
                            .col(Categories::Id)
                            .col(Categories::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_categories_user_id")
                            .from(Categories::Table, Categories::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_categories_user_id_type")
                    .table(Categories::Table)
                    .col(Categories::UserId)
                    .col(Categories::Type)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Categories::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Categories {
    Table,
    Id,
    UserId,
    Name,
    Type,
    IsDeleted,
}
