use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Administrator::Table)
                    .if_not_exists()
                    .col(pk_auto(Administrator::Id))
                    .col(string_len(Administrator::Name, 50))
                    .col(string_len(Administrator::Email, 60))
                    .col(boolean(Administrator::Active).default(true))
                    .col(timestamp(Administrator::CreatedAt))
                    .col(timestamp_null(Administrator::LastAccess))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Administrator::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Administrator {
    Table,
    Id,
    Name,
    Email,
    Active,
    CreatedAt,
    LastAccess,
}
