use sea_orm_migration::{prelude::*, schema::*};

static IDX_EMPLOYEE_ROLE_TIER: &str = "idx-employee-role-tier";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employee::Table)
                    .if_not_exists()
                    .col(pk_auto(Employee::Id))
                    .col(string_len(Employee::Name, 50))
                    .col(string_len(Employee::Email, 60))
                    .col(string_len_null(Employee::Phone, 15))
                    .col(string_len(Employee::Role, 16))
                    .col(integer(Employee::Tier).default(1))
                    .col(boolean(Employee::Active).default(true))
                    .col(timestamp(Employee::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EMPLOYEE_ROLE_TIER)
                    .table(Employee::Table)
                    .col(Employee::Role)
                    .col(Employee::Tier)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EMPLOYEE_ROLE_TIER)
                    .table(Employee::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Employee::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Employee {
    Table,
    Id,
    Name,
    Email,
    Phone,
    Role,
    Tier,
    Active,
    CreatedAt,
}
