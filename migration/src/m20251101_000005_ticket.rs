use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251101_000001_customer::Customer;

static IDX_TICKET_CUSTOMER_ID: &str = "idx-ticket-customer_id";
static FK_TICKET_CUSTOMER_ID: &str = "fk-ticket-customer_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Ticket::Table)
                    .if_not_exists()
                    .col(pk_auto(Ticket::Id))
                    .col(string_len(Ticket::Title, 50))
                    .col(string_len(Ticket::Description, 250))
                    .col(date(Ticket::CreatedOn))
                    .col(integer(Ticket::CustomerId))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TICKET_CUSTOMER_ID)
                    .table(Ticket::Table)
                    .col(Ticket::CustomerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TICKET_CUSTOMER_ID)
                    .from_tbl(Ticket::Table)
                    .from_col(Ticket::CustomerId)
                    .to_tbl(Customer::Table)
                    .to_col(Customer::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_foreign_key(
                ForeignKey::drop()
                    .name(FK_TICKET_CUSTOMER_ID)
                    .table(Ticket::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_TICKET_CUSTOMER_ID)
                    .table(Ticket::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Ticket::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Ticket {
    Table,
    Id,
    Title,
    Description,
    CreatedOn,
    CustomerId,
}
