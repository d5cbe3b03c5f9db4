use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20251101_000002_employee::Employee, m20251101_000005_ticket::Ticket};

static IDX_TICKET_STATE_STATUS_QUEUE_TIER: &str = "idx-ticket_state-status_id-queue_tier";
static IDX_TICKET_STATE_STATUS_OWNER_TIER: &str = "idx-ticket_state-status_id-owner_tier";
static FK_TICKET_STATE_TICKET_ID: &str = "fk-ticket_state-ticket_id";
static FK_TICKET_STATE_EMPLOYEE_ID: &str = "fk-ticket_state-employee_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TicketState::Table)
                    .if_not_exists()
                    .col(integer(TicketState::TicketId).primary_key())
                    .col(integer(TicketState::HeadEntryId))
                    .col(integer(TicketState::StatusId))
                    .col(integer_null(TicketState::EmployeeId))
                    .col(integer_null(TicketState::OwnerTier))
                    .col(integer_null(TicketState::QueueTier))
                    .col(date(TicketState::UpdatedOn))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TICKET_STATE_STATUS_QUEUE_TIER)
                    .table(TicketState::Table)
                    .col(TicketState::StatusId)
                    .col(TicketState::QueueTier)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TICKET_STATE_STATUS_OWNER_TIER)
                    .table(TicketState::Table)
                    .col(TicketState::StatusId)
                    .col(TicketState::OwnerTier)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TICKET_STATE_TICKET_ID)
                    .from_tbl(TicketState::Table)
                    .from_col(TicketState::TicketId)
                    .to_tbl(Ticket::Table)
                    .to_col(Ticket::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TICKET_STATE_EMPLOYEE_ID)
                    .from_tbl(TicketState::Table)
                    .from_col(TicketState::EmployeeId)
                    .to_tbl(Employee::Table)
                    .to_col(Employee::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [FK_TICKET_STATE_EMPLOYEE_ID, FK_TICKET_STATE_TICKET_ID] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(TicketState::Table)
                        .to_owned(),
                )
                .await?;
        }

        for idx in [
            IDX_TICKET_STATE_STATUS_OWNER_TIER,
            IDX_TICKET_STATE_STATUS_QUEUE_TIER,
        ] {
            manager
                .drop_index(
                    Index::drop()
                        .name(idx)
                        .table(TicketState::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_table(Table::drop().table(TicketState::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum TicketState {
    Table,
    TicketId,
    HeadEntryId,
    StatusId,
    EmployeeId,
    OwnerTier,
    QueueTier,
    UpdatedOn,
}
