use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251101_000002_employee::Employee, m20251101_000004_ticket_status::TicketStatus,
    m20251101_000005_ticket::Ticket,
};

static IDX_TICKET_HISTORY_TICKET_ID: &str = "idx-ticket_history-ticket_id";
static IDX_TICKET_HISTORY_TARGET_TIER: &str = "idx-ticket_history-target_tier";
static FK_TICKET_HISTORY_TICKET_ID: &str = "fk-ticket_history-ticket_id";
static FK_TICKET_HISTORY_EMPLOYEE_ID: &str = "fk-ticket_history-employee_id";
static FK_TICKET_HISTORY_STATUS_ID: &str = "fk-ticket_history-status_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TicketHistory::Table)
                    .if_not_exists()
                    .col(pk_auto(TicketHistory::Id))
                    .col(integer(TicketHistory::TicketId))
                    .col(string_len(TicketHistory::Event, 16))
                    .col(integer(TicketHistory::StatusId))
                    .col(integer_null(TicketHistory::EmployeeId))
                    .col(integer_null(TicketHistory::TargetTier))
                    .col(string_len(TicketHistory::Description, 250))
                    .col(date(TicketHistory::ModifiedOn))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TICKET_HISTORY_TICKET_ID)
                    .table(TicketHistory::Table)
                    .col(TicketHistory::TicketId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_TICKET_HISTORY_TARGET_TIER)
                    .table(TicketHistory::Table)
                    .col(TicketHistory::TargetTier)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TICKET_HISTORY_TICKET_ID)
                    .from_tbl(TicketHistory::Table)
                    .from_col(TicketHistory::TicketId)
                    .to_tbl(Ticket::Table)
                    .to_col(Ticket::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TICKET_HISTORY_EMPLOYEE_ID)
                    .from_tbl(TicketHistory::Table)
                    .from_col(TicketHistory::EmployeeId)
                    .to_tbl(Employee::Table)
                    .to_col(Employee::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .to_owned(),
            )
            .await?;

        manager
            .create_foreign_key(
                ForeignKey::create()
                    .name(FK_TICKET_HISTORY_STATUS_ID)
                    .from_tbl(TicketHistory::Table)
                    .from_col(TicketHistory::StatusId)
                    .to_tbl(TicketStatus::Table)
                    .to_col(TicketStatus::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        for fk in [
            FK_TICKET_HISTORY_STATUS_ID,
            FK_TICKET_HISTORY_EMPLOYEE_ID,
            FK_TICKET_HISTORY_TICKET_ID,
        ] {
            manager
                .drop_foreign_key(
                    ForeignKey::drop()
                        .name(fk)
                        .table(TicketHistory::Table)
                        .to_owned(),
                )
                .await?;
        }

        for idx in [IDX_TICKET_HISTORY_TARGET_TIER, IDX_TICKET_HISTORY_TICKET_ID] {
            manager
                .drop_index(
                    Index::drop()
                        .name(idx)
                        .table(TicketHistory::Table)
                        .to_owned(),
                )
                .await?;
        }

        manager
            .drop_table(Table::drop().table(TicketHistory::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum TicketHistory {
    Table,
    Id,
    TicketId,
    Event,
    StatusId,
    EmployeeId,
    TargetTier,
    Description,
    ModifiedOn,
}
