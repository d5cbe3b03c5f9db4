use sea_orm_migration::{prelude::*, schema::*};

/// Fixed status vocabulary, ids match `entity::sea_orm_active_enums::Status`
const STATUSES: [(i32, &str); 3] = [(1, "En espera"), (2, "En Proceso"), (3, "Resuelto")];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TicketStatus::Table)
                    .if_not_exists()
                    .col(integer(TicketStatus::Id).primary_key())
                    .col(string_len(TicketStatus::Name, 50))
                    .to_owned(),
            )
            .await?;

        let mut insert = Query::insert();
        insert
            .into_table(TicketStatus::Table)
            .columns([TicketStatus::Id, TicketStatus::Name]);
        for (id, name) in STATUSES {
            insert.values_panic([id.into(), name.into()]);
        }

        manager.exec_stmt(insert.to_owned()).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TicketStatus::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum TicketStatus {
    Table,
    Id,
    Name,
}
