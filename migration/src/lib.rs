pub use sea_orm_migration::prelude::*;

mod m20251101_000001_customer;
mod m20251101_000002_employee;
mod m20251101_000003_administrator;
mod m20251101_000004_ticket_status;
mod m20251101_000005_ticket;
mod m20251101_000006_ticket_history;
mod m20251101_000007_ticket_state;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251101_000001_customer::Migration),
            Box::new(m20251101_000002_employee::Migration),
            Box::new(m20251101_000003_administrator::Migration),
            Box::new(m20251101_000004_ticket_status::Migration),
            Box::new(m20251101_000005_ticket::Migration),
            Box::new(m20251101_000006_ticket_history::Migration),
            Box::new(m20251101_000007_ticket_state::Migration),
        ]
    }
}
