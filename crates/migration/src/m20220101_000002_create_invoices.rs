//! Create `invoices` table with FK to `companies`.
//!
//! Deleting a company cascades to its invoices.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Invoices::Table)
                    .if_not_exists()
                    .col(integer(Invoices::Id).primary_key().auto_increment())
                    .col(string_len(Invoices::CompCode, 128).not_null())
                    .col(double(Invoices::Amt).not_null())
                    .col(boolean(Invoices::Paid).not_null().default(false))
                    .col(date(Invoices::AddDate).not_null().default(Expr::current_date()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invoices_comp_code")
                            .from(Invoices::Table, Invoices::CompCode)
                            .to(Companies::Table, Companies::Code)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Invoices::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Invoices { Table, Id, CompCode, Amt, Paid, AddDate }

#[derive(DeriveIden)]
enum Companies { Table, Code }
