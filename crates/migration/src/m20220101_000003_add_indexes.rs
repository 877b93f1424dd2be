use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Invoices: index on comp_code for the per-company id lookup
        manager
            .create_index(
                Index::create()
                    .name("idx_invoices_comp_code")
                    .table(Invoices::Table)
                    .col(Invoices::CompCode)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        // Companies: index on name to back the ORDER BY name listing
        manager
            .create_index(
                Index::create()
                    .name("idx_companies_name")
                    .table(Companies::Table)
                    .col(Companies::Name)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_invoices_comp_code").table(Invoices::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_companies_name").table(Companies::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Invoices { Table, CompCode }

#[derive(DeriveIden)]
enum Companies { Table, Name }
