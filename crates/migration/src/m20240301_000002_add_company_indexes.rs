use sea_orm_migration::prelude::*;

use crate::m20240301_000001_create_company::Company;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Company: composite unique (owner, name); backs the duplicate check on create
        manager
            .create_index(
                Index::create()
                    .name("uniq_company_owner_name")
                    .table(Company::Table)
                    .col(Company::Owner)
                    .col(Company::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Company: listing order
        manager
            .create_index(
                Index::create()
                    .name("idx_company_created_at")
                    .table(Company::Table)
                    .col(Company::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("uniq_company_owner_name").table(Company::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_company_created_at").table(Company::Table).to_owned())
            .await
    }
}
