//! Create `company` table.
//!
//! `owner` references a user managed outside this schema, so no foreign key.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Company::Table)
                    .if_not_exists()
                    .col(uuid(Company::Id).primary_key())
                    .col(uuid(Company::Owner).not_null())
                    .col(string_len(Company::Name, 128).not_null())
                    .col(string_len(Company::CompanyType, 64).not_null())
                    .col(string_len(Company::Website, 256).not_null())
                    .col(integer(Company::NoOfEmployees).not_null().default(0))
                    .col(string_len(Company::FundingSource, 128).not_null())
                    .col(timestamp_with_time_zone(Company::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Company::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Company::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Company {
    Table,
    Id,
    Owner,
    Name,
    CompanyType,
    Website,
    NoOfEmployees,
    FundingSource,
    CreatedAt,
    UpdatedAt,
}
