//! Migrator registering the company schema.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240301_000001_create_company;
mod m20240301_000002_add_company_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_company::Migration),
            // Indexes should always be applied last
            Box::new(m20240301_000002_add_company_indexes::Migration),
        ]
    }
}
