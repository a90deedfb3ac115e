use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use uuid::Uuid;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "company")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub owner: Uuid,
    pub name: String,
    pub company_type: String,
    pub website: String,
    pub no_of_employees: i32,
    pub funding_source: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("name required".into()));
    }
    validate_len("name", name, MAX_NAME_LEN)
}

/// Column widths of the `company` table.
pub const MAX_NAME_LEN: usize = 128;
pub const MAX_COMPANY_TYPE_LEN: usize = 64;
pub const MAX_WEBSITE_LEN: usize = 256;
pub const MAX_FUNDING_SOURCE_LEN: usize = 128;

fn validate_len(field: &str, value: &str, max: usize) -> Result<(), ModelError> {
    if value.chars().count() > max {
        return Err(ModelError::Validation(format!("{field} must be at most {max} characters")));
    }
    Ok(())
}

/// Check the free-text columns against their widths so oversized input is a
/// validation error rather than a database failure.
pub fn validate_text_fields(company_type: &str, website: &str, funding_source: &str) -> Result<(), ModelError> {
    validate_len("type", company_type, MAX_COMPANY_TYPE_LEN)?;
    validate_len("website", website, MAX_WEBSITE_LEN)?;
    validate_len("funding_source", funding_source, MAX_FUNDING_SOURCE_LEN)
}

pub fn validate_no_of_employees(n: i32) -> Result<(), ModelError> {
    if n < 0 {
        return Err(ModelError::Validation("no_of_employees must be >= 0".into()));
    }
    Ok(())
}

/// Insert a company row. The id and timestamps are assigned here.
pub async fn create(
    db: &DatabaseConnection,
    owner: Uuid,
    name: &str,
    company_type: &str,
    website: &str,
    no_of_employees: i32,
    funding_source: &str,
) -> Result<Model, ModelError> {
    validate_name(name)?;
    validate_text_fields(company_type, website, funding_source)?;
    validate_no_of_employees(no_of_employees)?;
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        owner: Set(owner),
        name: Set(name.to_string()),
        company_type: Set(company_type.to_string()),
        website: Set(website.to_string()),
        no_of_employees: Set(no_of_employees),
        funding_source: Set(funding_source.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(am.insert(db).await?)
}

/// Overwrite the mutable columns of an existing row and bump `updated_at`.
///
/// `id`, `owner` and `created_at` are never rewritten.
pub async fn save(db: &DatabaseConnection, company: &Model) -> Result<Model, ModelError> {
    validate_name(&company.name)?;
    validate_text_fields(&company.company_type, &company.website, &company.funding_source)?;
    validate_no_of_employees(company.no_of_employees)?;
    let mut am: ActiveModel = Entity::find_by_id(company.id)
        .one(db)
        .await?
        .ok_or_else(|| ModelError::NotFound("company not found".into()))?
        .into();
    am.name = Set(company.name.clone());
    am.company_type = Set(company.company_type.clone());
    am.website = Set(company.website.clone());
    am.no_of_employees = Set(company.no_of_employees);
    am.funding_source = Set(company.funding_source.clone());
    am.updated_at = Set(Utc::now().into());
    Ok(am.update(db).await?)
}

/// Hard-delete a company. Returns whether a row was removed.
pub async fn hard_delete(db: &DatabaseConnection, id: Uuid) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_name_is_rejected() {
        assert!(matches!(validate_name("   "), Err(ModelError::Validation(_))));
        assert!(validate_name("Acme").is_ok());
    }

    #[test]
    fn overlong_name_is_rejected() {
        let long = "x".repeat(129);
        assert!(validate_name(&long).is_err());
        assert!(validate_name(&"x".repeat(128)).is_ok());
    }

    #[test]
    fn overlong_text_fields_are_rejected() {
        let website = "w".repeat(MAX_WEBSITE_LEN + 1);
        assert!(matches!(validate_text_fields("", &website, ""), Err(ModelError::Validation(_))));
        assert!(validate_text_fields("", &"w".repeat(MAX_WEBSITE_LEN), "").is_ok());
        assert!(validate_text_fields(&"t".repeat(MAX_COMPANY_TYPE_LEN + 1), "", "").is_err());
        assert!(validate_text_fields("", "", &"f".repeat(MAX_FUNDING_SOURCE_LEN + 1)).is_err());
    }

    #[test]
    fn negative_headcount_is_rejected() {
        assert!(validate_no_of_employees(-1).is_err());
        assert!(validate_no_of_employees(0).is_ok());
    }
}
