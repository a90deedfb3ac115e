use models::errors::ModelError;
use thiserror::Error;

/// Business errors for company workflows
#[derive(Debug, Error)]
pub enum CompanyError {
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("already exist")]
    Conflict,
    #[error("company not found")]
    NotFound,
    #[error("repository error: {0}")]
    Repository(String),
}

impl CompanyError {
    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            CompanyError::Validation(_) => 1001,
            CompanyError::Conflict => 1002,
            CompanyError::NotFound => 1003,
            CompanyError::Repository(_) => 1200,
        }
    }

    /// Storage failures, as opposed to expected business rejections.
    pub fn is_unexpected(&self) -> bool {
        matches!(self, CompanyError::Repository(_))
    }
}

impl From<ModelError> for CompanyError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(msg) => CompanyError::Validation(msg),
            ModelError::Conflict(_) => CompanyError::Conflict,
            ModelError::NotFound(_) => CompanyError::NotFound,
            ModelError::Db(msg) => CompanyError::Repository(msg),
        }
    }
}

impl From<sea_orm::DbErr> for CompanyError {
    fn from(e: sea_orm::DbErr) -> Self {
        ModelError::from(e).into()
    }
}
