use std::sync::Arc;

use tracing::{debug, dispatcher, error, info, info_span, Dispatch, Instrument, Span};
use uuid::Uuid;

use super::domain::{Company, CompanyFilter, CompanyPatch, NewCompany};
use super::errors::CompanyError;
use super::repository::CompanyRepository;
use crate::pagination::{Paginated, Pagination};

/// Company business service independent of web framework.
///
/// Holds no state of its own besides the repository and an optional logger;
/// share it behind an `Arc` across concurrent callers.
pub struct CompanyService<R: CompanyRepository> {
    repo: Arc<R>,
    logger: Option<Dispatch>,
}

impl<R: CompanyRepository> CompanyService<R> {
    /// Build a service that logs through whatever dispatcher is current at each call,
    /// so a global subscriber installed after construction is still picked up.
    pub fn new(repo: Arc<R>) -> Self { Self { repo, logger: None } }

    /// Build a service that always logs through `logger`.
    pub fn with_logger(repo: Arc<R>, logger: Dispatch) -> Self { Self { repo, logger: Some(logger) } }

    fn in_logger<T>(&self, f: impl FnOnce() -> T) -> T {
        match &self.logger {
            Some(logger) => dispatcher::with_default(logger, f),
            None => f(),
        }
    }

    /// Operation span owned by the service's logger.
    fn span(&self, make: impl FnOnce() -> Span) -> Span {
        self.in_logger(make)
    }

    /// Log storage failures; business rejections pass through silently.
    fn failed(&self, operation: &'static str, err: CompanyError) -> CompanyError {
        if err.is_unexpected() {
            self.in_logger(|| error!(operation, error = %err, code = err.code(), "company_repository_failure"));
        }
        err
    }

    /// Fetch one company.
    ///
    /// # Examples
    /// ```
    /// use service::company::{CompanyService, CompanyError, repository::mock::MockCompanyRepository};
    /// use std::sync::Arc;
    /// let svc = CompanyService::new(Arc::new(MockCompanyRepository::default()));
    /// let res = tokio_test::block_on(svc.get_company_by_id(uuid::Uuid::new_v4()));
    /// assert!(matches!(res, Err(CompanyError::NotFound)));
    /// ```
    pub async fn get_company_by_id(&self, id: Uuid) -> Result<Company, CompanyError> {
        let span = self.span(|| info_span!("get_company_by_id", company_id = %id));
        async move {
            self.repo
                .get_by_id(id)
                .await
                .map_err(|e| self.failed("get_company_by_id", e))?
                .ok_or(CompanyError::NotFound)
        }
        .instrument(span)
        .await
    }

    pub async fn get_company(&self, filter: &CompanyFilter) -> Result<Vec<Company>, CompanyError> {
        let span = self.span(|| info_span!("get_company", filter = ?filter));
        async move { self.repo.get_by(filter).await.map_err(|e| self.failed("get_company", e)) }
            .instrument(span)
            .await
    }

    pub async fn get_all_company(&self, pagination: Pagination) -> Result<Paginated<Company>, CompanyError> {
        let span = self.span(|| info_span!("get_all_company", page = pagination.page, per_page = pagination.per_page));
        async move { self.repo.get(pagination).await.map_err(|e| self.failed("get_all_company", e)) }
            .instrument(span)
            .await
    }

    /// Create a company unless the owner already has one with the same name.
    ///
    /// # Examples
    /// ```
    /// use service::company::{CompanyService, CompanyError, NewCompany, repository::mock::MockCompanyRepository};
    /// use std::sync::Arc;
    /// let svc = CompanyService::new(Arc::new(MockCompanyRepository::default()));
    /// let owner = uuid::Uuid::new_v4();
    /// let acme = tokio_test::block_on(svc.create_company(NewCompany::new(owner, "Acme"))).unwrap();
    /// assert_eq!(acme.name, "Acme");
    /// let again = tokio_test::block_on(svc.create_company(NewCompany::new(owner, "Acme")));
    /// assert!(matches!(again, Err(CompanyError::Conflict)));
    /// ```
    pub async fn create_company(&self, company: NewCompany) -> Result<Company, CompanyError> {
        let span = self.span(|| info_span!("create_company", owner = %company.owner, name = %company.name));
        async move {
            let existing = self
                .repo
                .get_by(&CompanyFilter::by_owner(company.owner).name(company.name.as_str()))
                .await
                .map_err(|e| self.failed("create_company", e))?;
            if !existing.is_empty() {
                self.in_logger(|| debug!("company_already_exists"));
                return Err(CompanyError::Conflict);
            }

            let created = self.repo.insert(company).await.map_err(|e| self.failed("create_company", e))?;
            self.in_logger(|| info!(company_id = %created.id, "company_created"));
            Ok(created)
        }
        .instrument(span)
        .await
    }

    /// Delete by id. Deleting an unknown id succeeds.
    pub async fn delete_company(&self, id: Uuid) -> Result<(), CompanyError> {
        let span = self.span(|| info_span!("delete_company", company_id = %id));
        async move {
            let removed = self.repo.delete(id).await.map_err(|e| self.failed("delete_company", e))?;
            if removed {
                self.in_logger(|| info!("company_deleted"));
            } else {
                self.in_logger(|| debug!("company_delete_noop"));
            }
            Ok(())
        }
        .instrument(span)
        .await
    }

    /// Apply the fields present in `patch` to the stored company and save it.
    pub async fn update_company(&self, id: Uuid, patch: CompanyPatch) -> Result<Company, CompanyError> {
        let span = self.span(|| info_span!("update_company", company_id = %id));
        async move {
            let mut company = self
                .repo
                .get_by_id(id)
                .await
                .map_err(|e| self.failed("update_company", e))?
                .ok_or(CompanyError::NotFound)?;
            patch.apply(&mut company);

            let updated = self.repo.save(&company).await.map_err(|e| self.failed("update_company", e))?;
            self.in_logger(|| info!("company_updated"));
            Ok(updated)
        }
        .instrument(span)
        .await
    }
}
