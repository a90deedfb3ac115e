use async_trait::async_trait;
use uuid::Uuid;

use super::domain::{Company, CompanyFilter, NewCompany};
use super::errors::CompanyError;
use crate::pagination::{Paginated, Pagination};

/// Repository abstraction for company persistence.
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Company>, CompanyError>;
    async fn get_by(&self, filter: &CompanyFilter) -> Result<Vec<Company>, CompanyError>;
    /// One page ordered by creation time.
    async fn get(&self, pagination: Pagination) -> Result<Paginated<Company>, CompanyError>;

    /// Store a new company; the repository assigns id and timestamps.
    async fn insert(&self, company: NewCompany) -> Result<Company, CompanyError>;
    /// Overwrite the mutable fields of an existing company.
    async fn save(&self, company: &Company) -> Result<Company, CompanyError>;
    /// Returns `false` when there was nothing to delete.
    async fn delete(&self, id: Uuid) -> Result<bool, CompanyError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use chrono::Utc;
    use models::company::{validate_name, validate_no_of_employees, validate_text_fields};

    #[derive(Default)]
    pub struct MockCompanyRepository {
        companies: Mutex<Vec<Company>>, // insertion order == creation order
        writes: AtomicUsize,
    }

    impl MockCompanyRepository {
        /// Number of insert/save/delete calls that reached the repository.
        pub fn writes(&self) -> usize {
            self.writes.load(Ordering::SeqCst)
        }

        pub fn len(&self) -> usize {
            self.companies.lock().unwrap().len()
        }

        pub fn is_empty(&self) -> bool {
            self.len() == 0
        }
    }

    #[async_trait]
    impl CompanyRepository for MockCompanyRepository {
        async fn get_by_id(&self, id: Uuid) -> Result<Option<Company>, CompanyError> {
            let companies = self.companies.lock().unwrap();
            Ok(companies.iter().find(|c| c.id == id).cloned())
        }

        async fn get_by(&self, filter: &CompanyFilter) -> Result<Vec<Company>, CompanyError> {
            let companies = self.companies.lock().unwrap();
            Ok(companies.iter().filter(|c| filter.matches(c)).cloned().collect())
        }

        async fn get(&self, pagination: Pagination) -> Result<Paginated<Company>, CompanyError> {
            let companies = self.companies.lock().unwrap();
            let (_, per_page) = pagination.normalize();
            let items = companies
                .iter()
                .skip(pagination.offset() as usize)
                .take(per_page as usize)
                .cloned()
                .collect();
            Ok(Paginated::new(items, pagination, companies.len() as u64))
        }

        async fn insert(&self, company: NewCompany) -> Result<Company, CompanyError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            validate_name(&company.name)?;
            validate_text_fields(&company.company_type, &company.website, &company.funding_source)?;
            validate_no_of_employees(company.no_of_employees)?;
            let mut companies = self.companies.lock().unwrap();
            if companies.iter().any(|c| c.owner == company.owner && c.name == company.name) {
                return Err(CompanyError::Conflict);
            }
            let now = Utc::now();
            let created = Company {
                id: Uuid::new_v4(),
                owner: company.owner,
                name: company.name,
                company_type: company.company_type,
                website: company.website,
                no_of_employees: company.no_of_employees,
                funding_source: company.funding_source,
                created_at: now,
                updated_at: now,
            };
            companies.push(created.clone());
            Ok(created)
        }

        async fn save(&self, company: &Company) -> Result<Company, CompanyError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            validate_name(&company.name)?;
            validate_text_fields(&company.company_type, &company.website, &company.funding_source)?;
            validate_no_of_employees(company.no_of_employees)?;
            let mut companies = self.companies.lock().unwrap();
            if companies
                .iter()
                .any(|c| c.id != company.id && c.owner == company.owner && c.name == company.name)
            {
                return Err(CompanyError::Conflict);
            }
            let stored = companies
                .iter_mut()
                .find(|c| c.id == company.id)
                .ok_or(CompanyError::NotFound)?;
            stored.name = company.name.clone();
            stored.company_type = company.company_type.clone();
            stored.website = company.website.clone();
            stored.no_of_employees = company.no_of_employees;
            stored.funding_source = company.funding_source.clone();
            stored.updated_at = Utc::now();
            Ok(stored.clone())
        }

        async fn delete(&self, id: Uuid) -> Result<bool, CompanyError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            let mut companies = self.companies.lock().unwrap();
            let before = companies.len();
            companies.retain(|c| c.id != id);
            Ok(companies.len() < before)
        }
    }
}
