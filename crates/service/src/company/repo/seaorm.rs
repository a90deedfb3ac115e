use chrono::Utc;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Select};
use uuid::Uuid;

use models::company;

use crate::company::domain::{Company, CompanyFilter, NewCompany};
use crate::company::errors::CompanyError;
use crate::company::repository::CompanyRepository;
use crate::pagination::{Paginated, Pagination};

pub struct SeaOrmCompanyRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmCompanyRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

fn to_domain(m: company::Model) -> Company {
    Company {
        id: m.id,
        owner: m.owner,
        name: m.name,
        company_type: m.company_type,
        website: m.website,
        no_of_employees: m.no_of_employees,
        funding_source: m.funding_source,
        created_at: m.created_at.with_timezone(&Utc),
        updated_at: m.updated_at.with_timezone(&Utc),
    }
}

fn to_model(c: &Company) -> company::Model {
    company::Model {
        id: c.id,
        owner: c.owner,
        name: c.name.clone(),
        company_type: c.company_type.clone(),
        website: c.website.clone(),
        no_of_employees: c.no_of_employees,
        funding_source: c.funding_source.clone(),
        created_at: c.created_at.into(),
        updated_at: c.updated_at.into(),
    }
}

fn ordered(q: Select<company::Entity>) -> Select<company::Entity> {
    q.order_by_asc(company::Column::CreatedAt).order_by_asc(company::Column::Id)
}

#[async_trait::async_trait]
impl CompanyRepository for SeaOrmCompanyRepository {
    async fn get_by_id(&self, id: Uuid) -> Result<Option<Company>, CompanyError> {
        let res = company::Entity::find_by_id(id).one(&self.db).await?;
        Ok(res.map(to_domain))
    }

    async fn get_by(&self, filter: &CompanyFilter) -> Result<Vec<Company>, CompanyError> {
        let mut q = company::Entity::find();
        if let Some(owner) = filter.owner {
            q = q.filter(company::Column::Owner.eq(owner));
        }
        if let Some(name) = &filter.name {
            q = q.filter(company::Column::Name.eq(name.as_str()));
        }
        if let Some(company_type) = &filter.company_type {
            q = q.filter(company::Column::CompanyType.eq(company_type.as_str()));
        }
        let rows = ordered(q).all(&self.db).await?;
        Ok(rows.into_iter().map(to_domain).collect())
    }

    async fn get(&self, pagination: Pagination) -> Result<Paginated<Company>, CompanyError> {
        let (page_idx, per_page) = pagination.normalize();
        // SeaORM's paginate uses 0-based page index internally via fetch_page
        let paginator = ordered(company::Entity::find()).paginate(&self.db, per_page);
        let total_items = paginator.num_items().await?;
        let rows = paginator.fetch_page(page_idx).await?;
        Ok(Paginated::new(rows.into_iter().map(to_domain).collect(), pagination, total_items))
    }

    async fn insert(&self, c: NewCompany) -> Result<Company, CompanyError> {
        let created = company::create(
            &self.db,
            c.owner,
            &c.name,
            &c.company_type,
            &c.website,
            c.no_of_employees,
            &c.funding_source,
        )
        .await?;
        Ok(to_domain(created))
    }

    async fn save(&self, c: &Company) -> Result<Company, CompanyError> {
        let saved = company::save(&self.db, &to_model(c)).await?;
        Ok(to_domain(saved))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, CompanyError> {
        Ok(company::hard_delete(&self.db, id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn company_crud_repository() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await else { return Ok(()) };
        let repo = SeaOrmCompanyRepository::new(db);

        let owner = Uuid::new_v4();
        let name = format!("repo_{}", Uuid::new_v4());
        let created = repo
            .insert(NewCompany { website: "acme.io".into(), no_of_employees: 3, ..NewCompany::new(owner, &name) })
            .await?;
        assert_eq!(created.owner, owner);
        assert_eq!(created.website, "acme.io");

        let found = repo.get_by_id(created.id).await?.unwrap();
        assert_eq!(found.id, created.id);

        let matching = repo.get_by(&CompanyFilter::by_owner(owner).name(&name)).await?;
        assert_eq!(matching.len(), 1);
        assert!(repo.get_by(&CompanyFilter::by_owner(owner).name("other")).await?.is_empty());

        let mut changed = found.clone();
        changed.funding_source = "series-a".into();
        let saved = repo.save(&changed).await?;
        assert_eq!(saved.funding_source, "series-a");
        assert_eq!(saved.website, "acme.io");

        let too_long = repo.insert(NewCompany { website: "w".repeat(300), ..NewCompany::new(owner, "long-site") }).await;
        assert!(matches!(too_long, Err(CompanyError::Validation(_))));

        let dup = repo.insert(NewCompany::new(owner, &name)).await;
        assert!(matches!(dup, Err(CompanyError::Conflict)));

        assert!(repo.delete(created.id).await?);
        assert!(repo.get_by_id(created.id).await?.is_none());
        assert!(!repo.delete(created.id).await?);
        Ok(())
    }

    #[tokio::test]
    async fn company_pagination_repository() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await else { return Ok(()) };
        let repo = SeaOrmCompanyRepository::new(db);

        let owner = Uuid::new_v4();
        let mut ids = Vec::new();
        for i in 0..3 {
            let c = repo.insert(NewCompany::new(owner, format!("page_{}_{}", i, Uuid::new_v4()))).await?;
            ids.push(c.id);
        }

        let page = repo.get(Pagination { page: 1, per_page: 2 }).await?;
        assert_eq!(page.per_page, 2);
        assert!(page.items.len() <= 2);
        assert!(page.total_items >= 3);
        assert_eq!(page.total_pages, page.total_items.div_ceil(2));

        for id in ids {
            repo.delete(id).await?;
        }
        Ok(())
    }
}
