use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Domain company (business view)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: Uuid,
    pub owner: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub company_type: String,
    pub website: String,
    pub no_of_employees: i32,
    pub funding_source: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Creation input; the repository assigns id and timestamps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewCompany {
    pub owner: Uuid,
    pub name: String,
    #[serde(rename = "type", default)]
    pub company_type: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub no_of_employees: i32,
    #[serde(default)]
    pub funding_source: String,
}

impl NewCompany {
    pub fn new(owner: Uuid, name: impl Into<String>) -> Self {
        Self { owner, name: name.into(), ..Default::default() }
    }
}

/// Partial update. `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyPatch {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub company_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_of_employees: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub funding_source: Option<String>,
}

impl CompanyPatch {
    pub fn is_empty(&self) -> bool {
        self.company_type.is_none()
            && self.website.is_none()
            && self.name.is_none()
            && self.no_of_employees.is_none()
            && self.funding_source.is_none()
    }

    /// Overwrite each field of `company` that is present in the patch.
    pub fn apply(self, company: &mut Company) {
        if let Some(company_type) = self.company_type {
            company.company_type = company_type;
        }
        if let Some(website) = self.website {
            company.website = website;
        }
        if let Some(name) = self.name {
            company.name = name;
        }
        if let Some(n) = self.no_of_employees {
            company.no_of_employees = n;
        }
        if let Some(funding_source) = self.funding_source {
            company.funding_source = funding_source;
        }
    }
}

/// Listing criteria. Set fields are combined with AND; an empty filter matches all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyFilter {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub company_type: Option<String>,
}

impl CompanyFilter {
    pub fn by_owner(owner: Uuid) -> Self { Self::default().owner(owner) }
    pub fn by_name(name: impl Into<String>) -> Self { Self::default().name(name) }
    pub fn by_type(company_type: impl Into<String>) -> Self { Self::default().company_type(company_type) }

    pub fn owner(mut self, owner: Uuid) -> Self {
        self.owner = Some(owner);
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn company_type(mut self, company_type: impl Into<String>) -> Self {
        self.company_type = Some(company_type.into());
        self
    }

    pub fn matches(&self, company: &Company) -> bool {
        self.owner.map_or(true, |o| company.owner == o)
            && self.name.as_deref().map_or(true, |n| company.name == n)
            && self.company_type.as_deref().map_or(true, |t| company.company_type == t)
    }
}
