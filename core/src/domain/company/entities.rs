use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_uuid_v7;

use super::value_objects::{CreateCompanyInput, UpdateCompanyInput};

/// A company row as the storage collaborator hands it back.
///
/// The canonical identifier is string-typed and may be missing on rows that
/// did not come from the primary table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Company {
    pub id: Option<String>,
    pub tenant_id: Uuid,
    pub name: Option<String>,
    pub legal_name: Option<String>,
    pub domain: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub employees: Option<i64>,
    pub categories: Vec<String>,
    pub technologies: Vec<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Company {
    pub fn new(tenant_id: Uuid, input: CreateCompanyInput) -> Self {
        let now = Utc::now();

        Self {
            id: Some(generate_uuid_v7().to_string()),
            tenant_id,
            name: Some(input.name),
            legal_name: input.legal_name,
            domain: input.domain,
            country: input.country,
            region: input.region,
            address: input.address,
            latitude: input.latitude,
            longitude: input.longitude,
            employees: input.employees,
            categories: input.categories,
            technologies: input.technologies,
            email: input.email,
            phone: input.phone,
            linkedin_url: input.linkedin_url,
            twitter_url: input.twitter_url,
            created_at: Some(now),
            updated_at: Some(now),
        }
    }

    pub fn update(&mut self, input: UpdateCompanyInput) {
        if let Some(name) = input.name {
            self.name = Some(name);
        }
        if let Some(legal_name) = input.legal_name {
            self.legal_name = Some(legal_name);
        }
        if let Some(domain) = input.domain {
            self.domain = Some(domain);
        }
        if let Some(country) = input.country {
            self.country = Some(country);
        }
        if let Some(region) = input.region {
            self.region = Some(region);
        }
        if let Some(address) = input.address {
            self.address = Some(address);
        }
        if let Some(latitude) = input.latitude {
            self.latitude = Some(latitude);
        }
        if let Some(longitude) = input.longitude {
            self.longitude = Some(longitude);
        }
        if let Some(employees) = input.employees {
            self.employees = Some(employees);
        }
        if let Some(categories) = input.categories {
            self.categories = categories;
        }
        if let Some(technologies) = input.technologies {
            self.technologies = technologies;
        }
        if let Some(email) = input.email {
            self.email = Some(email);
        }
        if let Some(phone) = input.phone {
            self.phone = Some(phone);
        }
        if let Some(linkedin_url) = input.linkedin_url {
            self.linkedin_url = Some(linkedin_url);
        }
        if let Some(twitter_url) = input.twitter_url {
            self.twitter_url = Some(twitter_url);
        }
        self.updated_at = Some(Utc::now());
    }
}

/// External shape handed to API consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyItem {
    /// Canonical identifier, carried through unchanged.
    pub uuid: Option<String>,
    /// Lossy numeric surrogate kept for legacy consumers; not unique.
    pub id: u64,
    pub name: String,
    pub legal_name: Option<String>,
    pub domain: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub employees: Option<i64>,
    pub categories: Vec<String>,
    pub technologies: Vec<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A named list a company has been added to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyList {
    pub id: Uuid,
    pub name: String,
    pub added_at: DateTime<Utc>,
}

/// Per-tenant scoring the tenant keeps on top of the shared record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerOverlay {
    pub score: Option<f64>,
    pub status: Option<String>,
    pub notes: Option<String>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDetail {
    #[serde(flatten)]
    pub company: CompanyItem,
    pub lists: Option<Vec<CompanyList>>,
    pub customer: Option<CustomerOverlay>,
    #[schema(value_type = Option<Object>)]
    pub metadata: Option<serde_json::Value>,
}
