use chrono::{TimeZone, Utc};
use sea_orm::ActiveValue::Set;
use tracing::error;
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_uuid_v7},
    company::entities::{Company, CompanyList, CustomerOverlay},
};
use crate::entity::{
    companies::{ActiveModel as CompanyActiveModel, Model as CompanyModel},
    customer_companies::Model as CustomerCompanyModel,
    list_companies::Model as ListCompanyModel,
    lists::Model as ListModel,
};

impl From<CompanyModel> for Company {
    fn from(model: CompanyModel) -> Self {
        Company {
            id: Some(model.id.to_string()),
            tenant_id: model.tenant_id,
            name: model.name,
            legal_name: model.legal_name,
            domain: model.domain,
            country: model.country,
            region: model.region,
            address: model.address,
            latitude: model.latitude,
            longitude: model.longitude,
            employees: model.employees,
            categories: model.categories,
            technologies: model.technologies,
            email: model.email,
            phone: model.phone,
            linkedin_url: model.linkedin_url,
            twitter_url: model.twitter_url,
            created_at: Some(Utc.from_utc_datetime(&model.created_at)),
            updated_at: Some(Utc.from_utc_datetime(&model.updated_at)),
        }
    }
}

impl From<CustomerCompanyModel> for CustomerOverlay {
    fn from(model: CustomerCompanyModel) -> Self {
        CustomerOverlay {
            score: model.score,
            status: model.status,
            notes: model.notes,
            updated_at: model.updated_at.and_utc(),
        }
    }
}

pub fn to_company_list(membership: ListCompanyModel, list: ListModel) -> CompanyList {
    CompanyList {
        id: list.id,
        name: list.name,
        added_at: membership.added_at.and_utc(),
    }
}

/// Parses the canonical id of a record about to be written.
pub fn parse_company_id(id: Option<&str>) -> Result<Uuid, CoreError> {
    match id {
        None => Ok(generate_uuid_v7()),
        Some(id) => Uuid::parse_str(id).map_err(|e| {
            error!("Invalid company id {}: {}", id, e);
            CoreError::Validation(format!("invalid company id '{id}'"))
        }),
    }
}

pub fn to_active_model(company: Company) -> Result<CompanyActiveModel, CoreError> {
    let now = Utc::now();

    Ok(CompanyActiveModel {
        id: Set(parse_company_id(company.id.as_deref())?),
        tenant_id: Set(company.tenant_id),
        name: Set(company.name),
        legal_name: Set(company.legal_name),
        domain: Set(company.domain),
        country: Set(company.country),
        region: Set(company.region),
        address: Set(company.address),
        latitude: Set(company.latitude),
        longitude: Set(company.longitude),
        employees: Set(company.employees),
        categories: Set(company.categories),
        technologies: Set(company.technologies),
        email: Set(company.email),
        phone: Set(company.phone),
        linkedin_url: Set(company.linkedin_url),
        twitter_url: Set(company.twitter_url),
        created_at: Set(company.created_at.unwrap_or(now).naive_utc()),
        updated_at: Set(company.updated_at.unwrap_or(now).naive_utc()),
    })
}
