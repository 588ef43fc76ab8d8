use serde::{Deserialize, Serialize};
use strategy_forge_core::domain::company::value_objects::{CreateCompanyInput, UpdateCompanyInput};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCompanyValidator {
    #[validate(length(min = 1, max = 255, message = "name is required"))]
    pub name: String,

    #[serde(default)]
    pub legal_name: Option<String>,

    #[serde(default)]
    #[validate(length(max = 255))]
    pub domain: Option<String>,

    #[serde(default)]
    pub country: Option<String>,

    #[serde(default)]
    pub region: Option<String>,

    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,

    #[serde(default)]
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,

    #[serde(default)]
    #[validate(range(min = 0, message = "employees cannot be negative"))]
    pub employees: Option<i64>,

    #[serde(default)]
    pub categories: Vec<String>,

    #[serde(default)]
    pub technologies: Vec<String>,

    #[serde(default)]
    #[validate(email)]
    pub email: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    #[validate(url)]
    pub linkedin_url: Option<String>,

    #[serde(default)]
    #[validate(url)]
    pub twitter_url: Option<String>,
}

impl From<CreateCompanyValidator> for CreateCompanyInput {
    fn from(payload: CreateCompanyValidator) -> Self {
        CreateCompanyInput {
            name: payload.name,
            legal_name: payload.legal_name,
            domain: payload.domain,
            country: payload.country,
            region: payload.region,
            address: payload.address,
            latitude: payload.latitude,
            longitude: payload.longitude,
            employees: payload.employees,
            categories: payload.categories,
            technologies: payload.technologies,
            email: payload.email,
            phone: payload.phone,
            linkedin_url: payload.linkedin_url,
            twitter_url: payload.twitter_url,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateCompanyValidator {
    #[serde(default)]
    #[validate(length(min = 1, max = 255, message = "name cannot be empty"))]
    pub name: Option<String>,

    #[serde(default)]
    pub legal_name: Option<String>,

    #[serde(default)]
    #[validate(length(max = 255))]
    pub domain: Option<String>,

    #[serde(default)]
    pub country: Option<String>,

    #[serde(default)]
    pub region: Option<String>,

    #[serde(default)]
    pub address: Option<String>,

    #[serde(default)]
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,

    #[serde(default)]
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,

    #[serde(default)]
    #[validate(range(min = 0, message = "employees cannot be negative"))]
    pub employees: Option<i64>,

    #[serde(default)]
    pub categories: Option<Vec<String>>,

    #[serde(default)]
    pub technologies: Option<Vec<String>>,

    #[serde(default)]
    #[validate(email)]
    pub email: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    #[validate(url)]
    pub linkedin_url: Option<String>,

    #[serde(default)]
    #[validate(url)]
    pub twitter_url: Option<String>,
}

impl From<UpdateCompanyValidator> for UpdateCompanyInput {
    fn from(payload: UpdateCompanyValidator) -> Self {
        UpdateCompanyInput {
            name: payload.name,
            legal_name: payload.legal_name,
            domain: payload.domain,
            country: payload.country,
            region: payload.region,
            address: payload.address,
            latitude: payload.latitude,
            longitude: payload.longitude,
            employees: payload.employees,
            categories: payload.categories,
            technologies: payload.technologies,
            email: payload.email,
            phone: payload.phone,
            linkedin_url: payload.linkedin_url,
            twitter_url: payload.twitter_url,
        }
    }
}
