use std::future::Future;

use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Session,
    common::entities::app_errors::CoreError,
    company::{
        entities::{Company, CompanyDetail, CompanyItem, CompanyList, CustomerOverlay},
        query::CompanyQuery,
        value_objects::{CompanyQueryParams, CreateCompanyInput, Paginated, UpdateCompanyInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait CompanyService: Send + Sync {
    fn get_companies(
        &self,
        session: Session,
        params: CompanyQueryParams,
    ) -> impl Future<Output = Result<Paginated<CompanyItem>, CoreError>> + Send;

    fn get_company_by_id(
        &self,
        session: Session,
        company_id: Uuid,
    ) -> impl Future<Output = Result<CompanyDetail, CoreError>> + Send;

    fn get_company_lists(
        &self,
        session: Session,
        company_id: Uuid,
    ) -> impl Future<Output = Result<Vec<CompanyList>, CoreError>> + Send;

    fn create_company(
        &self,
        session: Session,
        input: CreateCompanyInput,
    ) -> impl Future<Output = Result<CompanyItem, CoreError>> + Send;

    fn update_company(
        &self,
        session: Session,
        company_id: Uuid,
        input: UpdateCompanyInput,
    ) -> impl Future<Output = Result<CompanyItem, CoreError>> + Send;

    fn delete_company(
        &self,
        session: Session,
        company_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Storage collaborator for the company catalog and its side tables.
///
/// Every method is scoped to one tenant. Side tables are reached through a
/// company of that tenant.
#[cfg_attr(test, mockall::automock)]
pub trait CompanyRepository: Send + Sync {
    /// Returns the requested page and the total match count ignoring the page.
    fn find_companies(
        &self,
        query: CompanyQuery,
    ) -> impl Future<Output = Result<(Vec<Company>, u64), CoreError>> + Send;

    fn get_company(
        &self,
        tenant_id: Uuid,
        company_id: Uuid,
    ) -> impl Future<Output = Result<Option<Company>, CoreError>> + Send;

    fn get_company_lists(
        &self,
        tenant_id: Uuid,
        company_id: Uuid,
    ) -> impl Future<Output = Result<Vec<CompanyList>, CoreError>> + Send;

    fn get_customer_overlay(
        &self,
        tenant_id: Uuid,
        company_id: Uuid,
    ) -> impl Future<Output = Result<Option<CustomerOverlay>, CoreError>> + Send;

    fn get_company_metadata(
        &self,
        tenant_id: Uuid,
        company_id: Uuid,
    ) -> impl Future<Output = Result<Option<serde_json::Value>, CoreError>> + Send;

    fn create_company(
        &self,
        company: Company,
    ) -> impl Future<Output = Result<Company, CoreError>> + Send;

    fn update_company(
        &self,
        company: Company,
    ) -> impl Future<Output = Result<Company, CoreError>> + Send;

    fn delete_company(
        &self,
        tenant_id: Uuid,
        company_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
