use chrono::Utc;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::domain::{
    authentication::{ports::SessionProvider, value_objects::Session},
    common::{entities::app_errors::CoreError, services::Service},
    company::{
        entities::{Company, CompanyDetail, CompanyItem, CompanyList},
        normalizer::normalize,
        ports::{CompanyRepository, CompanyService},
        query::CompanyQuery,
        result_mapper::{map_to_items, to_item},
        value_objects::{
            CompanyQueryParams, CreateCompanyInput, FilterCriteria, Paginated, UpdateCompanyInput,
        },
    },
    tenant::ports::TenantResolver,
};

/// Folds any storage failure into a single query error.
fn query_error(e: CoreError) -> CoreError {
    match e {
        CoreError::QueryExecution(_) => e,
        other => CoreError::QueryExecution(other.to_string()),
    }
}

impl<S, T, C> Service<S, T, C>
where
    S: SessionProvider,
    T: TenantResolver,
    C: CompanyRepository,
{
    /// Runs the list query for `criteria` in the caller's tenant.
    ///
    /// All or nothing: either the page and its total count, or one error.
    pub async fn execute(
        &self,
        session: &Session,
        criteria: &FilterCriteria,
    ) -> Result<(Vec<Company>, u64), CoreError> {
        let (_, tenant_id) = self.resolve_tenant(session).await?;

        let query = CompanyQuery::assemble(tenant_id, criteria);
        debug!(?query, "executing company query");

        self.company_repository
            .find_companies(query)
            .await
            .map_err(query_error)
    }

    async fn require_company(&self, tenant_id: Uuid, company_id: Uuid) -> Result<Company, CoreError> {
        self.company_repository
            .get_company(tenant_id, company_id)
            .await
            .map_err(query_error)?
            .ok_or(CoreError::NotFound)
    }
}

impl<S, T, C> CompanyService for Service<S, T, C>
where
    S: SessionProvider,
    T: TenantResolver,
    C: CompanyRepository,
{
    #[instrument(skip(self, session, params))]
    async fn get_companies(
        &self,
        session: Session,
        params: CompanyQueryParams,
    ) -> Result<Paginated<CompanyItem>, CoreError> {
        let criteria = normalize(&params);
        let (rows, total_count) = self.execute(&session, &criteria).await?;

        Ok(map_to_items(rows, total_count, &criteria))
    }

    #[instrument(skip(self, session))]
    async fn get_company_by_id(
        &self,
        session: Session,
        company_id: Uuid,
    ) -> Result<CompanyDetail, CoreError> {
        let (_, tenant_id) = self.resolve_tenant(&session).await?;

        let repository = &self.company_repository;
        let (company, lists, customer, metadata) = futures::join!(
            repository.get_company(tenant_id, company_id),
            repository.get_company_lists(tenant_id, company_id),
            repository.get_customer_overlay(tenant_id, company_id),
            repository.get_company_metadata(tenant_id, company_id),
        );

        let company = company.map_err(query_error)?.ok_or(CoreError::NotFound)?;

        let lists = lists
            .inspect_err(|e| warn!("Failed to load company lists: {}", e))
            .ok();
        let customer = customer
            .inspect_err(|e| warn!("Failed to load customer overlay: {}", e))
            .ok()
            .flatten();
        let metadata = metadata
            .inspect_err(|e| warn!("Failed to load company metadata: {}", e))
            .ok()
            .flatten();

        Ok(CompanyDetail {
            company: to_item(company, Utc::now()),
            lists,
            customer,
            metadata,
        })
    }

    #[instrument(skip(self, session))]
    async fn get_company_lists(
        &self,
        session: Session,
        company_id: Uuid,
    ) -> Result<Vec<CompanyList>, CoreError> {
        let (_, tenant_id) = self.resolve_tenant(&session).await?;

        self.company_repository
            .get_company_lists(tenant_id, company_id)
            .await
            .map_err(query_error)
    }

    #[instrument(skip(self, session, input))]
    async fn create_company(
        &self,
        session: Session,
        input: CreateCompanyInput,
    ) -> Result<CompanyItem, CoreError> {
        if input.name.trim().is_empty() {
            return Err(CoreError::Validation("name is required".to_string()));
        }

        let (_, tenant_id) = self.resolve_tenant(&session).await?;

        let company = Company::new(tenant_id, input);
        let created = self
            .company_repository
            .create_company(company)
            .await
            .map_err(query_error)?;

        Ok(to_item(created, Utc::now()))
    }

    #[instrument(skip(self, session, input))]
    async fn update_company(
        &self,
        session: Session,
        company_id: Uuid,
        input: UpdateCompanyInput,
    ) -> Result<CompanyItem, CoreError> {
        if input.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
            return Err(CoreError::Validation("name cannot be blank".to_string()));
        }

        let (_, tenant_id) = self.resolve_tenant(&session).await?;

        let mut company = self.require_company(tenant_id, company_id).await?;
        company.update(input);

        let updated = self
            .company_repository
            .update_company(company)
            .await
            .map_err(query_error)?;

        Ok(to_item(updated, Utc::now()))
    }

    #[instrument(skip(self, session))]
    async fn delete_company(&self, session: Session, company_id: Uuid) -> Result<(), CoreError> {
        let (_, tenant_id) = self.resolve_tenant(&session).await?;

        self.require_company(tenant_id, company_id).await?;
        self.company_repository
            .delete_company(tenant_id, company_id)
            .await
            .map_err(query_error)
    }
}
