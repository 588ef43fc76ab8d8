use std::{
    cmp::Ordering,
    collections::HashMap,
    sync::{Arc, Mutex},
};

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::{
    authentication::{
        ports::SessionProvider,
        value_objects::{Session, User},
    },
    common::{entities::app_errors::CoreError, generate_uuid_v7, services::Service},
    company::{
        entities::{Company, CompanyList, CustomerOverlay},
        ports::CompanyRepository,
        predicate::{CompanyField, Predicate},
        query::{CompanyQuery, SortField},
        value_objects::SortDirection,
    },
    tenant::ports::TenantResolver,
};

pub const TENANT_ID: Uuid = Uuid::from_u128(0x0195_0000_0000_7000_8000_0000_0000_0001);
pub const USER_ID: Uuid = Uuid::from_u128(0x0195_0000_0000_7000_8000_0000_0000_0002);

/// A company in the fixture tenant, named after `slug`.
pub fn company(slug: &str) -> Company {
    let created_at = Utc::now() - Duration::minutes(1);

    Company {
        id: Some(generate_uuid_v7().to_string()),
        tenant_id: TENANT_ID,
        name: Some(slug.to_string()),
        legal_name: None,
        domain: Some(format!("{slug}.example")),
        country: None,
        region: None,
        address: None,
        latitude: None,
        longitude: None,
        employees: Some(50),
        categories: Vec::new(),
        technologies: Vec::new(),
        email: None,
        phone: None,
        linkedin_url: None,
        twitter_url: None,
        created_at: Some(created_at),
        updated_at: Some(created_at),
    }
}

pub fn session() -> Session {
    Session::bearer("test-token")
}

pub fn service(
    repository: InMemoryCompanyRepository,
) -> Service<StaticSessionProvider, StaticTenantResolver, InMemoryCompanyRepository> {
    Service::new(StaticSessionProvider, StaticTenantResolver, repository)
}

/// Any session carrying a token belongs to [`USER_ID`].
#[derive(Clone, Default)]
pub struct StaticSessionProvider;

impl SessionProvider for StaticSessionProvider {
    async fn get_current_user(&self, session: &Session) -> Result<Option<User>, CoreError> {
        Ok(session.token.as_ref().map(|_| User {
            id: USER_ID,
            email: Some("analyst@example.com".to_string()),
        }))
    }
}

#[derive(Clone, Default)]
pub struct StaticTenantResolver;

impl TenantResolver for StaticTenantResolver {
    async fn resolve_current_tenant_id(&self, _user: &User) -> Result<Uuid, CoreError> {
        Ok(TENANT_ID)
    }
}

#[derive(Default)]
struct Store {
    companies: Vec<Company>,
    lists: HashMap<Uuid, Vec<CompanyList>>,
    overlays: HashMap<Uuid, CustomerOverlay>,
    metadata: HashMap<Uuid, serde_json::Value>,
}

/// Repository that evaluates predicates over rows held in memory.
#[derive(Clone, Default)]
pub struct InMemoryCompanyRepository {
    store: Arc<Mutex<Store>>,
    fail_queries: bool,
    fail_secondary: bool,
}

impl InMemoryCompanyRepository {
    pub fn with_companies(companies: Vec<Company>) -> Self {
        let repository = Self::default();
        repository.lock().companies = companies;
        repository
    }

    pub fn with_list(self, company_id: Uuid, name: &str) -> Self {
        self.lock()
            .lists
            .entry(company_id)
            .or_default()
            .push(CompanyList {
                id: Uuid::new_v4(),
                name: name.to_string(),
                added_at: Utc::now(),
            });
        self
    }

    pub fn with_overlay(self, company_id: Uuid, overlay: CustomerOverlay) -> Self {
        self.lock().overlays.insert(company_id, overlay);
        self
    }

    pub fn with_metadata(self, company_id: Uuid, metadata: serde_json::Value) -> Self {
        self.lock().metadata.insert(company_id, metadata);
        self
    }

    pub fn failing_queries(mut self) -> Self {
        self.fail_queries = true;
        self
    }

    pub fn failing_secondary(mut self) -> Self {
        self.fail_secondary = true;
        self
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Store> {
        self.store.lock().unwrap()
    }

    fn secondary_guard(&self) -> Result<(), CoreError> {
        if self.fail_secondary {
            return Err(CoreError::QueryExecution("side table unavailable".to_string()));
        }
        Ok(())
    }

    /// Side-table rows are only visible through a company of the same tenant.
    fn owns(&self, tenant_id: Uuid, company_id: Uuid) -> bool {
        self.lock()
            .companies
            .iter()
            .any(|company| is_company(company, tenant_id, company_id))
    }
}

fn is_company(company: &Company, tenant_id: Uuid, company_id: Uuid) -> bool {
    company.tenant_id == tenant_id && company.id.as_deref() == Some(company_id.to_string().as_str())
}

fn text_field(company: &Company, field: CompanyField) -> Option<&str> {
    match field {
        CompanyField::Name => company.name.as_deref(),
        CompanyField::LegalName => company.legal_name.as_deref(),
        CompanyField::Domain => company.domain.as_deref(),
        CompanyField::Country => company.country.as_deref(),
        CompanyField::Region => company.region.as_deref(),
        _ => None,
    }
}

fn tag_field(company: &Company, field: CompanyField) -> &[String] {
    match field {
        CompanyField::Categories => &company.categories,
        CompanyField::Technologies => &company.technologies,
        _ => &[],
    }
}

fn matches(company: &Company, predicate: &Predicate) -> bool {
    match predicate {
        Predicate::And(children) => children.iter().all(|child| matches(company, child)),
        Predicate::Or(children) => children.iter().any(|child| matches(company, child)),
        Predicate::Eq(field, value) => text_field(company, *field) == Some(value.as_str()),
        Predicate::In(field, values) => {
            text_field(company, *field).is_some_and(|text| values.iter().any(|v| v == text))
        }
        Predicate::Substring(field, needle) => text_field(company, *field)
            .is_some_and(|text| text.to_lowercase().contains(&needle.to_lowercase())),
        Predicate::Gte(_, min) => company.employees.is_some_and(|employees| employees >= *min),
        Predicate::Lte(_, max) => company.employees.is_some_and(|employees| employees <= *max),
        Predicate::HasTag(field, tag) => tag_field(company, *field).contains(tag),
    }
}

/// Postgres ordering: NULL sorts above every value, so last ascending.
fn nulls_high<T: Ord>(a: &Option<T>, b: &Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
    }
}

fn compare(a: &Company, b: &Company, field: SortField) -> Ordering {
    match field {
        SortField::CreatedAt => nulls_high(&a.created_at, &b.created_at),
        SortField::UpdatedAt => nulls_high(&a.updated_at, &b.updated_at),
        SortField::Name => nulls_high(&a.name, &b.name),
        SortField::LegalName => nulls_high(&a.legal_name, &b.legal_name),
        SortField::Domain => nulls_high(&a.domain, &b.domain),
        SortField::Country => nulls_high(&a.country, &b.country),
        SortField::Region => nulls_high(&a.region, &b.region),
        SortField::Employees => nulls_high(&a.employees, &b.employees),
    }
}

impl CompanyRepository for InMemoryCompanyRepository {
    async fn find_companies(&self, query: CompanyQuery) -> Result<(Vec<Company>, u64), CoreError> {
        if self.fail_queries {
            return Err(CoreError::QueryExecution("connection refused".to_string()));
        }
        let field = query.sort_field()?;

        let mut rows: Vec<Company> = self
            .lock()
            .companies
            .iter()
            .filter(|company| company.tenant_id == query.tenant_id)
            .filter(|company| matches(company, &query.predicate))
            .cloned()
            .collect();

        rows.sort_by(|a, b| {
            let ordering = match query.sort.direction {
                SortDirection::Asc => compare(a, b, field),
                SortDirection::Desc => compare(b, a, field),
            };
            ordering.then_with(|| a.id.cmp(&b.id))
        });

        let total_count = rows.len() as u64;
        let page = rows
            .into_iter()
            .skip(query.window.offset as usize)
            .take(query.window.limit as usize)
            .collect();

        Ok((page, total_count))
    }

    async fn get_company(
        &self,
        tenant_id: Uuid,
        company_id: Uuid,
    ) -> Result<Option<Company>, CoreError> {
        if self.fail_queries {
            return Err(CoreError::QueryExecution("connection refused".to_string()));
        }
        Ok(self
            .lock()
            .companies
            .iter()
            .find(|company| is_company(company, tenant_id, company_id))
            .cloned())
    }

    async fn get_company_lists(
        &self,
        tenant_id: Uuid,
        company_id: Uuid,
    ) -> Result<Vec<CompanyList>, CoreError> {
        self.secondary_guard()?;
        if !self.owns(tenant_id, company_id) {
            return Ok(Vec::new());
        }
        Ok(self.lock().lists.get(&company_id).cloned().unwrap_or_default())
    }

    async fn get_customer_overlay(
        &self,
        tenant_id: Uuid,
        company_id: Uuid,
    ) -> Result<Option<CustomerOverlay>, CoreError> {
        self.secondary_guard()?;
        if !self.owns(tenant_id, company_id) {
            return Ok(None);
        }
        Ok(self.lock().overlays.get(&company_id).cloned())
    }

    async fn get_company_metadata(
        &self,
        tenant_id: Uuid,
        company_id: Uuid,
    ) -> Result<Option<serde_json::Value>, CoreError> {
        self.secondary_guard()?;
        if !self.owns(tenant_id, company_id) {
            return Ok(None);
        }
        Ok(self.lock().metadata.get(&company_id).cloned())
    }

    async fn create_company(&self, company: Company) -> Result<Company, CoreError> {
        self.lock().companies.push(company.clone());
        Ok(company)
    }

    async fn update_company(&self, company: Company) -> Result<Company, CoreError> {
        let mut store = self.lock();
        let existing = store
            .companies
            .iter_mut()
            .find(|row| row.tenant_id == company.tenant_id && row.id == company.id)
            .ok_or(CoreError::NotFound)?;
        *existing = company.clone();
        Ok(company)
    }

    async fn delete_company(&self, tenant_id: Uuid, company_id: Uuid) -> Result<(), CoreError> {
        self.lock()
            .companies
            .retain(|company| !is_company(company, tenant_id, company_id));
        Ok(())
    }
}
