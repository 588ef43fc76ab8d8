use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select,
};
use tracing::{debug, error};
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    company::{
        entities::{Company, CompanyList, CustomerOverlay},
        ports::CompanyRepository,
        query::CompanyQuery,
        value_objects::SortDirection,
    },
};
use crate::entity::{
    companies::{Column as CompanyColumn, Entity as CompanyEntity},
    company_metadata::{Entity as CompanyMetadataEntity, Model as CompanyMetadataModel},
    customer_companies::Entity as CustomerCompanyEntity,
    list_companies::{Column as ListCompanyColumn, Entity as ListCompanyEntity},
    lists::{Column as ListColumn, Entity as ListEntity},
};
use crate::infrastructure::company::{
    conditions::{sort_column, to_condition},
    mappers::{parse_company_id, to_active_model, to_company_list},
};

#[derive(Debug, Clone)]
pub struct PostgresCompanyRepository {
    pub db: DatabaseConnection,
}

impl PostgresCompanyRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn query_failed(context: &str, e: DbErr) -> CoreError {
    error!("{}: {}", context, e);
    CoreError::QueryExecution(format!("{context}: {e}"))
}

/// Tenant-scoped matches with no ordering or window; the total count runs on this.
fn matching_select(query: &CompanyQuery) -> Select<CompanyEntity> {
    CompanyEntity::find()
        .filter(CompanyColumn::TenantId.eq(query.tenant_id))
        .filter(to_condition(&query.predicate))
}

/// Requested page of [`matching_select`], ties broken by id ascending.
fn page_select(query: &CompanyQuery) -> Result<Select<CompanyEntity>, CoreError> {
    let sort_column = sort_column(query.sort_field()?);
    let order = match query.sort.direction {
        SortDirection::Asc => Order::Asc,
        SortDirection::Desc => Order::Desc,
    };

    Ok(matching_select(query)
        .order_by(sort_column, order)
        .order_by_asc(CompanyColumn::Id)
        .offset(query.window.offset)
        .limit(query.window.limit))
}

fn metadata_select(tenant_id: Uuid, company_id: Uuid) -> Select<CompanyMetadataEntity> {
    CompanyMetadataEntity::find_by_id(company_id)
        .inner_join(CompanyEntity)
        .filter(CompanyColumn::TenantId.eq(tenant_id))
}

impl CompanyRepository for PostgresCompanyRepository {
    async fn find_companies(&self, query: CompanyQuery) -> Result<(Vec<Company>, u64), CoreError> {
        let page = page_select(&query)?;

        let total_count = matching_select(&query)
            .count(&self.db)
            .await
            .map_err(|e| query_failed("Failed to count companies", e))?;

        let rows = page
            .all(&self.db)
            .await
            .map_err(|e| query_failed("Failed to fetch companies", e))?
            .into_iter()
            .map(Company::from)
            .collect::<Vec<Company>>();

        debug!(rows = rows.len(), total_count, "fetched companies");
        Ok((rows, total_count))
    }

    async fn get_company(
        &self,
        tenant_id: Uuid,
        company_id: Uuid,
    ) -> Result<Option<Company>, CoreError> {
        let company = CompanyEntity::find()
            .filter(CompanyColumn::Id.eq(company_id))
            .filter(CompanyColumn::TenantId.eq(tenant_id))
            .one(&self.db)
            .await
            .map_err(|e| query_failed("Failed to get company by id", e))?
            .map(Company::from);

        Ok(company)
    }

    async fn get_company_lists(
        &self,
        tenant_id: Uuid,
        company_id: Uuid,
    ) -> Result<Vec<CompanyList>, CoreError> {
        let lists = ListCompanyEntity::find()
            .filter(ListCompanyColumn::CompanyId.eq(company_id))
            .find_also_related(ListEntity)
            .filter(ListColumn::TenantId.eq(tenant_id))
            .order_by_desc(ListCompanyColumn::AddedAt)
            .all(&self.db)
            .await
            .map_err(|e| query_failed("Failed to get company lists", e))?
            .into_iter()
            .filter_map(|(membership, list)| list.map(|list| to_company_list(membership, list)))
            .collect::<Vec<CompanyList>>();

        Ok(lists)
    }

    async fn get_customer_overlay(
        &self,
        tenant_id: Uuid,
        company_id: Uuid,
    ) -> Result<Option<CustomerOverlay>, CoreError> {
        let overlay = CustomerCompanyEntity::find_by_id((tenant_id, company_id))
            .one(&self.db)
            .await
            .map_err(|e| query_failed("Failed to get customer overlay", e))?
            .map(CustomerOverlay::from);

        Ok(overlay)
    }

    async fn get_company_metadata(
        &self,
        tenant_id: Uuid,
        company_id: Uuid,
    ) -> Result<Option<serde_json::Value>, CoreError> {
        let metadata = metadata_select(tenant_id, company_id)
            .one(&self.db)
            .await
            .map_err(|e| query_failed("Failed to get company metadata", e))?
            .map(|model: CompanyMetadataModel| model.data);

        Ok(metadata)
    }

    async fn create_company(&self, company: Company) -> Result<Company, CoreError> {
        let created = CompanyEntity::insert(to_active_model(company)?)
            .exec_with_returning(&self.db)
            .await
            .map(Company::from)
            .map_err(|e| query_failed("Failed to create company", e))?;

        Ok(created)
    }

    async fn update_company(&self, company: Company) -> Result<Company, CoreError> {
        let company_id = parse_company_id(company.id.as_deref())?;
        let tenant_id = company.tenant_id;

        let updated = CompanyEntity::update(to_active_model(company)?)
            .filter(CompanyColumn::Id.eq(company_id))
            .filter(CompanyColumn::TenantId.eq(tenant_id))
            .exec(&self.db)
            .await
            .map(Company::from)
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => CoreError::NotFound,
                e => query_failed("Failed to update company", e),
            })?;

        Ok(updated)
    }

    async fn delete_company(&self, tenant_id: Uuid, company_id: Uuid) -> Result<(), CoreError> {
        let result = CompanyEntity::delete_many()
            .filter(CompanyColumn::Id.eq(company_id))
            .filter(CompanyColumn::TenantId.eq(tenant_id))
            .exec(&self.db)
            .await
            .map_err(|e| query_failed("Failed to delete company", e))?;

        if result.rows_affected == 0 {
            return Err(CoreError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::{DbBackend, QueryTrait};

    use super::*;
    use crate::domain::company::{
        query::PageWindow,
        value_objects::{FilterCriteria, SortSpec},
    };

    fn tenant() -> Uuid {
        Uuid::from_u128(0x0195_0000_0000_7000_8000_0000_0000_00aa)
    }

    fn query(page: u64, page_size: u64, key: &str, direction: SortDirection) -> CompanyQuery {
        CompanyQuery::assemble(
            tenant(),
            &FilterCriteria {
                search_text: Some("acme".to_string()),
                page,
                page_size,
                sort: SortSpec {
                    key: key.to_string(),
                    direction,
                },
                ..Default::default()
            },
        )
    }

    fn sql(select: Select<CompanyEntity>) -> String {
        select.build(DbBackend::Postgres).to_string()
    }

    #[test]
    fn test_page_is_tenant_scoped_sorted_and_windowed() {
        let sql = sql(page_select(&query(3, 10, "name", SortDirection::Asc)).unwrap());

        assert!(sql.contains(&format!(r#""companies"."tenant_id" = '{}'"#, tenant())));
        assert!(sql.contains("ILIKE '%acme%'"));
        assert!(sql.contains(r#"ORDER BY "companies"."name" ASC, "companies"."id" ASC"#));
        assert!(sql.ends_with("LIMIT 10 OFFSET 20"));
    }

    #[test]
    fn test_descending_sort_keeps_ascending_tiebreak() {
        let sql = sql(page_select(&query(1, 25, "createdAt", SortDirection::Desc)).unwrap());

        assert!(sql.contains(r#"ORDER BY "companies"."created_at" DESC, "companies"."id" ASC"#));
        assert!(sql.ends_with("LIMIT 25 OFFSET 0"));
    }

    #[test]
    fn test_count_ignores_window_and_order() {
        let sql = sql(matching_select(&query(3, 10, "name", SortDirection::Asc)));

        assert!(sql.contains(&format!(r#""companies"."tenant_id" = '{}'"#, tenant())));
        assert!(sql.contains("ILIKE '%acme%'"));
        assert!(!sql.contains("ORDER BY"));
        assert!(!sql.contains("LIMIT"));
        assert!(!sql.contains("OFFSET"));
    }

    #[test]
    fn test_far_page_still_binds() {
        let mut query = query(1, 10, "name", SortDirection::Asc);
        query.window = PageWindow::for_page(u64::MAX, u64::MAX);

        let sql = sql(page_select(&query).unwrap());
        assert!(sql.ends_with(&format!("LIMIT {} OFFSET {}", i64::MAX, i64::MAX)));
    }

    #[test]
    fn test_unknown_sort_field_builds_nothing() {
        let result = page_select(&query(1, 10, "name; drop table companies", SortDirection::Asc));
        assert!(matches!(result, Err(CoreError::QueryExecution(_))));
    }

    #[test]
    fn test_metadata_is_reached_through_the_tenant_company() {
        let company_id = Uuid::new_v4();
        let sql = metadata_select(tenant(), company_id)
            .build(DbBackend::Postgres)
            .to_string();

        assert!(sql.contains(r#"INNER JOIN "companies""#));
        assert!(sql.contains(&format!(r#""company_metadata"."company_id" = '{company_id}'"#)));
        assert!(sql.contains(&format!(r#""companies"."tenant_id" = '{}'"#, tenant())));
    }
}
