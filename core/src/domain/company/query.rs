use uuid::Uuid;

use crate::domain::common::entities::app_errors::CoreError;

use super::{
    predicate::{Predicate, build_predicate},
    value_objects::{FilterCriteria, SortSpec},
};

/// Largest value Postgres accepts for OFFSET and LIMIT (both BIGINT).
const MAX_BIND: u64 = i64::MAX as u64;

/// Rows `[offset, offset + limit - 1]` of the sorted result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: u64,
    pub limit: u64,
}

impl PageWindow {
    /// Pages far past the end clamp to a window that still binds and is empty.
    pub fn for_page(page: u64, page_size: u64) -> Self {
        Self {
            offset: page
                .saturating_sub(1)
                .saturating_mul(page_size)
                .min(MAX_BIND),
            limit: page_size.min(MAX_BIND),
        }
    }
}

/// Columns a company list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    CreatedAt,
    UpdatedAt,
    Name,
    LegalName,
    Domain,
    Country,
    Region,
    Employees,
}

impl SortField {
    /// Accepts snake_case column names and their camelCase UI spellings.
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "created_at" | "createdAt" => Some(SortField::CreatedAt),
            "updated_at" | "updatedAt" => Some(SortField::UpdatedAt),
            "name" => Some(SortField::Name),
            "legal_name" | "legalName" => Some(SortField::LegalName),
            "domain" => Some(SortField::Domain),
            "country" => Some(SortField::Country),
            "region" => Some(SortField::Region),
            "employees" => Some(SortField::Employees),
            _ => None,
        }
    }
}

/// Fully assembled list query, ready for a storage adapter.
///
/// The tenant scope is applied by every adapter on top of `predicate`; the
/// total count ignores `window`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyQuery {
    pub tenant_id: Uuid,
    pub predicate: Predicate,
    pub sort: SortSpec,
    pub window: PageWindow,
}

impl CompanyQuery {
    pub fn assemble(tenant_id: Uuid, criteria: &FilterCriteria) -> Self {
        Self {
            tenant_id,
            predicate: build_predicate(criteria),
            sort: criteria.sort.clone(),
            window: PageWindow::for_page(criteria.page, criteria.page_size),
        }
    }

    pub fn sort_field(&self) -> Result<SortField, CoreError> {
        SortField::parse(&self.sort.key).ok_or_else(|| {
            CoreError::QueryExecution(format!("unknown sort field '{}'", self.sort.key))
        })
    }
}
