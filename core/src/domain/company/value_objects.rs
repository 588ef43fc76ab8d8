use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const DEFAULT_SORT_KEY: &str = "created_at";

/// A raw field that callers send either as a single value or as a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl From<String> for OneOrMany<String> {
    fn from(value: String) -> Self {
        OneOrMany::One(value)
    }
}

impl From<Vec<String>> for OneOrMany<String> {
    fn from(values: Vec<String>) -> Self {
        OneOrMany::Many(values)
    }
}

/// A multi-valued filter field, resolved once during normalization.
///
/// `Many` always holds at least two distinct values; a single distinct value
/// collapses to `One` so scalar and singleton-list input behave identically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter<T> {
    None,
    One(T),
    Many(BTreeSet<T>),
}

impl<T> Default for Filter<T> {
    fn default() -> Self {
        Filter::None
    }
}

impl<T: Ord> Filter<T> {
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set: BTreeSet<T> = values.into_iter().collect();
        match set.len() {
            0 => Filter::None,
            1 => match set.pop_first() {
                Some(value) => Filter::One(value),
                None => Filter::None,
            },
            _ => Filter::Many(set),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Filter::None)
    }

    pub fn values(&self) -> Vec<&T> {
        match self {
            Filter::None => Vec::new(),
            Filter::One(value) => vec![value],
            Filter::Many(values) => values.iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// Case-insensitive `asc`/`desc`; anything else is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Some(SortDirection::Asc),
            "desc" | "descending" => Some(SortDirection::Desc),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub key: String,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            key: DEFAULT_SORT_KEY.to_string(),
            direction: SortDirection::Desc,
        }
    }
}

/// Inclusive employee-count bounds; a missing side is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmployeeRange {
    pub min: Option<i64>,
    pub max: Option<i64>,
}

impl EmployeeRange {
    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }
}

/// Canonical filter derived from raw request parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search_text: Option<String>,
    pub countries: Filter<String>,
    pub regions: Filter<String>,
    pub employee_range: EmployeeRange,
    pub categories: Filter<String>,
    pub technologies: Filter<String>,
    pub sort: SortSpec,
    pub page: u64,
    pub page_size: u64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search_text: None,
            countries: Filter::None,
            regions: Filter::None,
            employee_range: EmployeeRange::default(),
            categories: Filter::None,
            technologies: Filter::None,
            sort: SortSpec::default(),
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Company list parameters exactly as the UI sends them.
///
/// Legacy aliases are kept side by side (`sortBy`/`orderBy`,
/// `sortOrder`/`orderDirection`, `limit`/`perPage`); the normalizer decides
/// which one wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyQueryParams {
    pub search: Option<String>,
    pub country: Option<OneOrMany<String>>,
    pub region: Option<OneOrMany<String>>,
    pub category: Option<OneOrMany<String>>,
    pub technology: Option<OneOrMany<String>>,
    #[serde(rename = "min_employees")]
    pub min_employees: Option<i64>,
    #[serde(rename = "max_employees")]
    pub max_employees: Option<i64>,
    #[serde(rename = "company_size")]
    pub company_size: Option<String>,
    pub sort_by: Option<String>,
    pub order_by: Option<String>,
    pub sort_order: Option<String>,
    pub order_direction: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
    pub per_page: Option<String>,
}

/// One page of results plus the metadata needed to navigate the rest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub page: u64,
    pub page_size: u64,
    pub total_count: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl<T> Paginated<T> {
    /// `total_count` must be the full match count, not the page length.
    pub fn new(items: Vec<T>, page: u64, page_size: u64, total_count: u64) -> Self {
        let total_pages = if page_size == 0 {
            0
        } else {
            total_count.div_ceil(page_size)
        };

        Self {
            items,
            page,
            page_size,
            total_count,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateCompanyInput {
    pub name: String,
    pub legal_name: Option<String>,
    pub domain: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub employees: Option<i64>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UpdateCompanyInput {
    pub name: Option<String>,
    pub legal_name: Option<String>,
    pub domain: Option<String>,
    pub country: Option<String>,
    pub region: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub employees: Option<i64>,
    pub categories: Option<Vec<String>>,
    pub technologies: Option<Vec<String>>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
}
