use std::collections::BTreeMap;

use strategy_forge_core::domain::company::value_objects::{CompanyQueryParams, OneOrMany};
use tracing::debug;

/// Values collected for one query-string key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct RawValues {
    values: Vec<String>,
    /// The key was sent as `key[]`, so a single value still means a list.
    bracketed: bool,
}

impl RawValues {
    fn one_or_many(self) -> OneOrMany<String> {
        match (self.bracketed, self.values.len()) {
            (false, 1) => OneOrMany::One(self.values.into_iter().next().unwrap_or_default()),
            _ => OneOrMany::Many(self.values),
        }
    }

    fn first(&self) -> Option<String> {
        self.values.first().cloned()
    }
}

/// Decoded query string, grouped by key with `[]` suffixes stripped.
#[derive(Debug, Clone, Default)]
pub struct QueryMap {
    entries: BTreeMap<String, RawValues>,
}

impl QueryMap {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut entries: BTreeMap<String, RawValues> = BTreeMap::new();

        for (key, value) in pairs {
            let (key, bracketed) = match key.strip_suffix("[]") {
                Some(stripped) => (stripped.to_string(), true),
                None => (key, false),
            };

            let entry = entries.entry(key).or_default();
            entry.bracketed |= bracketed;
            entry.values.push(value);
        }

        Self { entries }
    }

    pub fn from_query(query: &str) -> Self {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query).unwrap_or_else(|e| {
            debug!("Ignoring malformed query string: {}", e);
            Vec::new()
        });

        Self::from_pairs(pairs)
    }

    fn take(&mut self, keys: &[&str]) -> Option<RawValues> {
        let mut merged: Option<RawValues> = None;
        for key in keys {
            if let Some(raw) = self.entries.remove(*key) {
                let target = merged.get_or_insert_with(RawValues::default);
                target.bracketed |= raw.bracketed || !target.values.is_empty();
                target.values.extend(raw.values);
            }
        }
        merged
    }

    fn scalar(&mut self, keys: &[&str]) -> Option<String> {
        self.take(keys).and_then(|raw| raw.first())
    }

    fn multi(&mut self, keys: &[&str]) -> Option<OneOrMany<String>> {
        self.take(keys).map(RawValues::one_or_many)
    }

    fn integer(&mut self, keys: &[&str]) -> Option<i64> {
        let raw = self.scalar(keys)?;
        match raw.trim().parse::<i64>() {
            Ok(value) => Some(value),
            Err(_) => {
                debug!(keys = ?keys, value = %raw, "Ignoring non-numeric bound");
                None
            }
        }
    }

    /// Maps UI keys (and their legacy spellings) onto list parameters.
    pub fn into_company_params(mut self) -> CompanyQueryParams {
        CompanyQueryParams {
            search: self.scalar(&["search", "q"]),
            country: self.multi(&["country", "countries"]),
            region: self.multi(&["region", "regions"]),
            category: self.multi(&["category", "categories"]),
            technology: self.multi(&["technology", "technologies"]),
            min_employees: self.integer(&["min_employees", "minEmployees"]),
            max_employees: self.integer(&["max_employees", "maxEmployees"]),
            company_size: self.scalar(&["company_size", "companySize"]),
            sort_by: self.scalar(&["sortBy", "sort_by"]),
            order_by: self.scalar(&["orderBy", "order_by"]),
            sort_order: self.scalar(&["sortOrder", "sort_order"]),
            order_direction: self.scalar(&["orderDirection", "order_direction"]),
            page: self.scalar(&["page"]),
            limit: self.scalar(&["limit"]),
            per_page: self.scalar(&["perPage", "per_page"]),
        }
    }
}

pub fn parse_company_query(query: &str) -> CompanyQueryParams {
    QueryMap::from_query(query).into_company_params()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(value: &str) -> String {
        value.to_string()
    }

    #[test]
    fn test_single_value_is_scalar() {
        let params = parse_company_query("country=USA&search=acme");
        assert_eq!(params.country, Some(OneOrMany::One(s("USA"))));
        assert_eq!(params.search.as_deref(), Some("acme"));
    }

    #[test]
    fn test_repeated_keys_become_a_list() {
        let params = parse_company_query("category=fintech&category=healthcare");
        assert_eq!(
            params.category,
            Some(OneOrMany::Many(vec![s("fintech"), s("healthcare")]))
        );
    }

    #[test]
    fn test_bracketed_key_is_always_a_list() {
        let params = parse_company_query("country%5B%5D=USA&technology[]=rust&technology[]=go");
        assert_eq!(params.country, Some(OneOrMany::Many(vec![s("USA")])));
        assert_eq!(
            params.technology,
            Some(OneOrMany::Many(vec![s("rust"), s("go")]))
        );
    }

    #[test]
    fn test_legacy_aliases() {
        let params = parse_company_query(
            "orderBy=name&orderDirection=asc&perPage=25&minEmployees=10&companySize=51-200",
        );
        assert_eq!(params.order_by.as_deref(), Some("name"));
        assert_eq!(params.order_direction.as_deref(), Some("asc"));
        assert_eq!(params.per_page.as_deref(), Some("25"));
        assert_eq!(params.min_employees, Some(10));
        assert_eq!(params.company_size.as_deref(), Some("51-200"));
    }

    #[test]
    fn test_non_numeric_bounds_are_ignored() {
        let params = parse_company_query("min_employees=lots&max_employees=500");
        assert_eq!(params.min_employees, None);
        assert_eq!(params.max_employees, Some(500));
    }

    #[test]
    fn test_empty_query() {
        assert_eq!(parse_company_query(""), CompanyQueryParams::default());
    }

    #[test]
    fn test_encoded_search_text() {
        let params = parse_company_query("search=Acme%20Corp&page=2&limit=10");
        assert_eq!(params.search.as_deref(), Some("Acme Corp"));
        assert_eq!(params.page.as_deref(), Some("2"));
        assert_eq!(params.limit.as_deref(), Some("10"));
    }
}
