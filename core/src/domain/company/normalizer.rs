use tracing::debug;

use super::{
    size_range::parse_size_range,
    value_objects::{
        CompanyQueryParams, DEFAULT_PAGE, DEFAULT_PAGE_SIZE, EmployeeRange, Filter,
        FilterCriteria, OneOrMany, SortDirection, SortSpec,
    },
};

/// Turns raw list parameters into canonical criteria.
///
/// Never fails: malformed paging or sort input falls back to defaults.
pub fn normalize(params: &CompanyQueryParams) -> FilterCriteria {
    FilterCriteria {
        search_text: normalize_search(params.search.as_deref()),
        countries: normalize_multi(params.country.as_ref()),
        regions: normalize_multi(params.region.as_ref()),
        employee_range: normalize_employees(params),
        categories: normalize_multi(params.category.as_ref()),
        technologies: normalize_multi(params.technology.as_ref()),
        sort: normalize_sort(params),
        page: parse_positive(params.page.as_deref()).unwrap_or(DEFAULT_PAGE),
        page_size: first_positive(&[params.limit.as_deref(), params.per_page.as_deref()])
            .unwrap_or(DEFAULT_PAGE_SIZE),
    }
}

fn normalize_search(search: Option<&str>) -> Option<String> {
    search
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}

/// Blank entries are dropped, so `[]`, `[""]` and `""` all mean "no filter".
fn normalize_multi(raw: Option<&OneOrMany<String>>) -> Filter<String> {
    let values: Vec<String> = match raw {
        None => Vec::new(),
        Some(OneOrMany::One(value)) => vec![value.clone()],
        Some(OneOrMany::Many(values)) => values.clone(),
    };

    Filter::from_values(
        values
            .into_iter()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty()),
    )
}

/// Explicit bounds win; a size bucket only fills the sides left open.
fn normalize_employees(params: &CompanyQueryParams) -> EmployeeRange {
    let mut range = EmployeeRange {
        min: params.min_employees,
        max: params.max_employees,
    };

    if let Some(bucket) = params.company_size.as_deref() {
        let size = parse_size_range(bucket);
        debug!(bucket, ?size, "resolved company size bucket");

        if range.min.is_none() && size.min > 0 {
            range.min = i64::try_from(size.min).ok();
        }
        if range.max.is_none() {
            range.max = size.max.and_then(|max| i64::try_from(max).ok());
        }
    }

    range
}

fn normalize_sort(params: &CompanyQueryParams) -> SortSpec {
    let key = first_non_blank(&[params.sort_by.as_deref(), params.order_by.as_deref()]);
    let direction = first_non_blank(&[
        params.sort_order.as_deref(),
        params.order_direction.as_deref(),
    ])
    .and_then(SortDirection::parse);

    let default = SortSpec::default();
    SortSpec {
        key: key.map(str::to_string).unwrap_or(default.key),
        direction: direction.unwrap_or(default.direction),
    }
}

fn first_non_blank<'a>(candidates: &[Option<&'a str>]) -> Option<&'a str> {
    candidates
        .iter()
        .flatten()
        .map(|value| value.trim())
        .find(|value| !value.is_empty())
}

fn parse_positive(value: Option<&str>) -> Option<u64> {
    value
        .and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|value| *value > 0)
        .map(|value| value as u64)
}

fn first_positive(candidates: &[Option<&str>]) -> Option<u64> {
    first_non_blank(candidates).and_then(|value| parse_positive(Some(value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> CompanyQueryParams {
        CompanyQueryParams::default()
    }

    #[test]
    fn test_defaults() {
        let criteria = normalize(&params());
        assert_eq!(criteria, FilterCriteria::default());
        assert_eq!(criteria.sort.key, "created_at");
        assert_eq!(criteria.sort.direction, SortDirection::Desc);
        assert_eq!(criteria.page, 1);
        assert_eq!(criteria.page_size, 10);
    }

    #[test]
    fn test_blank_search_is_no_filter() {
        let criteria = normalize(&CompanyQueryParams {
            search: Some("   ".to_string()),
            ..params()
        });
        assert_eq!(criteria.search_text, None);

        let criteria = normalize(&CompanyQueryParams {
            search: Some("  Acme ".to_string()),
            ..params()
        });
        assert_eq!(criteria.search_text.as_deref(), Some("Acme"));
    }

    #[test]
    fn test_scalar_and_singleton_list_are_equivalent() {
        let scalar = normalize(&CompanyQueryParams {
            country: Some("USA".to_string().into()),
            ..params()
        });
        let list = normalize(&CompanyQueryParams {
            country: Some(vec!["USA".to_string()].into()),
            ..params()
        });

        assert_eq!(scalar.countries, Filter::One("USA".to_string()));
        assert_eq!(scalar, list);
    }

    #[test]
    fn test_empty_list_is_no_filter() {
        let criteria = normalize(&CompanyQueryParams {
            country: Some(OneOrMany::Many(Vec::new())),
            region: Some(OneOrMany::Many(Vec::new())),
            category: Some(OneOrMany::Many(vec![" ".to_string()])),
            technology: Some(OneOrMany::One(String::new())),
            ..params()
        });

        assert_eq!(criteria, normalize(&params()));
    }

    #[test]
    fn test_many_values_become_set() {
        let criteria = normalize(&CompanyQueryParams {
            category: Some(
                vec![
                    "fintech".to_string(),
                    "healthcare".to_string(),
                    "fintech".to_string(),
                ]
                .into(),
            ),
            ..params()
        });

        assert_eq!(criteria.categories.values(), vec!["fintech", "healthcare"]);
    }

    #[test]
    fn test_zero_employee_bound_is_kept() {
        let criteria = normalize(&CompanyQueryParams {
            min_employees: Some(0),
            ..params()
        });
        assert_eq!(criteria.employee_range.min, Some(0));
        assert_eq!(criteria.employee_range.max, None);
    }

    #[test]
    fn test_size_bucket_fills_open_bounds() {
        let criteria = normalize(&CompanyQueryParams {
            company_size: Some("51-200 employees".to_string()),
            ..params()
        });
        assert_eq!(
            criteria.employee_range,
            EmployeeRange {
                min: Some(51),
                max: Some(200)
            }
        );

        let criteria = normalize(&CompanyQueryParams {
            company_size: Some("10,001+".to_string()),
            max_employees: Some(50_000),
            ..params()
        });
        assert_eq!(
            criteria.employee_range,
            EmployeeRange {
                min: Some(10_001),
                max: Some(50_000)
            }
        );
    }

    #[test]
    fn test_unparseable_size_bucket_adds_no_bounds() {
        let criteria = normalize(&CompanyQueryParams {
            company_size: Some("enterprise".to_string()),
            ..params()
        });
        assert!(criteria.employee_range.is_unbounded());
    }

    #[test]
    fn test_sort_aliases_prefer_first() {
        let criteria = normalize(&CompanyQueryParams {
            sort_by: Some("name".to_string()),
            order_by: Some("employees".to_string()),
            sort_order: None,
            order_direction: Some("asc".to_string()),
            ..params()
        });
        assert_eq!(criteria.sort.key, "name");
        assert_eq!(criteria.sort.direction, SortDirection::Asc);

        let criteria = normalize(&CompanyQueryParams {
            order_by: Some("employees".to_string()),
            sort_order: Some("asc".to_string()),
            order_direction: Some("desc".to_string()),
            ..params()
        });
        assert_eq!(criteria.sort.key, "employees");
        assert_eq!(criteria.sort.direction, SortDirection::Asc);
    }

    #[test]
    fn test_unknown_direction_defaults_to_desc() {
        let criteria = normalize(&CompanyQueryParams {
            sort_order: Some("upwards".to_string()),
            ..params()
        });
        assert_eq!(criteria.sort.direction, SortDirection::Desc);
    }

    #[test]
    fn test_invalid_page_defaults_to_one() {
        for page in ["0", "-3", "two", ""] {
            let criteria = normalize(&CompanyQueryParams {
                page: Some(page.to_string()),
                ..params()
            });
            assert_eq!(criteria.page, 1, "page {page:?}");
        }

        let criteria = normalize(&CompanyQueryParams {
            page: Some("4".to_string()),
            ..params()
        });
        assert_eq!(criteria.page, 4);
    }

    #[test]
    fn test_page_size_aliases() {
        let criteria = normalize(&CompanyQueryParams {
            limit: Some("25".to_string()),
            per_page: Some("50".to_string()),
            ..params()
        });
        assert_eq!(criteria.page_size, 25);

        let criteria = normalize(&CompanyQueryParams {
            per_page: Some("50".to_string()),
            ..params()
        });
        assert_eq!(criteria.page_size, 50);

        let criteria = normalize(&CompanyQueryParams {
            limit: Some("0".to_string()),
            ..params()
        });
        assert_eq!(criteria.page_size, 10);
    }
}
