//! Typed filter expressions over the company catalog.
//!
//! Storage adapters translate a [`Predicate`] into their own query language
//! and bind every value as a parameter.

use super::value_objects::{EmployeeRange, Filter, FilterCriteria};

/// Company columns a predicate may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompanyField {
    Name,
    LegalName,
    Domain,
    Country,
    Region,
    Employees,
    Categories,
    Technologies,
}

/// Fields the free-text search runs over.
pub const SEARCH_FIELDS: [CompanyField; 3] = [
    CompanyField::Name,
    CompanyField::LegalName,
    CompanyField::Domain,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Every child holds. An empty `And` matches everything.
    And(Vec<Predicate>),
    /// At least one child holds.
    Or(Vec<Predicate>),
    Eq(CompanyField, String),
    In(CompanyField, Vec<String>),
    /// Case-insensitive substring match; the needle is the raw user text.
    Substring(CompanyField, String),
    Gte(CompanyField, i64),
    Lte(CompanyField, i64),
    /// The array column contains the value.
    HasTag(CompanyField, String),
}

impl Predicate {
    pub fn always() -> Self {
        Predicate::And(Vec::new())
    }

    pub fn is_always(&self) -> bool {
        matches!(self, Predicate::And(children) if children.is_empty())
    }
}

pub fn search_predicate(text: &str) -> Predicate {
    Predicate::Or(
        SEARCH_FIELDS
            .iter()
            .map(|field| Predicate::Substring(*field, text.to_string()))
            .collect(),
    )
}

/// Equality for one value, membership for several.
pub fn scalar_predicate(field: CompanyField, filter: &Filter<String>) -> Option<Predicate> {
    match filter {
        Filter::None => None,
        Filter::One(value) => Some(Predicate::Eq(field, value.clone())),
        Filter::Many(values) => Some(Predicate::In(field, values.iter().cloned().collect())),
    }
}

/// Tag overlap: a row passes when its array shares any requested value.
pub fn tag_predicate(field: CompanyField, filter: &Filter<String>) -> Option<Predicate> {
    match filter {
        Filter::None => None,
        Filter::One(value) => Some(Predicate::HasTag(field, value.clone())),
        Filter::Many(values) => Some(Predicate::Or(
            values
                .iter()
                .map(|value| Predicate::HasTag(field, value.clone()))
                .collect(),
        )),
    }
}

pub fn employee_predicates(range: &EmployeeRange) -> Vec<Predicate> {
    let mut predicates = Vec::new();
    if let Some(min) = range.min {
        predicates.push(Predicate::Gte(CompanyField::Employees, min));
    }
    if let Some(max) = range.max {
        predicates.push(Predicate::Lte(CompanyField::Employees, max));
    }
    predicates
}

/// Conjunction of every field group the criteria constrain.
pub fn build_predicate(criteria: &FilterCriteria) -> Predicate {
    let mut clauses = Vec::new();

    if let Some(text) = criteria.search_text.as_deref() {
        clauses.push(search_predicate(text));
    }
    clauses.extend(scalar_predicate(CompanyField::Country, &criteria.countries));
    clauses.extend(scalar_predicate(CompanyField::Region, &criteria.regions));
    clauses.extend(employee_predicates(&criteria.employee_range));
    clauses.extend(tag_predicate(CompanyField::Categories, &criteria.categories));
    clauses.extend(tag_predicate(
        CompanyField::Technologies,
        &criteria.technologies,
    ));

    Predicate::And(clauses)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(value: &str) -> String {
        value.to_string()
    }

    #[test]
    fn test_empty_criteria_matches_everything() {
        assert!(build_predicate(&FilterCriteria::default()).is_always());
    }

    #[test]
    fn test_search_is_or_across_name_fields() {
        assert_eq!(
            search_predicate("acme"),
            Predicate::Or(vec![
                Predicate::Substring(CompanyField::Name, s("acme")),
                Predicate::Substring(CompanyField::LegalName, s("acme")),
                Predicate::Substring(CompanyField::Domain, s("acme")),
            ])
        );
    }

    #[test]
    fn test_country_equality_vs_membership() {
        assert_eq!(
            scalar_predicate(CompanyField::Country, &Filter::One(s("USA"))),
            Some(Predicate::Eq(CompanyField::Country, s("USA")))
        );
        assert_eq!(
            scalar_predicate(
                CompanyField::Country,
                &Filter::from_values([s("USA"), s("DEU")])
            ),
            Some(Predicate::In(CompanyField::Country, vec![s("DEU"), s("USA")]))
        );
        assert_eq!(scalar_predicate(CompanyField::Region, &Filter::None), None);
    }

    #[test]
    fn test_tags_use_or_of_contains() {
        assert_eq!(
            tag_predicate(
                CompanyField::Categories,
                &Filter::from_values([s("fintech"), s("healthcare")])
            ),
            Some(Predicate::Or(vec![
                Predicate::HasTag(CompanyField::Categories, s("fintech")),
                Predicate::HasTag(CompanyField::Categories, s("healthcare")),
            ]))
        );
        assert_eq!(
            tag_predicate(CompanyField::Technologies, &Filter::One(s("rust"))),
            Some(Predicate::HasTag(CompanyField::Technologies, s("rust")))
        );
    }

    #[test]
    fn test_employee_bounds_are_independent() {
        assert_eq!(
            employee_predicates(&EmployeeRange {
                min: Some(0),
                max: None
            }),
            vec![Predicate::Gte(CompanyField::Employees, 0)]
        );
        assert_eq!(
            employee_predicates(&EmployeeRange {
                min: None,
                max: Some(500)
            }),
            vec![Predicate::Lte(CompanyField::Employees, 500)]
        );
        assert!(employee_predicates(&EmployeeRange::default()).is_empty());
    }

    #[test]
    fn test_groups_are_conjunctive() {
        let criteria = FilterCriteria {
            search_text: Some(s("acme")),
            countries: Filter::One(s("USA")),
            categories: Filter::from_values([s("fintech"), s("healthcare")]),
            employee_range: EmployeeRange {
                min: Some(10),
                max: Some(100),
            },
            ..Default::default()
        };

        let Predicate::And(clauses) = build_predicate(&criteria) else {
            panic!("expected a conjunction");
        };
        assert_eq!(clauses.len(), 5);
        assert!(matches!(clauses[0], Predicate::Or(_)));
        assert_eq!(clauses[1], Predicate::Eq(CompanyField::Country, s("USA")));
        assert_eq!(clauses[2], Predicate::Gte(CompanyField::Employees, 10));
        assert_eq!(clauses[3], Predicate::Lte(CompanyField::Employees, 100));
        assert!(matches!(clauses[4], Predicate::Or(ref tags) if tags.len() == 2));
    }
}
