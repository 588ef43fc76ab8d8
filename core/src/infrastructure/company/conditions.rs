//! Translation of company predicates into sea-orm conditions.

use sea_orm::{
    ColumnTrait, Condition,
    sea_query::{
        Expr, LikeExpr, SimpleExpr,
        extension::postgres::{PgExpr, PgFunc},
    },
};

use crate::domain::company::{
    predicate::{CompanyField, Predicate},
    query::SortField,
};
use crate::entity::companies::{Column as CompanyColumn, Entity as CompanyEntity};

pub fn column(field: CompanyField) -> CompanyColumn {
    match field {
        CompanyField::Name => CompanyColumn::Name,
        CompanyField::LegalName => CompanyColumn::LegalName,
        CompanyField::Domain => CompanyColumn::Domain,
        CompanyField::Country => CompanyColumn::Country,
        CompanyField::Region => CompanyColumn::Region,
        CompanyField::Employees => CompanyColumn::Employees,
        CompanyField::Categories => CompanyColumn::Categories,
        CompanyField::Technologies => CompanyColumn::Technologies,
    }
}

pub fn sort_column(field: SortField) -> CompanyColumn {
    match field {
        SortField::CreatedAt => CompanyColumn::CreatedAt,
        SortField::UpdatedAt => CompanyColumn::UpdatedAt,
        SortField::Name => CompanyColumn::Name,
        SortField::LegalName => CompanyColumn::LegalName,
        SortField::Domain => CompanyColumn::Domain,
        SortField::Country => CompanyColumn::Country,
        SortField::Region => CompanyColumn::Region,
        SortField::Employees => CompanyColumn::Employees,
    }
}

/// Escapes LIKE wildcards so user text only ever matches literally.
pub fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

fn contains_pattern(text: &str) -> LikeExpr {
    LikeExpr::new(format!("%{}%", escape_like(text))).escape('\\')
}

fn has_tag(field: CompanyField, tag: &str) -> SimpleExpr {
    Expr::val(tag).eq(PgFunc::any(Expr::col((CompanyEntity, column(field)))))
}

pub fn to_condition(predicate: &Predicate) -> Condition {
    match predicate {
        Predicate::And(children) => children
            .iter()
            .fold(Condition::all(), |acc, child| acc.add(to_condition(child))),
        Predicate::Or(children) => children
            .iter()
            .fold(Condition::any(), |acc, child| acc.add(to_condition(child))),
        Predicate::Eq(field, value) => Condition::all().add(column(*field).eq(value.as_str())),
        Predicate::In(field, values) => {
            Condition::all().add(column(*field).is_in(values.iter().map(String::as_str)))
        }
        Predicate::Substring(field, text) => Condition::all().add(
            Expr::col((CompanyEntity, column(*field))).ilike(contains_pattern(text)),
        ),
        Predicate::Gte(field, min) => Condition::all().add(column(*field).gte(*min)),
        Predicate::Lte(field, max) => Condition::all().add(column(*field).lte(*max)),
        Predicate::HasTag(field, tag) => Condition::all().add(has_tag(*field, tag)),
    }
}
