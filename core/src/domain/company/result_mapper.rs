use chrono::{DateTime, Utc};

use super::{
    entities::{Company, CompanyItem},
    value_objects::{FilterCriteria, Paginated},
};

pub const UNKNOWN_COMPANY_NAME: &str = "Unknown";

const NUMERIC_ID_HEX_DIGITS: usize = 10;

/// Legacy numeric surrogate for a canonical string id.
///
/// Keeps the first ten hex digits and parses them base-16, so distinct ids
/// can collide. Missing or hex-free ids map to `0`.
pub fn derive_numeric_id(id: Option<&str>) -> u64 {
    let Some(id) = id else {
        return 0;
    };

    let digits: String = id
        .chars()
        .filter(char::is_ascii_hexdigit)
        .take(NUMERIC_ID_HEX_DIGITS)
        .collect();

    u64::from_str_radix(&digits, 16).unwrap_or(0)
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|value| value.trim()).filter(|value| !value.is_empty())
}

pub fn display_name(company: &Company) -> String {
    non_blank(company.name.as_ref())
        .or_else(|| non_blank(company.legal_name.as_ref()))
        .unwrap_or(UNKNOWN_COMPANY_NAME)
        .to_string()
}

/// `now` stands in for timestamps the row does not carry; it is not stored.
pub fn to_item(company: Company, now: DateTime<Utc>) -> CompanyItem {
    CompanyItem {
        id: derive_numeric_id(company.id.as_deref()),
        name: display_name(&company),
        uuid: company.id,
        legal_name: company.legal_name,
        domain: company.domain,
        country: company.country,
        region: company.region,
        address: company.address,
        latitude: company.latitude,
        longitude: company.longitude,
        employees: company.employees,
        categories: company.categories,
        technologies: company.technologies,
        email: company.email,
        phone: company.phone,
        linkedin_url: company.linkedin_url,
        twitter_url: company.twitter_url,
        created_at: company.created_at.unwrap_or(now),
        updated_at: company.updated_at.unwrap_or(now),
    }
}

pub fn map_to_items(
    rows: Vec<Company>,
    total_count: u64,
    criteria: &FilterCriteria,
) -> Paginated<CompanyItem> {
    let now = Utc::now();
    let items = rows.into_iter().map(|row| to_item(row, now)).collect();

    Paginated::new(items, criteria.page, criteria.page_size, total_count)
}
