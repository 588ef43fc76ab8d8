//! Employee-count bucket parsing.
//!
//! Bucket labels such as `"1-10 employees"`, `"501-1,000 employees"` or
//! `"10,001+"` come straight from UI pickers and imported data. Parsing is
//! total: anything unrecognised yields the match-everything range.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const NUMBER: &str = r"(\d{1,3}(?:,\d{3})+|\d+)";

static EMPLOYEES_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)employees").expect("valid regex"));
static BOUNDED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"^{NUMBER}\s*-\s*{NUMBER}$")).expect("valid regex"));
static OPEN_ENDED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"^{NUMBER}\s*\+$")).expect("valid regex"));
static SINGLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"^{NUMBER}$")).expect("valid regex"));

/// Inclusive employee-count range. `max == None` means unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SizeRange {
    pub min: u64,
    pub max: Option<u64>,
}

impl SizeRange {
    pub const ANY: SizeRange = SizeRange { min: 0, max: None };

    pub fn bounded(min: u64, max: u64) -> Self {
        if min <= max {
            Self {
                min,
                max: Some(max),
            }
        } else {
            Self {
                min: max,
                max: Some(min),
            }
        }
    }

    pub fn at_least(min: u64) -> Self {
        Self { min, max: None }
    }

    pub fn is_unbounded(&self) -> bool {
        self.max.is_none()
    }

    pub fn contains(&self, employees: u64) -> bool {
        employees >= self.min && self.max.is_none_or(|max| employees <= max)
    }
}

fn parse_number(text: &str) -> Option<u64> {
    text.replace(',', "").parse().ok()
}

pub fn parse_size_range(text: &str) -> SizeRange {
    let cleaned = EMPLOYEES_WORD.replace_all(text, "");
    let cleaned = cleaned.trim();

    if let Some(caps) = BOUNDED.captures(cleaned)
        && let (Some(min), Some(max)) = (parse_number(&caps[1]), parse_number(&caps[2]))
    {
        return SizeRange::bounded(min, max);
    }

    if let Some(caps) = OPEN_ENDED.captures(cleaned)
        && let Some(min) = parse_number(&caps[1])
    {
        return SizeRange::at_least(min);
    }

    if let Some(caps) = SINGLE.captures(cleaned)
        && let Some(value) = parse_number(&caps[1])
    {
        return SizeRange::bounded(value, value);
    }

    SizeRange::ANY
}
