//! Accepted column-name variants for each logical field.
//!
//! Source files arrive in two shapes: exported spreadsheets with
//! human-readable headers, and system extracts with snake_case headers. Each
//! field lists its variants in preference order; the first present, non-empty
//! one wins.

use std::collections::HashMap;

pub const COURSE_CODE: &[&str] = &["Course Code", "course_code"];
pub const CODE_DESCRIPTION: &[&str] = &["Course Code Description", "code_description"];
pub const DESCRIPTION: &[&str] = &["Course Description", "description"];
pub const SUBJECT_AREA: &[&str] = &["Subject Area", "subject_area"];
pub const LEVEL: &[&str] = &["Course Level", "level"];
pub const CTE_INDICATOR: &[&str] = &["CTE Indicator", "cte_indicator"];

pub const CERTIFICATION_AREA_CODE: &[&str] =
    &["Certification Area Code", "certification_area_code"];
pub const CERTIFICATION_AREA_DESCRIPTION: &[&str] = &[
    "Certification Area Description",
    "certification_area_description",
];

/// Returns the first alias that is present in the row with a non-empty value.
pub fn pick<'a>(row: &'a HashMap<String, String>, aliases: &[&str]) -> Option<&'a str> {
    aliases.iter().find_map(|name| {
        row.get(*name)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    })
}

/// Returns whether any alias appears as a column in the row, regardless of
/// its value. Used for table detection, which keys off header presence.
pub fn has_any(row: &HashMap<String, String>, aliases: &[&str]) -> bool {
    aliases.iter().any(|name| row.contains_key(*name))
}
