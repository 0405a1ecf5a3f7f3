use crate::columns::{self, has_any, pick};
use log::warn;
use models::{
    certification_data::CertificationMappingRecord,
    course_data::CourseRecord,
    import_data::{CsvRows, RowParse},
};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    /// The file parsed cleanly but held no data rows.
    #[error("no data rows found in uploaded file")]
    Empty,
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
}

/// Parses an uploaded CSV buffer into typed rows, preserving file order.
///
/// The table is detected once from the first row: a file carrying any
/// certification-area-code column is mapping data, anything else is course
/// data. Rows missing required fields become `Err(field)` entries rather than
/// failing the whole file.
pub fn parse_rows(data: &[u8]) -> Result<CsvRows, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(data);

    let rows = reader
        .deserialize::<HashMap<String, String>>()
        .collect::<Result<Vec<_>, csv::Error>>()?;

    if rows.is_empty() {
        return Err(ParseError::Empty);
    }

    if has_any(&rows[0], columns::CERTIFICATION_AREA_CODE) {
        Ok(CsvRows::CertificationMappings(
            rows.iter().map(parse_mapping_row).collect(),
        ))
    } else {
        Ok(CsvRows::Courses(rows.iter().map(parse_course_row).collect()))
    }
}

fn parse_course_row(row: &HashMap<String, String>) -> RowParse<CourseRecord> {
    let code = required(row, columns::COURSE_CODE, "course_code")?;
    let code_description = required(row, columns::CODE_DESCRIPTION, "code_description")?;

    Ok(CourseRecord {
        code: code.to_string(),
        code_description: code_description.to_string(),
        description: optional(row, columns::DESCRIPTION),
        subject_area: optional(row, columns::SUBJECT_AREA),
        level: optional(row, columns::LEVEL),
        cte_indicator: pick(row, columns::CTE_INDICATOR)
            .unwrap_or(CourseRecord::CTE_NO)
            .to_string(),
    })
}

fn parse_mapping_row(row: &HashMap<String, String>) -> RowParse<CertificationMappingRecord> {
    let course_code = required(row, columns::COURSE_CODE, "course_code")?;
    let area_code = required(
        row,
        columns::CERTIFICATION_AREA_CODE,
        "certification_area_code",
    )?;
    let area_description = required(
        row,
        columns::CERTIFICATION_AREA_DESCRIPTION,
        "certification_area_description",
    )?;

    Ok(CertificationMappingRecord::new(
        course_code,
        area_code,
        area_description,
    ))
}

fn required<'a>(
    row: &'a HashMap<String, String>,
    aliases: &[&str],
    field: &'static str,
) -> Result<&'a str, &'static str> {
    match pick(row, aliases) {
        Some(value) => Ok(value),
        None => {
            warn!("skipping row with missing required field '{field}'");
            Err(field)
        }
    }
}

fn optional(row: &HashMap<String, String>, aliases: &[&str]) -> String {
    pick(row, aliases).unwrap_or_default().to_string()
}
