use crate::{certification_data::CertificationMappingRecord, course_data::CourseRecord};
use serde::Serialize;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Which table a CSV file feeds. Decided once per file from the first row's
/// headers; later rows are interpreted under this choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CsvTable {
    Courses,
    CertificationMappings,
}

impl Display for CsvTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            CsvTable::Courses => write!(f, "courses"),
            CsvTable::CertificationMappings => write!(f, "certification_mappings"),
        }
    }
}

/// Per-row parse result: a typed record, or the name of the first required
/// field the row was missing.
pub type RowParse<T> = Result<T, &'static str>;

/// Typed output of parsing one CSV file, in file row order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvRows {
    Courses(Vec<RowParse<CourseRecord>>),
    CertificationMappings(Vec<RowParse<CertificationMappingRecord>>),
}

impl CsvRows {
    pub fn table(&self) -> CsvTable {
        match self {
            CsvRows::Courses(_) => CsvTable::Courses,
            CsvRows::CertificationMappings(_) => CsvTable::CertificationMappings,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            CsvRows::Courses(rows) => rows.len(),
            CsvRows::CertificationMappings(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// What happened to one row during an import. Individual failures never abort
/// the file; they are recorded here and the import moves on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Inserted,
    AlreadyExists,
    MissingField(&'static str),
    Failed(String),
}

/// Aggregate result of one import run, one outcome per file row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub table: CsvTable,
    pub outcomes: Vec<RowOutcome>,
}

impl ImportSummary {
    pub fn new(table: CsvTable) -> Self {
        Self {
            table,
            outcomes: Vec::new(),
        }
    }

    pub fn record(&mut self, outcome: RowOutcome) {
        self.outcomes.push(outcome);
    }

    /// Rows actually written. This is the only number the HTTP contract
    /// reports; the rest of the outcomes exist for logging and tests.
    pub fn inserted(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| **o == RowOutcome::Inserted)
            .count()
    }

    pub fn rows(&self) -> usize {
        self.outcomes.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_summary_counts_only_inserts() {
        let mut summary = ImportSummary::new(CsvTable::Courses);
        summary.record(RowOutcome::Inserted);
        summary.record(RowOutcome::AlreadyExists);
        summary.record(RowOutcome::MissingField("course_code"));
        summary.record(RowOutcome::Failed("connection reset".to_string()));
        summary.record(RowOutcome::Inserted);

        assert_eq!(summary.rows(), 5);
        assert_eq!(summary.inserted(), 2);
    }

    #[test]
    fn test_table_display() {
        assert_eq!(CsvTable::Courses.to_string(), "courses");
        assert_eq!(
            CsvTable::CertificationMappings.to_string(),
            "certification_mappings"
        );
    }
}
