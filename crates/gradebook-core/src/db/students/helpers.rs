use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::types::Value;

use crate::error::{GradeError, Result};
use crate::extract;
use crate::record::{Scores, StudentRecord};
use crate::repository::{Filter, SortField};

/// Column list shared by every record query, in `extract_student_row` order
pub(super) const STUDENT_COLUMNS: &str =
    "id, name, english, c_language, python, rank, created_at, updated_at";

pub(super) struct ExtractedStudentRow {
    id: String,
    name: String,
    english: i32,
    c_language: i32,
    python: i32,
    rank: u32,
    created_at: String,
    updated_at: String,
}

pub(super) fn extract_student_row(row: &rusqlite::Row) -> Result<ExtractedStudentRow> {
    Ok(ExtractedStudentRow {
        id: extract!(row, 0, "id")?,
        name: extract!(row, 1, "name")?,
        english: extract!(row, 2, "english")?,
        c_language: extract!(row, 3, "c_language")?,
        python: extract!(row, 4, "python")?,
        rank: extract!(row, 5, "rank")?,
        created_at: extract!(row, 6, "created_at")?,
        updated_at: extract!(row, 7, "updated_at")?,
    })
}

impl ExtractedStudentRow {
    /// Derived columns are not read back; they are recomputed from the scores
    pub(super) fn into_record(self) -> Result<StudentRecord> {
        Ok(StudentRecord::restore(
            self.id,
            self.name,
            Scores::new(self.english, self.c_language, self.python),
            self.rank,
            parse_datetime("created_at", &self.created_at)?,
            parse_datetime("updated_at", &self.updated_at)?,
        ))
    }
}

/// Fixed-width RFC 3339 so lexical order matches time order
pub(super) fn format_datetime(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

pub(super) fn parse_datetime(field: &str, raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| GradeError::field_extraction(field, e))
}

/// WHERE clause and bound parameters for a filter
pub(super) fn filter_clause(filter: &Filter) -> (&'static str, Vec<Value>) {
    match filter {
        Filter::All => ("1 = 1", Vec::new()),
        Filter::AverageAtLeast(threshold) => ("average >= ?1", vec![Value::Real(*threshold)]),
        Filter::TotalAtLeast(threshold) => ("total >= ?1", vec![Value::Integer(*threshold)]),
        Filter::GradeIs(grade) => ("grade = ?1", vec![Value::Text(grade.to_string())]),
    }
}

/// ORDER BY clause; rowid keeps ties in insertion order
pub(super) fn order_clause(field: SortField, descending: bool) -> String {
    format!(
        "\"{}\" {}, rowid ASC",
        field.column(),
        if descending { "DESC" } else { "ASC" }
    )
}
