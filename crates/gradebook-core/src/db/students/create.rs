use rusqlite::{params, ErrorCode};

use super::helpers::format_datetime;
use crate::error::{GradeError, Result};
use crate::record::StudentRecord;

impl super::super::Database {
    pub fn insert_student(&self, record: StudentRecord) -> Result<StudentRecord> {
        if self.student_exists(record.id())? {
            return Err(GradeError::duplicate(record.id()));
        }

        let record = record.into_unranked();
        self.insert_student_row(&record)?;

        tracing::debug!(id = record.id(), total = record.total(), "insert_student");
        Ok(record)
    }

    /// Write the row as given. The primary key still guards ids when the
    /// existence check raced or was skipped.
    pub(crate) fn insert_student_row(&self, record: &StudentRecord) -> Result<()> {
        let scores = record.scores();

        self.conn
            .execute(
                "INSERT INTO students (id, name, english, c_language, python, total, average, grade, rank, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
                params![
                    record.id(),
                    record.name(),
                    scores.english,
                    scores.c_language,
                    scores.python,
                    record.total(),
                    record.average(),
                    record.grade().as_str(),
                    record.rank(),
                    format_datetime(record.created_at()),
                    format_datetime(record.updated_at()),
                ],
            )
            .map_err(|e| match e {
                rusqlite::Error::SqliteFailure(ref err, _)
                    if err.code == ErrorCode::ConstraintViolation =>
                {
                    GradeError::duplicate(record.id())
                }
                e => GradeError::StoreUnavailable {
                    reason: format!("failed to insert student {}: {}", record.id(), e),
                },
            })?;
        Ok(())
    }

    pub(crate) fn student_exists(&self, id: &str) -> Result<bool> {
        self.conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM students WHERE id = ?1)",
                params![id],
                |r| r.get(0),
            )
            .map_err(|e| GradeError::StoreUnavailable {
                reason: format!("failed to look up student {}: {}", id, e),
            })
    }
}
