use rusqlite::params;

use crate::error::{GradeError, Result};
use crate::record::StudentRecord;

impl super::super::Database {
    /// Remove a student and return the row as it was
    pub fn delete_student(&self, id: &str) -> Result<StudentRecord> {
        let existing = self
            .get_student(id)?
            .ok_or_else(|| GradeError::not_found(id))?;

        let affected = self
            .conn
            .execute("DELETE FROM students WHERE id = ?1", params![id])
            .map_err(|e| GradeError::StoreUnavailable {
                reason: format!("failed to delete student {}: {}", id, e),
            })?;

        if affected == 0 {
            return Err(GradeError::not_found(id));
        }

        tracing::debug!(id, "delete_student");
        Ok(existing)
    }
}
