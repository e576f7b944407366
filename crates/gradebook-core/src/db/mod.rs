//! SQLite database module for gradebook

mod schema;
mod students;

use crate::error::{GradeError, Result};
use crate::map_db_err;
use crate::record::StudentRecord;
use crate::repository::{Aggregate, Filter, RankAssignment, Repository, SortField};
use chrono::{DateTime, Utc};
use rusqlite::Connection;
use std::path::Path;

pub use schema::{create_schema, SchemaCreateResult, CURRENT_SCHEMA_VERSION};

/// SQLite-backed student repository
#[derive(Debug)]
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create the database file at `db_path`
    #[tracing::instrument(skip(db_path), fields(path = %db_path.display()))]
    pub fn open(db_path: &Path, wal: bool) -> Result<Self> {
        let conn = Connection::open(db_path).map_err(|e| GradeError::StoreUnavailable {
            reason: format!("failed to open database at {}: {}", db_path.display(), e),
        })?;

        if wal {
            conn.pragma_update(None, "journal_mode", "WAL")
                .map_err(|e| GradeError::StoreUnavailable {
                    reason: format!("failed to enable WAL mode: {}", e),
                })?;
        }

        Self::from_connection(conn)
    }

    /// Open a private in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|e| GradeError::StoreUnavailable {
            reason: format!("failed to open in-memory database: {}", e),
        })?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        let schema = create_schema(&conn).map_err(|e| GradeError::StoreUnavailable {
            reason: format!("failed to create database schema: {}", e),
        })?;

        match schema {
            SchemaCreateResult::Created => tracing::info!("Created gradebook schema"),
            SchemaCreateResult::Current => {}
            SchemaCreateResult::Newer(v) => {
                return Err(GradeError::StoreUnavailable {
                    reason: format!(
                        "database schema version {} is newer than supported version {}",
                        v, CURRENT_SCHEMA_VERSION
                    ),
                })
            }
        }

        Ok(Database { conn })
    }

    pub fn get_schema_version(&self) -> Result<i32> {
        self.conn
            .query_row(
                "SELECT value FROM store_meta WHERE key = 'schema_version'",
                [],
                |r| {
                    let s: String = r.get(0)?;
                    Ok(s.parse().unwrap_or(0))
                },
            )
            .map_err(|e| map_db_err!("get schema version", e))
    }

    /// Take the write lock and open a transaction spanning several writes
    pub fn begin_unit(&mut self) -> Result<()> {
        self.conn
            .execute_batch("BEGIN IMMEDIATE")
            .map_err(|e| map_db_err!("begin unit of work", e))
    }

    pub fn commit_unit(&mut self) -> Result<()> {
        self.conn
            .execute_batch("COMMIT")
            .map_err(|e| map_db_err!("commit unit of work", e))
    }

    pub fn rollback_unit(&mut self) -> Result<()> {
        self.conn
            .execute_batch("ROLLBACK")
            .map_err(|e| map_db_err!("roll back unit of work", e))?;
        tracing::debug!("rollback_unit");
        Ok(())
    }
}

impl Repository for Database {
    fn insert(&mut self, record: StudentRecord) -> Result<StudentRecord> {
        self.insert_student(record)
    }

    fn delete(&mut self, id: &str) -> Result<StudentRecord> {
        self.delete_student(id)
    }

    fn get(&self, id: &str) -> Result<Option<StudentRecord>> {
        self.get_student(id)
    }

    fn find_by_id_or_name(&self, key: &str) -> Result<Vec<StudentRecord>> {
        self.find_students(key)
    }

    fn list_sorted_by(&self, field: SortField, descending: bool) -> Result<Vec<StudentRecord>> {
        self.query_students(&Filter::All, field, descending)
    }

    fn update_rank(&mut self, id: &str, rank: u32, at: DateTime<Utc>) -> Result<()> {
        self.update_student_rank(id, rank, at)
    }

    fn apply_ranks(&mut self, assignments: &[RankAssignment], at: DateTime<Utc>) -> Result<()> {
        self.apply_student_ranks(assignments, at)
    }

    fn count_where(&self, filter: &Filter) -> Result<usize> {
        self.count_students(filter)
    }

    fn find_where(
        &self,
        filter: &Filter,
        field: SortField,
        descending: bool,
    ) -> Result<Vec<StudentRecord>> {
        self.query_students(filter, field, descending)
    }

    fn aggregate(&self) -> Result<Option<Aggregate>> {
        self.aggregate_students()
    }

    fn begin(&mut self) -> Result<()> {
        self.begin_unit()
    }

    fn commit(&mut self) -> Result<()> {
        self.commit_unit()
    }

    fn rollback(&mut self) -> Result<()> {
        self.rollback_unit()
    }
}

impl Drop for Database {
    fn drop(&mut self) {
        // Fold the WAL back into the main file so the next open sees everything
        let _ = self.conn.pragma_update(None, "wal_checkpoint", "TRUNCATE");
    }
}

#[cfg(test)]
mod tests;
