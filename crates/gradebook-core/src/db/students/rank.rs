use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, TransactionBehavior};

use super::helpers::format_datetime;
use crate::error::{GradeError, Result};
use crate::map_db_err;
use crate::repository::RankAssignment;

const UPDATE_RANK_SQL: &str = "UPDATE students SET rank = ?1, updated_at = ?2 WHERE id = ?3";

impl super::super::Database {
    pub fn update_student_rank(&self, id: &str, rank: u32, at: DateTime<Utc>) -> Result<()> {
        let affected = self
            .conn
            .execute(UPDATE_RANK_SQL, params![rank, format_datetime(at), id])
            .map_err(|e| map_db_err!("update rank", e))?;

        if affected == 0 {
            return Err(GradeError::not_found(id));
        }
        Ok(())
    }

    /// Write a whole rank pass atomically.
    ///
    /// Outside a unit of work the pass takes its own immediate transaction, so
    /// the write lock is held from the first rank update to the last. Inside
    /// one it runs under a savepoint. Either way a failure rolls the pass back.
    pub fn apply_student_ranks(
        &mut self,
        assignments: &[RankAssignment],
        at: DateTime<Utc>,
    ) -> Result<()> {
        let stamp = format_datetime(at);

        if self.conn.is_autocommit() {
            let tx = self
                .conn
                .transaction_with_behavior(TransactionBehavior::Immediate)
                .map_err(|e| map_db_err!("begin rank transaction", e))?;
            write_ranks(&tx, assignments, &stamp)?;
            tx.commit()
                .map_err(|e| map_db_err!("commit rank transaction", e))?;
        } else {
            let sp = self
                .conn
                .savepoint()
                .map_err(|e| map_db_err!("open rank savepoint", e))?;
            write_ranks(&sp, assignments, &stamp)?;
            sp.commit()
                .map_err(|e| map_db_err!("release rank savepoint", e))?;
        }

        tracing::debug!(ranked = assignments.len(), "apply_student_ranks");
        Ok(())
    }
}

/// Returning early drops the caller's transaction, which rolls back the
/// partial pass
fn write_ranks(conn: &Connection, assignments: &[RankAssignment], stamp: &str) -> Result<()> {
    let mut stmt = conn
        .prepare_cached(UPDATE_RANK_SQL)
        .map_err(|e| map_db_err!("prepare rank update", e))?;

    for assignment in assignments {
        let affected = stmt
            .execute(params![assignment.rank, stamp, assignment.id])
            .map_err(|e| map_db_err!("update rank", e))?;
        if affected == 0 {
            return Err(GradeError::not_found(&assignment.id));
        }
    }
    Ok(())
}
