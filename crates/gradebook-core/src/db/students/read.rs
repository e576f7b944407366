use rusqlite::{params, params_from_iter};

use super::helpers::{extract_student_row, filter_clause, order_clause, STUDENT_COLUMNS};
use crate::error::Result;
use crate::map_db_err;
use crate::record::StudentRecord;
use crate::repository::{Aggregate, Filter, SortField};

impl super::super::Database {
    pub fn get_student(&self, id: &str) -> Result<Option<StudentRecord>> {
        let sql = format!("SELECT {} FROM students WHERE id = ?1", STUDENT_COLUMNS);
        let mut records = self.collect_students(&sql, vec![id.to_string().into()])?;
        Ok(records.pop())
    }

    /// Exact match on id OR name, in insertion order
    pub fn find_students(&self, key: &str) -> Result<Vec<StudentRecord>> {
        let sql = format!(
            "SELECT {} FROM students WHERE id = ?1 OR name = ?1 ORDER BY rowid ASC",
            STUDENT_COLUMNS
        );
        self.collect_students(&sql, vec![key.to_string().into()])
    }

    pub fn query_students(
        &self,
        filter: &Filter,
        field: SortField,
        descending: bool,
    ) -> Result<Vec<StudentRecord>> {
        let (clause, values) = filter_clause(filter);
        let sql = format!(
            "SELECT {} FROM students WHERE {} ORDER BY {}",
            STUDENT_COLUMNS,
            clause,
            order_clause(field, descending)
        );
        self.collect_students(&sql, values)
    }

    pub fn count_students(&self, filter: &Filter) -> Result<usize> {
        let (clause, values) = filter_clause(filter);
        let sql = format!("SELECT COUNT(*) FROM students WHERE {}", clause);
        let count: i64 = self
            .conn
            .query_row(&sql, params_from_iter(values), |r| r.get(0))
            .map_err(|e| map_db_err!("count students", e))?;
        Ok(count as usize)
    }

    pub fn aggregate_students(&self) -> Result<Option<Aggregate>> {
        let row = self
            .conn
            .query_row(
                "SELECT COUNT(*), AVG(english), AVG(c_language), AVG(python), AVG(total), MAX(total), MIN(total)
                 FROM students",
                params![],
                |r| {
                    Ok((
                        r.get::<_, i64>(0)?,
                        r.get::<_, Option<f64>>(1)?,
                        r.get::<_, Option<f64>>(2)?,
                        r.get::<_, Option<f64>>(3)?,
                        r.get::<_, Option<f64>>(4)?,
                        r.get::<_, Option<i64>>(5)?,
                        r.get::<_, Option<i64>>(6)?,
                    ))
                },
            )
            .map_err(|e| map_db_err!("aggregate students", e))?;

        match row {
            (count, Some(english), Some(c_language), Some(python), Some(total), Some(max), Some(min))
                if count > 0 =>
            {
                Ok(Some(Aggregate {
                    count: count as usize,
                    avg_english: english,
                    avg_c_language: c_language,
                    avg_python: python,
                    avg_total: total,
                    max_total: max,
                    min_total: min,
                }))
            }
            _ => Ok(None),
        }
    }

    fn collect_students(
        &self,
        sql: &str,
        values: Vec<rusqlite::types::Value>,
    ) -> Result<Vec<StudentRecord>> {
        let mut stmt = self
            .conn
            .prepare(sql)
            .map_err(|e| map_db_err!("prepare student query", e))?;

        let mut rows = stmt
            .query(params_from_iter(values))
            .map_err(|e| map_db_err!("query students", e))?;

        let mut records = Vec::new();
        while let Some(row) = rows
            .next()
            .map_err(|e| map_db_err!("read student row", e))?
        {
            records.push(extract_student_row(row)?.into_record()?);
        }
        Ok(records)
    }
}
