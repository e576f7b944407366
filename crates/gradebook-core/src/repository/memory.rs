use chrono::{DateTime, Utc};

use super::{Aggregate, Filter, RankAssignment, Repository, SortField};
use crate::error::{GradeError, Result};
use crate::record::StudentRecord;

/// Non-persistent repository holding records in insertion order
#[derive(Debug, Default, Clone)]
pub struct InMemoryRepository {
    records: Vec<StudentRecord>,
    /// Snapshot taken by `begin`, put back by `rollback`
    checkpoint: Option<Vec<StudentRecord>>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id() == id)
    }
}

fn sorted(
    mut records: Vec<StudentRecord>,
    field: SortField,
    descending: bool,
) -> Vec<StudentRecord> {
    // sort_by is stable, so ties keep insertion order in both directions
    if descending {
        records.sort_by(|a, b| field.compare(b, a));
    } else {
        records.sort_by(|a, b| field.compare(a, b));
    }
    records
}

impl Repository for InMemoryRepository {
    fn insert(&mut self, record: StudentRecord) -> Result<StudentRecord> {
        if self.position(record.id()).is_some() {
            return Err(GradeError::duplicate(record.id()));
        }
        let record = record.into_unranked();
        self.records.push(record.clone());
        tracing::debug!(id = record.id(), total = record.total(), "insert");
        Ok(record)
    }

    fn delete(&mut self, id: &str) -> Result<StudentRecord> {
        let index = self.position(id).ok_or_else(|| GradeError::not_found(id))?;
        let removed = self.records.remove(index);
        tracing::debug!(id, "delete");
        Ok(removed)
    }

    fn get(&self, id: &str) -> Result<Option<StudentRecord>> {
        Ok(self.position(id).map(|i| self.records[i].clone()))
    }

    fn find_by_id_or_name(&self, key: &str) -> Result<Vec<StudentRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.id() == key || r.name() == key)
            .cloned()
            .collect())
    }

    fn list_sorted_by(&self, field: SortField, descending: bool) -> Result<Vec<StudentRecord>> {
        Ok(sorted(self.records.clone(), field, descending))
    }

    fn update_rank(&mut self, id: &str, rank: u32, at: DateTime<Utc>) -> Result<()> {
        let index = self.position(id).ok_or_else(|| GradeError::not_found(id))?;
        self.records[index].set_rank(rank, at);
        Ok(())
    }

    fn apply_ranks(&mut self, assignments: &[RankAssignment], at: DateTime<Utc>) -> Result<()> {
        // Resolve every id before writing so a miss leaves no partial pass
        let indices = assignments
            .iter()
            .map(|a| self.position(&a.id).ok_or_else(|| GradeError::not_found(&a.id)))
            .collect::<Result<Vec<_>>>()?;

        for (index, assignment) in indices.into_iter().zip(assignments) {
            self.records[index].set_rank(assignment.rank, at);
        }
        Ok(())
    }

    fn count_where(&self, filter: &Filter) -> Result<usize> {
        Ok(self.records.iter().filter(|r| filter.matches(r)).count())
    }

    fn find_where(
        &self,
        filter: &Filter,
        field: SortField,
        descending: bool,
    ) -> Result<Vec<StudentRecord>> {
        let matching = self
            .records
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect();
        Ok(sorted(matching, field, descending))
    }

    fn aggregate(&self) -> Result<Option<Aggregate>> {
        Ok(Aggregate::from_records(&self.records))
    }

    fn begin(&mut self) -> Result<()> {
        if self.checkpoint.is_some() {
            return Err(GradeError::Other("unit of work already open".to_string()));
        }
        self.checkpoint = Some(self.records.clone());
        Ok(())
    }

    fn commit(&mut self) -> Result<()> {
        self.checkpoint
            .take()
            .map(|_| ())
            .ok_or_else(|| GradeError::Other("no unit of work to commit".to_string()))
    }

    fn rollback(&mut self) -> Result<()> {
        let snapshot = self
            .checkpoint
            .take()
            .ok_or_else(|| GradeError::Other("no unit of work to roll back".to_string()))?;
        self.records = snapshot;
        tracing::debug!(records = self.records.len(), "rollback");
        Ok(())
    }
}
