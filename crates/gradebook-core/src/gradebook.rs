//! Orchestration of "mutate, then re-rank"
//!
//! [`Gradebook`] owns an injected repository and clock. Every structural
//! mutation it performs is followed by a full rank pass before it returns, so
//! callers never observe stale ranks. The mutation and its rank pass share one
//! repository unit of work: if either fails, neither is kept.

use serde::Serialize;

use crate::clock::{Clock, SystemClock};
use crate::error::{GradeError, Result};
use crate::rank;
use crate::record::{NewStudent, StudentRecord};
use crate::repository::{Filter, Repository, SortField};
use crate::stats::{self, Summary, ThresholdReport};

/// Entry rejected from a batch insert
#[derive(Debug, Serialize)]
pub struct Rejected {
    pub id: String,
    pub reason: String,
}

/// Outcome of [`Gradebook::add_batch`]
#[derive(Debug, Default, Serialize)]
pub struct BatchOutcome {
    pub inserted: Vec<StudentRecord>,
    pub rejected: Vec<Rejected>,
}

#[derive(Debug)]
pub struct Gradebook<R, C = SystemClock> {
    repo: R,
    clock: C,
}

impl<R: Repository> Gradebook<R, SystemClock> {
    pub fn with_system_clock(repo: R) -> Self {
        Self::new(repo, SystemClock)
    }
}

impl<R: Repository, C: Clock> Gradebook<R, C> {
    pub fn new(repo: R, clock: C) -> Self {
        Self { repo, clock }
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    pub fn into_inner(self) -> R {
        self.repo
    }

    /// Insert one student and re-rank; returns the record with its new rank
    pub fn add(&mut self, student: NewStudent) -> Result<StudentRecord> {
        let record = StudentRecord::new(student, self.clock.now());
        self.in_unit(|book| {
            let stored = book.repo.insert(record)?;
            book.recompute_ranks()?;
            book.reload(stored.id())
        })
    }

    /// Insert many students with a single trailing rank pass.
    ///
    /// Duplicate ids are collected in `rejected` and the rest of the batch
    /// still goes in. Any other failure, including the rank pass, discards
    /// the whole batch.
    pub fn add_batch<I>(&mut self, students: I) -> Result<BatchOutcome>
    where
        I: IntoIterator<Item = NewStudent>,
    {
        self.in_unit(|book| {
            let mut outcome = BatchOutcome::default();

            for student in students {
                let record = StudentRecord::new(student, book.clock.now());
                match book.repo.insert(record) {
                    Ok(stored) => outcome.inserted.push(stored),
                    Err(GradeError::DuplicateIdentifier { id }) => {
                        tracing::warn!(%id, "skipping duplicate student");
                        let reason = GradeError::duplicate(&id).to_string();
                        outcome.rejected.push(Rejected { id, reason });
                    }
                    Err(err) => return Err(err),
                }
            }

            if !outcome.inserted.is_empty() {
                book.recompute_ranks()?;
            }

            outcome.inserted = outcome
                .inserted
                .iter()
                .map(|r| book.reload(r.id()))
                .collect::<Result<Vec<_>>>()?;
            Ok(outcome)
        })
    }

    /// Delete a student and re-rank the rest
    pub fn remove(&mut self, id: &str) -> Result<StudentRecord> {
        self.in_unit(|book| {
            let removed = book.repo.delete(id)?;
            book.recompute_ranks()?;
            Ok(removed)
        })
    }

    pub fn find(&self, key: &str) -> Result<Vec<StudentRecord>> {
        self.repo.find_by_id_or_name(key)
    }

    pub fn get(&self, id: &str) -> Result<Option<StudentRecord>> {
        self.repo.get(id)
    }

    pub fn list_sorted(&self, field: SortField, descending: bool) -> Result<Vec<StudentRecord>> {
        self.repo.list_sorted_by(field, descending)
    }

    pub fn list_where(
        &self,
        filter: &Filter,
        field: SortField,
        descending: bool,
    ) -> Result<Vec<StudentRecord>> {
        self.repo.find_where(filter, field, descending)
    }

    pub fn count(&self) -> Result<usize> {
        self.repo.count()
    }

    pub fn recompute_ranks(&mut self) -> Result<usize> {
        rank::recompute_ranks(&mut self.repo, &self.clock)
    }

    pub fn summarize(&self) -> Result<Summary> {
        stats::summarize(&self.repo)
    }

    pub fn at_or_above(&self, threshold: f64) -> Result<ThresholdReport> {
        stats::count_at_or_above(&self.repo, threshold)
    }

    fn reload(&self, id: &str) -> Result<StudentRecord> {
        self.repo.get(id)?.ok_or_else(|| GradeError::not_found(id))
    }

    /// Run `op` inside one repository unit of work, rolling back on error
    fn in_unit<T>(&mut self, op: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        self.repo.begin()?;
        let result = op(self).and_then(|value| self.repo.commit().map(|()| value));

        if let Err(err) = &result {
            tracing::debug!(error = %err, "rolling back");
            if let Err(rollback_err) = self.repo.rollback() {
                tracing::error!(error = %rollback_err, "rollback failed");
            }
        }
        result
    }
}
