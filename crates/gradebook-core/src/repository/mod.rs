//! Persistence contract for student records
//!
//! A [`Repository`] owns the authoritative collection. It enforces id
//! uniqueness and answers queries, but never re-derives ranks on its own:
//! callers run [`crate::rank::recompute_ranks`] after every insert or delete.

mod memory;

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{GradeError, Result};
use crate::grade::Grade;
use crate::record::StudentRecord;

pub use memory::InMemoryRepository;

/// One rank computed by a rank pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankAssignment {
    pub id: String,
    pub rank: u32,
}

/// Field a listing can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Name,
    English,
    CLanguage,
    Python,
    Total,
    Average,
    Rank,
    CreatedAt,
}

impl SortField {
    pub const ALL: [SortField; 9] = [
        SortField::Id,
        SortField::Name,
        SortField::English,
        SortField::CLanguage,
        SortField::Python,
        SortField::Total,
        SortField::Average,
        SortField::Rank,
        SortField::CreatedAt,
    ];

    /// Column name in the persisted schema
    pub fn column(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Name => "name",
            SortField::English => "english",
            SortField::CLanguage => "c_language",
            SortField::Python => "python",
            SortField::Total => "total",
            SortField::Average => "average",
            SortField::Rank => "rank",
            SortField::CreatedAt => "created_at",
        }
    }

    /// Ascending comparison of two records on this field
    pub fn compare(&self, a: &StudentRecord, b: &StudentRecord) -> Ordering {
        match self {
            SortField::Id => a.id().cmp(b.id()),
            SortField::Name => a.name().cmp(b.name()),
            SortField::English => a.scores().english.cmp(&b.scores().english),
            SortField::CLanguage => a.scores().c_language.cmp(&b.scores().c_language),
            SortField::Python => a.scores().python.cmp(&b.scores().python),
            SortField::Total => a.total().cmp(&b.total()),
            SortField::Average => a.average().total_cmp(&b.average()),
            SortField::Rank => a.rank().cmp(&b.rank()),
            SortField::CreatedAt => a.created_at().cmp(&b.created_at()),
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for SortField {
    type Err = GradeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        SortField::ALL
            .iter()
            .find(|f| f.column() == normalized)
            .copied()
            .ok_or_else(|| GradeError::invalid_input("sort field", s))
    }
}

/// Predicate for counting and filtered queries
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Filter {
    All,
    AverageAtLeast(f64),
    TotalAtLeast(i64),
    GradeIs(Grade),
}

impl Filter {
    pub fn matches(&self, record: &StudentRecord) -> bool {
        match self {
            Filter::All => true,
            Filter::AverageAtLeast(threshold) => record.average() >= *threshold,
            Filter::TotalAtLeast(threshold) => record.total() >= *threshold,
            Filter::GradeIs(grade) => record.grade() == *grade,
        }
    }
}

/// Raw aggregate over the whole collection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Aggregate {
    pub count: usize,
    pub avg_english: f64,
    pub avg_c_language: f64,
    pub avg_python: f64,
    pub avg_total: f64,
    pub max_total: i64,
    pub min_total: i64,
}

impl Aggregate {
    /// Fold records into an aggregate; `None` when there are none
    pub fn from_records<'a, I>(records: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a StudentRecord>,
    {
        let mut count = 0usize;
        let (mut english, mut c_language, mut python) = (0i64, 0i64, 0i64);
        let mut total = 0i128;
        let mut max_total = i64::MIN;
        let mut min_total = i64::MAX;

        for record in records {
            let scores = record.scores();
            count += 1;
            english += i64::from(scores.english);
            c_language += i64::from(scores.c_language);
            python += i64::from(scores.python);
            total += i128::from(record.total());
            max_total = max_total.max(record.total());
            min_total = min_total.min(record.total());
        }

        if count == 0 {
            return None;
        }

        let n = count as f64;
        Some(Aggregate {
            count,
            avg_english: english as f64 / n,
            avg_c_language: c_language as f64 / n,
            avg_python: python as f64 / n,
            avg_total: total as f64 / n,
            max_total,
            min_total,
        })
    }
}

/// Storage for the student collection.
///
/// Every operation is total over an empty collection: queries return empty
/// results rather than errors.
pub trait Repository {
    /// Store a new record with rank 0.
    ///
    /// Fails with `DuplicateIdentifier` if the id is taken. Ranks are left
    /// stale; the caller recomputes them.
    fn insert(&mut self, record: StudentRecord) -> Result<StudentRecord>;

    /// Remove a record by id and return it.
    ///
    /// Fails with `NotFound` if absent. Ranks are left stale; the caller
    /// recomputes them.
    fn delete(&mut self, id: &str) -> Result<StudentRecord>;

    fn get(&self, id: &str) -> Result<Option<StudentRecord>>;

    /// Records whose id or name equals `key` exactly
    fn find_by_id_or_name(&self, key: &str) -> Result<Vec<StudentRecord>>;

    /// All records ordered by `field`; ties keep insertion order
    fn list_sorted_by(&self, field: SortField, descending: bool) -> Result<Vec<StudentRecord>>;

    /// Rewrite only `rank` and `updated_at`
    fn update_rank(&mut self, id: &str, rank: u32, at: DateTime<Utc>) -> Result<()>;

    /// Persist a full rank pass.
    ///
    /// Implementations backed by a transactional store should override this
    /// so the pass is all-or-nothing. A multi-writer deployment would also
    /// check a collection epoch here before writing.
    fn apply_ranks(&mut self, assignments: &[RankAssignment], at: DateTime<Utc>) -> Result<()> {
        for assignment in assignments {
            self.update_rank(&assignment.id, assignment.rank, at)?;
        }
        Ok(())
    }

    fn count(&self) -> Result<usize> {
        self.count_where(&Filter::All)
    }

    fn count_where(&self, filter: &Filter) -> Result<usize>;

    fn find_where(
        &self,
        filter: &Filter,
        field: SortField,
        descending: bool,
    ) -> Result<Vec<StudentRecord>>;

    /// Count, per-subject means and total extrema; `None` when empty
    fn aggregate(&self) -> Result<Option<Aggregate>>;

    /// Open a unit of work. Writes until `commit` or `rollback` either all
    /// land or are all discarded. Units do not nest.
    fn begin(&mut self) -> Result<()>;

    fn commit(&mut self) -> Result<()>;

    /// Discard every write since `begin`
    fn rollback(&mut self) -> Result<()>;
}

impl<R: Repository + ?Sized> Repository for &mut R {
    fn insert(&mut self, record: StudentRecord) -> Result<StudentRecord> {
        (**self).insert(record)
    }

    fn delete(&mut self, id: &str) -> Result<StudentRecord> {
        (**self).delete(id)
    }

    fn get(&self, id: &str) -> Result<Option<StudentRecord>> {
        (**self).get(id)
    }

    fn find_by_id_or_name(&self, key: &str) -> Result<Vec<StudentRecord>> {
        (**self).find_by_id_or_name(key)
    }

    fn list_sorted_by(&self, field: SortField, descending: bool) -> Result<Vec<StudentRecord>> {
        (**self).list_sorted_by(field, descending)
    }

    fn update_rank(&mut self, id: &str, rank: u32, at: DateTime<Utc>) -> Result<()> {
        (**self).update_rank(id, rank, at)
    }

    fn apply_ranks(&mut self, assignments: &[RankAssignment], at: DateTime<Utc>) -> Result<()> {
        (**self).apply_ranks(assignments, at)
    }

    fn count(&self) -> Result<usize> {
        (**self).count()
    }

    fn count_where(&self, filter: &Filter) -> Result<usize> {
        (**self).count_where(filter)
    }

    fn find_where(
        &self,
        filter: &Filter,
        field: SortField,
        descending: bool,
    ) -> Result<Vec<StudentRecord>> {
        (**self).find_where(filter, field, descending)
    }

    fn aggregate(&self) -> Result<Option<Aggregate>> {
        (**self).aggregate()
    }

    fn begin(&mut self) -> Result<()> {
        (**self).begin()
    }

    fn commit(&mut self) -> Result<()> {
        (**self).commit()
    }

    fn rollback(&mut self) -> Result<()> {
        (**self).rollback()
    }
}

#[cfg(test)]
pub(crate) mod contract;
