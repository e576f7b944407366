//! Student records: raw subject scores plus their derived fields

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::grade::{grade_for, Grade};

/// Number of subjects averaged into a record
pub const SUBJECT_COUNT: i32 = 3;

/// The three subject scores recorded per student.
///
/// Expected in 0-100, but not validated here; range checks belong to
/// whoever collects the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scores {
    pub english: i32,
    pub c_language: i32,
    pub python: i32,
}

impl Scores {
    pub fn new(english: i32, c_language: i32, python: i32) -> Self {
        Self {
            english,
            c_language,
            python,
        }
    }

    /// Sum of the three scores, widened so any `i32` triple adds exactly
    pub fn total(&self) -> i64 {
        i64::from(self.english) + i64::from(self.c_language) + i64::from(self.python)
    }

    pub fn average(&self) -> f64 {
        self.total() as f64 / f64::from(SUBJECT_COUNT)
    }
}

/// Raw input for a student that has not been stored yet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStudent {
    pub id: String,
    pub name: String,
    #[serde(flatten)]
    pub scores: Scores,
}

impl NewStudent {
    pub fn new(id: impl Into<String>, name: impl Into<String>, scores: Scores) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            scores,
        }
    }
}

/// A stored student with derived total, average, grade and rank.
///
/// The derived fields are private so they can only be produced from the
/// scores; `rank` is 0 until a rank pass assigns it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentRecord {
    id: String,
    name: String,
    #[serde(flatten)]
    scores: Scores,
    total: i64,
    average: f64,
    grade: Grade,
    rank: u32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl StudentRecord {
    /// Build a fresh, unranked record stamped at `now`
    pub fn new(student: NewStudent, now: DateTime<Utc>) -> Self {
        Self::restore(student.id, student.name, student.scores, 0, now, now)
    }

    /// Rebuild a record from stored columns, re-deriving everything but rank
    pub fn restore(
        id: String,
        name: String,
        scores: Scores,
        rank: u32,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        let total = scores.total();
        let average = scores.average();
        Self {
            id,
            name,
            scores,
            total,
            average,
            grade: grade_for(average),
            rank,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scores(&self) -> Scores {
        self.scores
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    pub fn average(&self) -> f64 {
        self.average
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }

    pub fn rank(&self) -> u32 {
        self.rank
    }

    pub fn is_ranked(&self) -> bool {
        self.rank > 0
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Clear the rank without touching timestamps
    pub fn into_unranked(mut self) -> Self {
        self.rank = 0;
        self
    }

    /// Rewrite the rank, refreshing `updated_at`
    pub fn set_rank(&mut self, rank: u32, at: DateTime<Utc>) {
        self.rank = rank;
        self.updated_at = at;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, 11, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_derived_fields() {
        let record = StudentRecord::new(
            NewStudent::new("2025001", "Kim", Scores::new(95, 88, 92)),
            at(),
        );
        assert_eq!(record.total(), 275);
        assert_eq!(record.average(), 275.0 / 3.0);
        assert_eq!(record.grade(), Grade::A);
        assert_eq!(record.rank(), 0);
        assert!(!record.is_ranked());
        assert_eq!(record.created_at(), record.updated_at());
    }

    #[test]
    fn test_derived_fields_across_score_triples() {
        for (e, c, p) in [(0, 0, 0), (100, 100, 100), (90, 89, 90), (59, 60, 61), (1, 2, 4)] {
            let scores = Scores::new(e, c, p);
            let record = StudentRecord::new(NewStudent::new("x", "x", scores), at());
            assert_eq!(record.total(), i64::from(e + c + p));
            assert_eq!(record.average(), f64::from(e + c + p) / 3.0);
            assert_eq!(record.grade(), grade_for(record.average()));
        }
    }

    #[test]
    fn test_total_does_not_overflow_at_score_extremes() {
        let high = StudentRecord::new(
            NewStudent::new("hi", "hi", Scores::new(i32::MAX, i32::MAX, 1)),
            at(),
        );
        assert_eq!(high.total(), 2 * i64::from(i32::MAX) + 1);
        assert_eq!(high.average(), (2.0 * f64::from(i32::MAX) + 1.0) / 3.0);
        assert_eq!(high.grade(), Grade::A);

        let low = StudentRecord::new(
            NewStudent::new("lo", "lo", Scores::new(i32::MIN, i32::MIN, i32::MIN)),
            at(),
        );
        assert_eq!(low.total(), 3 * i64::from(i32::MIN));
        assert_eq!(low.grade(), Grade::F);
    }

    #[test]
    fn test_boundary_average_not_rounded() {
        // 269 / 3 = 89.67 stays below the A threshold
        let record = StudentRecord::new(NewStudent::new("s", "s", Scores::new(90, 90, 89)), at());
        assert_eq!(record.grade(), Grade::BPlus);
    }

    #[test]
    fn test_restore_rederives_from_scores() {
        let later = at() + chrono::Duration::hours(1);
        let record = StudentRecord::restore(
            "s1".to_string(),
            "Lee".to_string(),
            Scores::new(70, 70, 70),
            4,
            at(),
            later,
        );
        assert_eq!(record.total(), 210);
        assert_eq!(record.grade(), Grade::C);
        assert_eq!(record.rank(), 4);
        assert_eq!(record.updated_at(), later);
    }

    #[test]
    fn test_set_rank_touches_updated_at() {
        let mut record = StudentRecord::new(NewStudent::new("s", "s", Scores::new(1, 1, 1)), at());
        let later = at() + chrono::Duration::minutes(5);
        record.set_rank(2, later);
        assert_eq!(record.rank(), 2);
        assert_eq!(record.updated_at(), later);
        assert_eq!(record.created_at(), at());
    }

    #[test]
    fn test_serialized_shape() {
        let record = StudentRecord::new(NewStudent::new("s1", "Park", Scores::new(80, 85, 90)), at());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], "s1");
        assert_eq!(json["english"], 80);
        assert_eq!(json["c_language"], 85);
        assert_eq!(json["python"], 90);
        assert_eq!(json["total"], 255);
        assert_eq!(json["grade"], "B+");
        assert_eq!(json["rank"], 0);
    }

    #[test]
    fn test_new_student_from_json() {
        let student: NewStudent = serde_json::from_str(
            r#"{"id":"s9","name":"Choi","english":70,"c_language":75,"python":80}"#,
        )
        .unwrap();
        assert_eq!(student.scores, Scores::new(70, 75, 80));
    }
}
