//! Behavior every `Repository` implementation must share
//!
//! Each function takes a fresh, empty repository and panics on violation.

use chrono::{DateTime, Duration, TimeZone, Utc};

use super::{Filter, RankAssignment, Repository, SortField};
use crate::error::GradeError;
use crate::grade::Grade;
use crate::record::{NewStudent, Scores, StudentRecord};

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 4, 11, 9, 0, 0).unwrap()
}

pub fn student(id: &str, name: &str, e: i32, c: i32, p: i32) -> StudentRecord {
    StudentRecord::new(NewStudent::new(id, name, Scores::new(e, c, p)), t0())
}

fn ids(records: &[StudentRecord]) -> Vec<&str> {
    records.iter().map(|r| r.id()).collect()
}

pub fn insert_and_get<R: Repository>(mut repo: R) {
    let stored = repo.insert(student("s1", "Kim", 90, 85, 80)).unwrap();
    assert_eq!(stored.total(), 255);

    let loaded = repo.get("s1").unwrap().unwrap();
    assert_eq!(loaded.name(), "Kim");
    assert_eq!(loaded.scores(), Scores::new(90, 85, 80));
    assert_eq!(loaded.total(), 255);
    assert_eq!(loaded.grade(), Grade::BPlus);
    assert_eq!(loaded.created_at(), t0());
    assert!(repo.get("missing").unwrap().is_none());
}

pub fn insert_resets_rank<R: Repository>(mut repo: R) {
    let mut ranked = student("s1", "Kim", 90, 85, 80);
    ranked.set_rank(7, t0());
    let stored = repo.insert(ranked).unwrap();
    assert_eq!(stored.rank(), 0);
    assert_eq!(repo.get("s1").unwrap().unwrap().rank(), 0);
}

pub fn duplicate_insert_rejected<R: Repository>(mut repo: R) {
    repo.insert(student("s1", "Kim", 90, 90, 90)).unwrap();
    let err = repo.insert(student("s1", "Lee", 50, 50, 50)).unwrap_err();
    assert!(matches!(err, GradeError::DuplicateIdentifier { ref id } if id == "s1"));
    assert_eq!(repo.count().unwrap(), 1);
    assert_eq!(repo.get("s1").unwrap().unwrap().name(), "Kim");
}

pub fn delete_known_and_unknown<R: Repository>(mut repo: R) {
    repo.insert(student("s1", "Kim", 90, 90, 90)).unwrap();
    repo.insert(student("s2", "Lee", 80, 80, 80)).unwrap();

    let err = repo.delete("nobody").unwrap_err();
    assert!(matches!(err, GradeError::NotFound { .. }));
    assert_eq!(repo.count().unwrap(), 2);

    let removed = repo.delete("s1").unwrap();
    assert_eq!(removed.id(), "s1");
    assert_eq!(repo.count().unwrap(), 1);
    assert!(repo.get("s1").unwrap().is_none());
}

pub fn find_by_id_or_name<R: Repository>(mut repo: R) {
    repo.insert(student("s1", "Kim", 90, 90, 90)).unwrap();
    repo.insert(student("s2", "Lee", 80, 80, 80)).unwrap();
    repo.insert(student("s3", "Kim", 70, 70, 70)).unwrap();
    repo.insert(student("Lee", "Park", 60, 60, 60)).unwrap();

    assert_eq!(ids(&repo.find_by_id_or_name("Kim").unwrap()), vec!["s1", "s3"]);
    assert_eq!(ids(&repo.find_by_id_or_name("s2").unwrap()), vec!["s2"]);
    // "Lee" is both a name and an id
    assert_eq!(ids(&repo.find_by_id_or_name("Lee").unwrap()), vec!["s2", "Lee"]);
    // exact match only
    assert!(repo.find_by_id_or_name("ki").unwrap().is_empty());
}

pub fn list_sorted_by<R: Repository>(mut repo: R) {
    repo.insert(student("s1", "Cho", 70, 70, 70)).unwrap();
    repo.insert(student("s2", "Ahn", 90, 90, 90)).unwrap();
    repo.insert(student("s3", "Baek", 70, 70, 70)).unwrap();
    repo.insert(student("s4", "Dong", 80, 80, 80)).unwrap();

    let by_total = repo.list_sorted_by(SortField::Total, true).unwrap();
    assert_eq!(ids(&by_total), vec!["s2", "s4", "s1", "s3"]);

    let by_total_asc = repo.list_sorted_by(SortField::Total, false).unwrap();
    assert_eq!(ids(&by_total_asc), vec!["s1", "s3", "s4", "s2"]);

    let by_name = repo.list_sorted_by(SortField::Name, false).unwrap();
    assert_eq!(ids(&by_name), vec!["s2", "s3", "s1", "s4"]);
}

pub fn update_rank<R: Repository>(mut repo: R) {
    repo.insert(student("s1", "Kim", 90, 90, 90)).unwrap();
    let later = t0() + Duration::minutes(3);

    repo.update_rank("s1", 1, later).unwrap();
    let loaded = repo.get("s1").unwrap().unwrap();
    assert_eq!(loaded.rank(), 1);
    assert_eq!(loaded.updated_at(), later);
    assert_eq!(loaded.created_at(), t0());
    assert_eq!(loaded.total(), 270);

    let err = repo.update_rank("ghost", 1, later).unwrap_err();
    assert!(matches!(err, GradeError::NotFound { .. }));
}

pub fn apply_ranks_missing_id_writes_nothing<R: Repository>(mut repo: R) {
    repo.insert(student("s1", "Kim", 90, 90, 90)).unwrap();
    repo.insert(student("s2", "Lee", 80, 80, 80)).unwrap();

    let pass = vec![
        RankAssignment {
            id: "s1".to_string(),
            rank: 1,
        },
        RankAssignment {
            id: "ghost".to_string(),
            rank: 2,
        },
    ];
    assert!(repo.apply_ranks(&pass, t0()).is_err());
    assert_eq!(repo.get("s1").unwrap().unwrap().rank(), 0);
}

pub fn filters_and_aggregate<R: Repository>(mut repo: R) {
    repo.insert(student("s1", "Kim", 92, 92, 92)).unwrap(); // 92.0
    repo.insert(student("s2", "Lee", 81, 81, 81)).unwrap(); // 81.0
    repo.insert(student("s3", "Park", 80, 80, 79)).unwrap(); // 79.67
    repo.insert(student("s4", "Choi", 80, 80, 80)).unwrap(); // 80.0

    assert_eq!(repo.count_where(&Filter::AverageAtLeast(80.0)).unwrap(), 3);
    assert_eq!(repo.count_where(&Filter::TotalAtLeast(243)).unwrap(), 2);
    assert_eq!(repo.count_where(&Filter::GradeIs(Grade::B)).unwrap(), 2);
    assert_eq!(repo.count_where(&Filter::All).unwrap(), 4);

    let above = repo
        .find_where(&Filter::AverageAtLeast(80.0), SortField::Average, true)
        .unwrap();
    assert_eq!(ids(&above), vec!["s1", "s2", "s4"]);

    let agg = repo.aggregate().unwrap().unwrap();
    assert_eq!(agg.count, 4);
    assert_eq!(agg.avg_english, (92.0 + 81.0 + 80.0 + 80.0) / 4.0);
    assert_eq!(agg.avg_python, (92.0 + 81.0 + 79.0 + 80.0) / 4.0);
    assert_eq!(agg.max_total, 276);
    assert_eq!(agg.min_total, 239);
}

pub fn unit_rollback_and_commit<R: Repository>(mut repo: R) {
    repo.insert(student("s1", "Kim", 90, 90, 90)).unwrap();
    repo.update_rank("s1", 1, t0()).unwrap();

    repo.begin().unwrap();
    repo.insert(student("s2", "Lee", 95, 95, 95)).unwrap();
    repo.delete("s1").unwrap();
    repo.rollback().unwrap();

    assert_eq!(repo.count().unwrap(), 1);
    assert!(repo.get("s2").unwrap().is_none());
    let kept = repo.get("s1").unwrap().unwrap();
    assert_eq!(kept.rank(), 1);
    assert_eq!(kept.name(), "Kim");

    repo.begin().unwrap();
    repo.insert(student("s3", "Park", 70, 70, 70)).unwrap();
    repo.commit().unwrap();
    assert_eq!(repo.count().unwrap(), 2);
    assert!(repo.get("s3").unwrap().is_some());
}

pub fn empty_collection<R: Repository>(repo: R) {
    assert_eq!(repo.count().unwrap(), 0);
    assert!(repo.list_sorted_by(SortField::Total, true).unwrap().is_empty());
    assert!(repo.find_by_id_or_name("x").unwrap().is_empty());
    assert!(repo
        .find_where(&Filter::AverageAtLeast(80.0), SortField::Average, true)
        .unwrap()
        .is_empty());
    assert!(repo.aggregate().unwrap().is_none());
}
