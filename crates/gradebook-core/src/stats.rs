//! Aggregate statistics and threshold reports over the whole collection

use serde::Serialize;

use crate::error::Result;
use crate::record::{StudentRecord, SUBJECT_COUNT};
use crate::repository::{Filter, Repository, SortField};

/// Summary numbers for a non-empty collection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Statistics {
    pub count: usize,
    pub mean_english: f64,
    pub mean_c_language: f64,
    pub mean_python: f64,
    pub mean_total: f64,
    pub max_total: i64,
    pub min_total: i64,
}

impl Statistics {
    /// Mean of every student's average
    pub fn overall_average(&self) -> f64 {
        self.mean_total / f64::from(SUBJECT_COUNT)
    }
}

/// Result of [`summarize`]: an empty collection has no statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Summary {
    Empty,
    Stats(Statistics),
}

impl Summary {
    pub fn statistics(&self) -> Option<&Statistics> {
        match self {
            Summary::Empty => None,
            Summary::Stats(stats) => Some(stats),
        }
    }
}

/// Students at or above an average threshold
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThresholdReport {
    pub threshold: f64,
    pub count: usize,
    /// Sorted by average, highest first
    pub records: Vec<StudentRecord>,
}

pub fn summarize<R: Repository + ?Sized>(repo: &R) -> Result<Summary> {
    let summary = match repo.aggregate()? {
        None => Summary::Empty,
        Some(agg) => Summary::Stats(Statistics {
            count: agg.count,
            mean_english: agg.avg_english,
            mean_c_language: agg.avg_c_language,
            mean_python: agg.avg_python,
            mean_total: agg.avg_total,
            max_total: agg.max_total,
            min_total: agg.min_total,
        }),
    };
    tracing::debug!(?summary, "summarize");
    Ok(summary)
}

/// Count and list students whose unrounded average is `>= threshold`
pub fn count_at_or_above<R: Repository + ?Sized>(
    repo: &R,
    threshold: f64,
) -> Result<ThresholdReport> {
    let filter = Filter::AverageAtLeast(threshold);
    let count = repo.count_where(&filter)?;
    let records = if count > 0 {
        repo.find_where(&filter, SortField::Average, true)?
    } else {
        Vec::new()
    };

    Ok(ThresholdReport {
        threshold,
        count,
        records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::contract::student;
    use crate::repository::InMemoryRepository;

    #[test]
    fn test_summarize_empty() {
        let repo = InMemoryRepository::new();
        let summary = summarize(&repo).unwrap();
        assert_eq!(summary, Summary::Empty);
        assert!(summary.statistics().is_none());
    }

    #[test]
    fn test_summarize_values() {
        let mut repo = InMemoryRepository::new();
        repo.insert(student("s1", "Kim", 90, 80, 70)).unwrap();
        repo.insert(student("s2", "Lee", 70, 60, 50)).unwrap();
        repo.insert(student("s3", "Park", 80, 100, 90)).unwrap();

        let summary = summarize(&repo).unwrap();
        let stats = summary.statistics().unwrap();
        assert_eq!(stats.count, 3);
        assert_eq!(stats.mean_english, 80.0);
        assert_eq!(stats.mean_c_language, 80.0);
        assert_eq!(stats.mean_python, 70.0);
        assert_eq!(stats.mean_total, 230.0);
        assert_eq!(stats.max_total, 270);
        assert_eq!(stats.min_total, 180);
        assert!((stats.overall_average() - 230.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_count_at_or_above_eighty() {
        let mut repo = InMemoryRepository::new();
        repo.insert(student("s1", "Kim", 92, 92, 92)).unwrap(); // 92.0
        repo.insert(student("s2", "Lee", 81, 81, 81)).unwrap(); // 81.0
        repo.insert(student("s3", "Park", 80, 80, 79)).unwrap(); // 79.67
        repo.insert(student("s4", "Choi", 80, 80, 80)).unwrap(); // 80.0

        let report = count_at_or_above(&repo, 80.0).unwrap();
        assert_eq!(report.count, 3);
        let ids: Vec<&str> = report.records.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec!["s1", "s2", "s4"]);
    }

    #[test]
    fn test_count_at_or_above_none_qualify() {
        let mut repo = InMemoryRepository::new();
        repo.insert(student("s1", "Kim", 10, 10, 10)).unwrap();

        let report = count_at_or_above(&repo, 80.0).unwrap();
        assert_eq!(report.count, 0);
        assert!(report.records.is_empty());
    }

    #[test]
    fn test_summary_json_shape() {
        let json = serde_json::to_value(Summary::Empty).unwrap();
        assert_eq!(json["status"], "empty");
    }
}
