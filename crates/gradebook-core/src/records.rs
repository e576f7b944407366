//! Line-oriented records output
//!
//! One header line (`H`) followed by one line per student (`S`) or per
//! statistic (`T`). Caller-supplied strings (ids and names) are always
//! double-quoted with backslashes and inner quotes escaped, so a value holding
//! spaces stays one field.

use crate::record::StudentRecord;
use crate::stats::Statistics;

/// Escape backslashes and double quotes in a string for records format.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\\', r"\\").replace('"', r#"\""#)
}

/// A string value as it appears in a records line
pub fn quoted(s: &str) -> String {
    format!("\"{}\"", escape_quotes(s))
}

pub fn header_line(mode: &str, count: usize) -> String {
    format!("H gradebook=1 records=1 mode={} count={}", mode, count)
}

pub fn student_line(record: &StudentRecord) -> String {
    let scores = record.scores();
    format!(
        "S {} name={} english={} c_language={} python={} total={} average={:.2} grade={} rank={}",
        quoted(record.id()),
        quoted(record.name()),
        scores.english,
        scores.c_language,
        scores.python,
        record.total(),
        record.average(),
        record.grade(),
        record.rank()
    )
}

pub fn statistics_lines(stats: &Statistics) -> Vec<String> {
    vec![
        format!("T count {}", stats.count),
        format!("T mean_english {:.2}", stats.mean_english),
        format!("T mean_c_language {:.2}", stats.mean_c_language),
        format!("T mean_python {:.2}", stats.mean_python),
        format!("T mean_total {:.2}", stats.mean_total),
        format!("T overall_average {:.2}", stats.overall_average()),
        format!("T max_total {}", stats.max_total),
        format!("T min_total {}", stats.min_total),
    ]
}
