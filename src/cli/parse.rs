//! Value parsers for clap arguments

use gradebook_core::bail_invalid;
use gradebook_core::error::GradeError;
use gradebook_core::format::OutputFormat;
use gradebook_core::grade::Grade;
use gradebook_core::repository::SortField;

/// Lowest accepted subject score
pub const MIN_SCORE: i32 = 0;
/// Highest accepted subject score
pub const MAX_SCORE: i32 = 100;

pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

pub fn parse_sort_field(s: &str) -> std::result::Result<SortField, String> {
    s.parse::<SortField>().map_err(|e| e.to_string())
}

pub fn parse_grade(s: &str) -> std::result::Result<Grade, String> {
    s.parse::<Grade>().map_err(|e| e.to_string())
}

pub fn parse_score(s: &str) -> std::result::Result<i32, String> {
    let value = s
        .trim()
        .parse::<i32>()
        .map_err(|_| GradeError::invalid_input("score", s).to_string())?;
    check_score("score", value).map_err(|e| e.to_string())
}

/// Reject a subject score outside 0-100
pub fn check_score(field: &str, value: i32) -> gradebook_core::error::Result<i32> {
    if !(MIN_SCORE..=MAX_SCORE).contains(&value) {
        bail_invalid!(
            field,
            format!("{} (expected {}-{})", value, MIN_SCORE, MAX_SCORE)
        );
    }
    Ok(value)
}

pub fn parse_student_id(s: &str) -> std::result::Result<String, String> {
    let id = s.trim();
    if id.is_empty() {
        return Err(GradeError::invalid_input("student id", "(empty)").to_string());
    }
    Ok(id.to_string())
}

pub fn parse_threshold(s: &str) -> std::result::Result<f64, String> {
    match s.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(GradeError::invalid_input("threshold", s).to_string()),
    }
}
