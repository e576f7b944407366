//! Shared output formatting helpers for commands
//!
//! The human table follows a fixed column layout: id 15, name 10, each score
//! and the total 8, average 8 with two decimals, grade 6, rank 6.

use serde::Serialize;
use serde_json::json;

use gradebook_core::error::Result;
use gradebook_core::record::StudentRecord;
use gradebook_core::records;

const RULE_WIDTH: usize = 100;

pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Print a JSON status object with optional message and extra fields
pub fn print_json_status(
    status: &str,
    message: Option<&str>,
    extra_fields: &[(&str, serde_json::Value)],
) -> Result<()> {
    let mut output = json!({ "status": status });

    if let Some(obj) = output.as_object_mut() {
        if let Some(msg) = message {
            obj.insert("message".to_string(), json!(msg));
        }
        for (key, value) in extra_fields {
            obj.insert(key.to_string(), value.clone());
        }
    }

    print_json(&output)
}

pub fn print_records_header(mode: &str, count: usize) {
    println!("{}", records::header_line(mode, count));
}

pub fn print_student_records(mode: &str, students: &[StudentRecord]) {
    print_records_header(mode, students.len());
    for student in students {
        println!("{}", records::student_line(student));
    }
}

pub fn table_header() -> String {
    format!(
        "{:<15}{:<10}{:<8}{:<8}{:<8}{:<8}{:<8}{:<6}{:<6}",
        "ID", "Name", "English", "C", "Python", "Total", "Average", "Grade", "Rank"
    )
}

pub fn table_row(record: &StudentRecord) -> String {
    let scores = record.scores();
    format!(
        "{:<15}{:<10}{:<8}{:<8}{:<8}{:<8}{:<8.2}{:<6}{:<6}",
        record.id(),
        record.name(),
        scores.english,
        scores.c_language,
        scores.python,
        record.total(),
        record.average(),
        record.grade().as_str(),
        record.rank()
    )
}

/// Print the fixed-width student table, or a notice when there are none
pub fn print_student_table(title: &str, students: &[StudentRecord]) {
    if students.is_empty() {
        println!("No students found.");
        return;
    }

    let rule = "=".repeat(RULE_WIDTH);
    println!("{:^width$}", title, width = RULE_WIDTH);
    println!("{}", rule);
    println!("{}", table_header());
    println!("{}", rule);
    for student in students {
        println!("{}", table_row(student));
    }
    println!("{}", rule);
    println!("Total students: {}", students.len());
}
