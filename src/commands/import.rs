//! `gradebook import` command - batch insert from a JSON file
//!
//! The file holds an array of `{id, name, english, c_language, python}`.
//! Every entry is validated before anything is written; duplicate ids are
//! reported and skipped, the rest go in with a single rank pass.

use std::fs;
use std::path::Path;

use crate::cli::parse::check_score;
use crate::cli::Cli;
use crate::commands::format::{print_json, print_records_header};
use crate::output_by_format_result;
use gradebook_core::bail_invalid;
use gradebook_core::error::{GradeError, Result};
use gradebook_core::record::NewStudent;
use gradebook_core::records::{quoted, student_line};
use gradebook_core::store::Store;

/// Parse and validate an import document.
///
/// Ids are trimmed the same way `add` trims them.
pub fn parse_students(content: &str) -> Result<Vec<NewStudent>> {
    let mut students: Vec<NewStudent> =
        serde_json::from_str(content).map_err(|e| GradeError::invalid_input("import file", e))?;

    for student in &mut students {
        student.id = student.id.trim().to_string();
        if student.id.is_empty() {
            bail_invalid!("student id", "(empty)");
        }
        let scores = student.scores;
        check_score("english", scores.english)?;
        check_score("c_language", scores.c_language)?;
        check_score("python", scores.python)?;
    }

    Ok(students)
}

/// Execute the import command
pub fn execute(cli: &Cli, store: &mut Store, file: &Path) -> Result<()> {
    let content = fs::read_to_string(file)?;
    let students = parse_students(&content)?;
    tracing::debug!(entries = students.len(), file = %file.display(), "importing");

    let outcome = store.gradebook().add_batch(students)?;

    output_by_format_result!(cli.format,
        json => { print_json(&outcome) },
        human => {
            if !cli.quiet {
                println!("Imported {} student(s)", outcome.inserted.len());
                for rejected in &outcome.rejected {
                    println!("  skipped {}: {}", rejected.id, rejected.reason);
                }
            }
        },
        records => {
            print_records_header("import", outcome.inserted.len());
            for record in &outcome.inserted {
                println!("{}", student_line(record));
            }
            for rejected in &outcome.rejected {
                println!("R {} reason=duplicate", quoted(&rejected.id));
            }
        }
    )
}
