//! Argument structures for subcommands

use std::path::PathBuf;

use clap::Args;

use crate::cli::parse::{parse_grade, parse_score, parse_sort_field, parse_student_id, parse_threshold};
use gradebook_core::grade::Grade;
use gradebook_core::repository::SortField;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Student id (unique)
    #[arg(value_parser = parse_student_id)]
    pub id: String,

    /// Student name
    pub name: String,

    /// English score (0-100)
    #[arg(long, value_parser = parse_score)]
    pub english: i32,

    /// C language score (0-100)
    #[arg(long, value_parser = parse_score)]
    pub c_language: i32,

    /// Python score (0-100)
    #[arg(long, value_parser = parse_score)]
    pub python: i32,
}

#[derive(Args, Debug)]
pub struct ImportArgs {
    /// JSON file holding an array of {id, name, english, c_language, python}
    pub file: PathBuf,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Field to sort by (id, name, english, c-language, python, total,
    /// average, rank, created-at)
    #[arg(long, value_parser = parse_sort_field, default_value = "total")]
    pub sort: SortField,

    /// Sort ascending instead of descending
    #[arg(long)]
    pub asc: bool,

    /// Only students with this letter grade (A, B+, B, C+, C, D+, D, F)
    #[arg(long, value_parser = parse_grade)]
    pub grade: Option<Grade>,
}

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Average cutoff, inclusive (default: report_threshold from config)
    #[arg(long, value_parser = parse_threshold)]
    pub threshold: Option<f64>,
}
