//! `gradebook list` command - every student in a chosen order
//!
//! Defaults to total, highest first. Ties keep insertion order.

use crate::cli::{Cli, ListArgs};
use crate::commands::format::{print_json, print_student_records, print_student_table};
use crate::output_by_format_result;
use gradebook_core::error::Result;
use gradebook_core::repository::Filter;
use gradebook_core::store::Store;

/// Execute the list command
pub fn execute(cli: &Cli, store: &mut Store, args: &ListArgs) -> Result<()> {
    let descending = !args.asc;
    let filter = args.grade.map_or(Filter::All, Filter::GradeIs);

    let book = store.gradebook();
    let students = match filter {
        Filter::All => book.list_sorted(args.sort, descending)?,
        _ => book.list_where(&filter, args.sort, descending)?,
    };

    output_by_format_result!(cli.format,
        json => { print_json(&students) },
        human => { print_student_table("Gradebook", &students); },
        records => { print_student_records("list", &students); }
    )
}
