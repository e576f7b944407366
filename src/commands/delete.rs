//! `gradebook delete` command - remove a student and re-rank the rest

use crate::cli::Cli;
use crate::commands::format::{print_json_status, print_records_header};
use crate::output_by_format_result;
use gradebook_core::error::Result;
use gradebook_core::records::quoted;
use gradebook_core::store::Store;

/// Execute the delete command
pub fn execute(cli: &Cli, store: &mut Store, id: &str) -> Result<()> {
    let removed = store.gradebook().remove(id)?;

    output_by_format_result!(cli.format,
        json => {
            print_json_status(
                "ok",
                Some("Student deleted"),
                &[("student", serde_json::to_value(&removed)?)],
            )
        },
        human => {
            if !cli.quiet {
                println!("Deleted {} ({})", removed.name(), removed.id());
            }
        },
        records => {
            print_records_header("delete", 1);
            println!("D {}", quoted(removed.id()));
        }
    )
}
