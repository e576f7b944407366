//! `gradebook search` command - exact id-or-name lookup

use chrono::SecondsFormat;

use crate::cli::Cli;
use crate::commands::format::{print_json, print_student_records};
use crate::output_by_format_result;
use gradebook_core::error::Result;
use gradebook_core::store::Store;

/// Execute the search command
pub fn execute(cli: &Cli, store: &mut Store, key: &str) -> Result<()> {
    let matches = store.gradebook().find(key)?;

    output_by_format_result!(cli.format,
        json => { print_json(&matches) },
        human => {
            if matches.is_empty() {
                println!("No matching students.");
            } else {
                println!("Found {} student(s)", matches.len());
                for record in &matches {
                    println!(
                        "ID: {}, Name: {}, Total: {}, Average: {:.2}, Grade: {}, Rank: {}, Updated: {}",
                        record.id(),
                        record.name(),
                        record.total(),
                        record.average(),
                        record.grade(),
                        record.rank(),
                        record.updated_at().to_rfc3339_opts(SecondsFormat::Secs, true)
                    );
                }
            }
        },
        records => { print_student_records("search", &matches); }
    )
}
