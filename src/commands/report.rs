//! `gradebook report` command - students at or above an average threshold

use crate::cli::Cli;
use crate::commands::format::print_json;
use crate::output_by_format_result;
use gradebook_core::error::Result;
use gradebook_core::records::student_line;
use gradebook_core::store::Store;

/// Execute the report command
pub fn execute(cli: &Cli, store: &mut Store, threshold: f64) -> Result<()> {
    let report = store.gradebook().at_or_above(threshold)?;

    output_by_format_result!(cli.format,
        json => { print_json(&report) },
        human => {
            println!("Students with average >= {:.2}: {}", report.threshold, report.count);
            if !report.records.is_empty() {
                println!("{}", "-".repeat(60));
                for record in &report.records {
                    println!("{}({}): {:.2}", record.name(), record.id(), record.average());
                }
            }
        },
        records => {
            println!(
                "H gradebook=1 records=1 mode=report threshold={} count={}",
                report.threshold, report.count
            );
            for record in &report.records {
                println!("{}", student_line(record));
            }
        }
    )
}
