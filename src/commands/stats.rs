//! `gradebook stats` command - class-wide statistics

use crate::cli::Cli;
use crate::commands::format::{print_json, print_records_header};
use crate::output_by_format_result;
use gradebook_core::error::Result;
use gradebook_core::records::statistics_lines;
use gradebook_core::stats::Summary;
use gradebook_core::store::Store;

/// Execute the stats command
pub fn execute(cli: &Cli, store: &mut Store) -> Result<()> {
    let summary = store.gradebook().summarize()?;

    output_by_format_result!(cli.format,
        json => { print_json(&summary) },
        human => {
            match &summary {
                Summary::Empty => println!("No students found."),
                Summary::Stats(stats) => {
                    println!("Students:        {}", stats.count);
                    println!("English mean:    {:.2}", stats.mean_english);
                    println!("C mean:          {:.2}", stats.mean_c_language);
                    println!("Python mean:     {:.2}", stats.mean_python);
                    println!("Total mean:      {:.2}", stats.mean_total);
                    println!("Overall average: {:.2}", stats.overall_average());
                    println!("Highest total:   {}", stats.max_total);
                    println!("Lowest total:    {}", stats.min_total);
                }
            }
        },
        records => {
            match &summary {
                Summary::Empty => print_records_header("stats", 0),
                Summary::Stats(stats) => {
                    print_records_header("stats", stats.count);
                    for line in statistics_lines(stats) {
                        println!("{}", line);
                    }
                }
            }
        }
    )
}
