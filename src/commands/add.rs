//! `gradebook add` command - insert one student and re-rank

use crate::cli::{AddArgs, Cli};
use crate::commands::format::{print_json, print_student_records};
use crate::output_by_format_result;
use gradebook_core::error::Result;
use gradebook_core::record::{NewStudent, Scores};
use gradebook_core::store::Store;

/// Execute the add command
pub fn execute(cli: &Cli, store: &mut Store, args: &AddArgs) -> Result<()> {
    let student = NewStudent::new(
        args.id.clone(),
        args.name.clone(),
        Scores::new(args.english, args.c_language, args.python),
    );

    let record = store.gradebook().add(student)?;
    tracing::debug!(id = record.id(), rank = record.rank(), "added student");

    output_by_format_result!(cli.format,
        json => { print_json(&record) },
        human => {
            if !cli.quiet {
                println!(
                    "Added {} ({}): total {}, average {:.2}, grade {}, rank {}",
                    record.name(),
                    record.id(),
                    record.total(),
                    record.average(),
                    record.grade(),
                    record.rank()
                );
            }
        },
        records => { print_student_records("add", std::slice::from_ref(&record)); }
    )
}
