//! `gradebook rank` command - force a full rank pass

use crate::cli::Cli;
use crate::commands::format::{print_json_status, print_records_header};
use crate::output_by_format_result;
use gradebook_core::error::Result;
use gradebook_core::store::Store;

/// Execute the rank command
pub fn execute(cli: &Cli, store: &mut Store) -> Result<()> {
    let ranked = store.gradebook().recompute_ranks()?;

    output_by_format_result!(cli.format,
        json => {
            print_json_status("ok", Some("Ranks recomputed"), &[("ranked", serde_json::json!(ranked))])
        },
        human => {
            if !cli.quiet {
                println!("Ranked {} student(s)", ranked);
            }
        },
        records => { print_records_header("rank", ranked); }
    )
}
