//! `gradebook init` command - create a new store
//!
//! Idempotent: an existing config and database are left in place.

use crate::cli::Cli;
use crate::commands::format::print_json_status;
use crate::output_by_format_result;
use gradebook_core::error::Result;
use gradebook_core::store::Store;

/// Execute the init command
pub fn execute(cli: &Cli, store: &Store) -> Result<()> {
    output_by_format_result!(cli.format,
        json => {
            print_json_status(
                "ok",
                Some("Store initialized"),
                &[(
                    "store",
                    serde_json::json!(store.root().display().to_string()),
                )],
            )
        },
        human => {
            if !cli.quiet {
                println!("Initialized gradebook store at {}", store.root().display());
            }
        },
        records => {
            println!(
                "H gradebook=1 records=1 store={} mode=init status=ok",
                store.root().display()
            );
        }
    )
}
